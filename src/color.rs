use eframe::egui::Color32;

use crate::data::model::Species;

// ---------------------------------------------------------------------------
// Species palette
// ---------------------------------------------------------------------------

// Fixed 3-way mapping used by every chart. Kept identical across views so a
// species reads the same everywhere.
pub const ADELIE_YELLOW: Color32 = Color32::from_rgb(0xE6, 0xC4, 0x19);
pub const CHINSTRAP_BROWN: Color32 = Color32::from_rgb(0x8B, 0x57, 0x2B);
pub const GENTOO_GREEN: Color32 = Color32::from_rgb(0x2E, 0x8B, 0x3A);

/// Colour for a species.
pub fn species_color(species: Species) -> Color32 {
    match species {
        Species::Adelie => ADELIE_YELLOW,
        Species::Chinstrap => CHINSTRAP_BROWN,
        Species::Gentoo => GENTOO_GREEN,
    }
}

/// Legend entries (species label → colour), in [`Species::ALL`] order.
pub fn legend_entries() -> [(Species, Color32); 3] {
    [
        (Species::Adelie, ADELIE_YELLOW),
        (Species::Chinstrap, CHINSTRAP_BROWN),
        (Species::Gentoo, GENTOO_GREEN),
    ]
}
