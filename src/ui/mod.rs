/// UI layer: egui widgets that write the selection state, and renderers that
/// turn chart specs into pixels.
pub mod panels;
pub mod plot;
pub mod table;
