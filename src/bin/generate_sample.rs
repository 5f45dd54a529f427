//! Regenerates `assets/penguins.csv`: a deterministic sample dataset with
//! the Palmer penguins schema and species-typical measurement distributions.

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

struct SpeciesProfile {
    species: &'static str,
    islands: &'static [&'static str],
    count: usize,
    bill_length: (f64, f64),
    bill_depth: (f64, f64),
    flipper_length: (f64, f64),
    body_mass: (f64, f64),
}

/// Means and standard deviations per species, close to the published Palmer
/// Station summary statistics.
const PROFILES: [SpeciesProfile; 3] = [
    SpeciesProfile {
        species: "Adelie",
        islands: &["Torgersen", "Biscoe", "Dream"],
        count: 152,
        bill_length: (38.8, 2.7),
        bill_depth: (18.3, 1.2),
        flipper_length: (190.0, 6.5),
        body_mass: (3700.0, 460.0),
    },
    SpeciesProfile {
        species: "Gentoo",
        islands: &["Biscoe"],
        count: 124,
        bill_length: (47.5, 3.1),
        bill_depth: (15.0, 1.0),
        flipper_length: (217.0, 6.5),
        body_mass: (5076.0, 504.0),
    },
    SpeciesProfile {
        species: "Chinstrap",
        islands: &["Dream"],
        count: 68,
        bill_length: (48.8, 3.3),
        bill_depth: (18.4, 1.1),
        flipper_length: (196.0, 7.1),
        body_mass: (3733.0, 384.0),
    },
];

const YEARS: [i32; 3] = [2007, 2008, 2009];

fn main() {
    let mut rng = SimpleRng::new(42);

    let output_path = "assets/penguins.csv";
    let mut writer = csv::Writer::from_path(output_path).expect("Failed to create output file");
    writer
        .write_record([
            "species",
            "island",
            "bill_length_mm",
            "bill_depth_mm",
            "flipper_length_mm",
            "body_mass_g",
            "sex",
            "year",
        ])
        .expect("Failed to write header");

    let mut rows = 0usize;
    for profile in &PROFILES {
        for _ in 0..profile.count {
            let island = profile.islands[(rng.next_u64() % profile.islands.len() as u64) as usize];
            let year = YEARS[(rng.next_u64() % YEARS.len() as u64) as usize];
            // A couple of rows miss every measurement; a few more miss sex.
            let measured = rng.next_f64() >= 0.006;
            let sex_known = rng.next_f64() >= 0.03;
            let sex = if rng.next_f64() < 0.5 { "male" } else { "female" };

            let bill_length = rng.gauss(profile.bill_length.0, profile.bill_length.1);
            let bill_depth = rng.gauss(profile.bill_depth.0, profile.bill_depth.1);
            let flipper_length = rng.gauss(profile.flipper_length.0, profile.flipper_length.1);
            let body_mass = rng.gauss(profile.body_mass.0, profile.body_mass.1);

            let record: [String; 8] = if measured {
                [
                    profile.species.to_string(),
                    island.to_string(),
                    format!("{bill_length:.1}"),
                    format!("{bill_depth:.1}"),
                    format!("{}", flipper_length.round() as i64),
                    // Body mass is recorded to the nearest 25 g.
                    format!("{}", ((body_mass / 25.0).round() * 25.0) as i64),
                    if sex_known {
                        sex.to_string()
                    } else {
                        String::new()
                    },
                    year.to_string(),
                ]
            } else {
                [
                    profile.species.to_string(),
                    island.to_string(),
                    String::new(),
                    String::new(),
                    String::new(),
                    String::new(),
                    String::new(),
                    year.to_string(),
                ]
            };
            writer.write_record(&record).expect("Failed to write record");
            rows += 1;
        }
    }

    writer.flush().expect("Failed to flush output");
    println!("Wrote {rows} penguins to {output_path}");
}
