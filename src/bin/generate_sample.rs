//! Writes a sample training-request sheet as CSV.
//!
//! Headers deliberately vary in case, accents and spacing from the titles
//! the viewer expects, so opening the file exercises header normalization.
//!
//! Usage: `generate_sample [OUTPUT]` (default `sample_requests.csv`).

use anyhow::{Context, Result};

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

    /// Uniform integer in `0..n`.
    fn below(&mut self, n: u64) -> u64 {
        self.next_u64() % n
    }

    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[self.below(items.len() as u64) as usize]
    }
}

const HEADERS: [&str; 9] = [
    "Marca temporal",
    "correo  del instructor",
    "Fecha de aprobacion",
    "Nombre del Programa de Formación",
    "CÓDIGO DE PROGRAMA",
    "Fecha de inicio de la formación ",
    "FECHA DE FINALIZACION DE LA FORMACION",
    "Numero de  ficha",
    "Código de solicitud",
];

const INSTRUCTORS: [&str; 4] = [
    "lmartinez@example.edu.co",
    "agomez@example.edu.co",
    "cperez@example.edu.co",
    "jrodriguez@example.edu.co",
];

const PROGRAMS: [(&str, &str); 5] = [
    ("Cocina básica", "134102"),
    ("Mantenimiento de computadores -- virtual", "228120"),
    ("Inglés nivel 1 -- A1", "9102001"),
    ("Contabilidad para no contadores", "122318"),
    ("Soldadura por arco -- taller", "832213"),
];

/// `YYYY-MM-DD` for a day offset within 2024 (months treated as 28 days).
fn date(day: u64) -> String {
    let month = (day / 28) % 12 + 1;
    let dom = day % 28 + 1;
    format!("2024-{month:02}-{dom:02}")
}

fn main() -> Result<()> {
    let output_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "sample_requests.csv".to_string());

    let mut rng = SimpleRng::new(42);
    let mut writer = csv::Writer::from_path(&output_path)
        .with_context(|| format!("creating {output_path}"))?;
    writer.write_record(HEADERS).context("writing header row")?;

    let n_rows = 60;
    for i in 0..n_rows {
        let (program, code) = PROGRAMS[rng.below(PROGRAMS.len() as u64) as usize];
        let requested = rng.below(200);
        let approved = requested + 1 + rng.below(10);
        let start = approved + 7 + rng.below(21);
        let end = start + 30 + rng.below(60);

        // Mix the timestamp formats a spreadsheet export produces.
        let marca = if i % 2 == 0 {
            format!("{} {:02}:{:02}:00", date(requested), rng.below(24), rng.below(60))
        } else {
            format!("{}T{:02}:{:02}:00", date(requested), rng.below(24), rng.below(60))
        };

        // Some rows carry stray whitespace around the email.
        let email = rng.pick(&INSTRUCTORS);
        let email = if i % 7 == 0 {
            format!("  {email} ")
        } else {
            email.to_string()
        };

        let ficha = 2_500_000 + rng.below(500_000);
        writer
            .write_record([
                marca,
                email,
                date(approved),
                program.to_string(),
                code.to_string(),
                date(start),
                date(end),
                ficha.to_string(),
                format!("SOL-{:05}", 1000 + i),
            ])
            .with_context(|| format!("writing row {i}"))?;
    }

    writer.flush().context("flushing CSV")?;
    println!("Wrote {n_rows} training requests to {output_path}");
    Ok(())
}
