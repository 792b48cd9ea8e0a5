use anyhow::{Context, Result};

use dex_prep::config::{BYTES_PER_MB, DEFAULT_INPUT, VALUE_COLUMN};
use dex_prep::sampling::SimpleRng;

const DEFAULT_ROWS: usize = 5000;

/// Log-normal dex size in bytes, centred around `median_mb`.
fn dex_size(rng: &mut SimpleRng, median_mb: f64, sigma: f64) -> u64 {
    let mu = (median_mb * BYTES_PER_MB).ln();
    rng.gauss(mu, sigma).exp().round() as u64
}

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let output_path = args.next().unwrap_or_else(|| DEFAULT_INPUT.to_string());
    let rows: usize = match args.next() {
        Some(n) => n.parse().with_context(|| format!("row count '{n}' is not a number"))?,
        None => DEFAULT_ROWS,
    };

    let mut rng = SimpleRng::new(42);
    let categories = ["game", "tools", "social", "finance", "media"];

    let mut writer = csv::Writer::from_path(&output_path)
        .with_context(|| format!("creating {output_path}"))?;
    writer.write_record(["app_id", "pkg_name", "category", VALUE_COLUMN])?;

    let mut invalid = 0;
    for row in 0..rows {
        let category = categories[rng.below(categories.len() as u64) as usize];
        let roll = rng.next_f64();
        let size = if roll < 0.01 {
            // Unparsable cells, as found in scraped metadata.
            invalid += 1;
            ["", "N/A", "unknown"][row % 3].to_string()
        } else if roll < 0.02 {
            // Heavy outliers well past the upper fence.
            dex_size(&mut rng, 60.0, 0.3).to_string()
        } else {
            dex_size(&mut rng, 4.0, 0.6).to_string()
        };

        writer.write_record([
            format!("{row:06}"),
            format!("com.example.{category}{row}"),
            category.to_string(),
            size,
        ])?;
    }
    writer.flush().context("flushing CSV")?;

    println!("Wrote {rows} rows ({invalid} with a non-numeric {VALUE_COLUMN}) to {output_path}");
    Ok(())
}
