//! Outlier Analyzer: quartile statistics of `dex_size` in megabytes, a
//! three-way split around Q1/Q3, Tukey outlier removal and a box plot of what
//! remains.

use std::fmt::Write as _;

use crate::config::{AnalyzerConfig, BYTES_PER_MB};
use crate::data::filter::{retain_within, valid_values};
use crate::data::loader::load_csv;
use crate::data::model::Dataset;
use crate::error::Result;
use crate::render::render_box_plot;
use crate::stats::{QuartileBuckets, QuartileSummary};

// ---------------------------------------------------------------------------
// Analysis result
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct Analysis {
    /// Rows that survived numeric coercion.
    pub original_count: usize,
    /// Rows dropped because the value did not coerce.
    pub dropped: usize,
    /// `None` when no row had a numeric value.
    pub summary: Option<QuartileSummary>,
    pub buckets: QuartileBuckets,
    /// Values in MB inside the Tukey bounds, file order.
    pub filtered: Vec<f64>,
}

impl Analysis {
    pub fn filtered_count(&self) -> usize {
        self.filtered.len()
    }

    /// The statistics block printed to stdout.
    pub fn report(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_report(&mut out);
        out
    }

    fn write_report(&self, out: &mut String) -> std::fmt::Result {
        match &self.summary {
            Some(s) => {
                writeln!(out, "📊 Quartile Statistics for dex_size (in MB):")?;
                writeln!(out, "   🔹 Q1 (25%): {:.2} MB", s.q1)?;
                writeln!(out, "   🔹 Median (50%): {:.2} MB", s.median)?;
                writeln!(out, "   🔹 Q3 (75%): {:.2} MB", s.q3)?;
                writeln!(out, "   🔹 IQR: {:.2} MB", s.iqr)?;
                writeln!(out, "   🔹 Outlier Lower Bound: {:.2} MB", s.lower_bound)?;
                writeln!(out, "   🔹 Outlier Upper Bound: {:.2} MB", s.upper_bound)?;
            }
            None => {
                writeln!(out, "📊 No numeric dex_size values found; quartiles are undefined.")?;
            }
        }

        writeln!(out, "\n📈 Data Distribution by dex_size_MB:")?;
        writeln!(out, "   🔸 Between 0 and Q1: {} rows", self.buckets.below_q1)?;
        writeln!(out, "   🔸 Between Q1 and Q3: {} rows", self.buckets.q1_to_q3)?;
        writeln!(out, "   🔸 Above Q3: {} rows", self.buckets.above_q3)?;

        writeln!(out, "\n📉 Original dataset size: {}", self.original_count)?;
        writeln!(
            out,
            "📉 Filtered dataset size (outliers removed): {}",
            self.filtered_count()
        )
    }
}

// ---------------------------------------------------------------------------
// Pipeline
// ---------------------------------------------------------------------------

/// Bytes → MB, quartiles, buckets and Tukey filtering for a loaded dataset.
pub fn analyze(dataset: &Dataset) -> Analysis {
    let values_mb: Vec<f64> = valid_values(dataset)
        .into_iter()
        .map(|bytes| bytes / BYTES_PER_MB)
        .collect();
    let dropped = dataset.len() - values_mb.len();
    if dropped > 0 {
        log::warn!(
            "Dropped {dropped} rows with a non-numeric {}",
            dataset.value_column()
        );
    }

    let summary = QuartileSummary::compute(&values_mb);
    let (buckets, filtered) = match &summary {
        Some(s) => {
            log::debug!(
                "Tukey bounds [{:.4}, {:.4}] MB around IQR {:.4}",
                s.lower_bound,
                s.upper_bound,
                s.iqr
            );
            (
                QuartileBuckets::count(&values_mb, s),
                retain_within(&values_mb, s.lower_bound, s.upper_bound),
            )
        }
        None => {
            log::warn!("No numeric values in column '{}'", dataset.value_column());
            (QuartileBuckets::default(), Vec::new())
        }
    };

    Analysis {
        original_count: values_mb.len(),
        dropped,
        summary,
        buckets,
        filtered,
    }
}

/// Load the configured CSV, print the report, write the box plot image.
pub fn run(config: &AnalyzerConfig) -> Result<Analysis> {
    let dataset = load_csv(&config.input, &config.column)?;
    let analysis = analyze(&dataset);

    print!("{}", analysis.report());

    render_box_plot(&analysis.filtered, &config.image_path)?;
    Ok(analysis)
}
