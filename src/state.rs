use std::path::{Path, PathBuf};

use crate::analyzer::Analysis;
use crate::stats::{BoxStats, QuartileBuckets, QuartileSummary};

// ---------------------------------------------------------------------------
// Viewer state
// ---------------------------------------------------------------------------

/// Everything the viewer window shows, independent of rendering.
pub struct ViewerState {
    /// Outlier-free values in MB.
    pub values: Vec<f64>,

    /// Box geometry of `values` (None when empty).
    pub box_stats: Option<BoxStats>,

    /// Quartiles of the full dataset, before outlier removal.
    pub summary: Option<QuartileSummary>,

    pub buckets: QuartileBuckets,

    pub original_count: usize,

    /// Where the static PNG was written.
    pub image_path: PathBuf,

    /// Overlay the individual values under the box.
    pub show_points: bool,
}

impl ViewerState {
    pub fn from_analysis(analysis: &Analysis, image_path: &Path) -> Self {
        Self {
            values: analysis.filtered.clone(),
            box_stats: BoxStats::from_values(&analysis.filtered),
            summary: analysis.summary,
            buckets: analysis.buckets,
            original_count: analysis.original_count,
            image_path: image_path.to_path_buf(),
            show_points: false,
        }
    }

    pub fn filtered_count(&self) -> usize {
        self.values.len()
    }

    /// Label/value rows for the statistics panel.
    pub fn stat_rows(&self) -> Vec<(&'static str, String)> {
        let mut rows = Vec::new();
        if let Some(s) = &self.summary {
            rows.push(("Q1 (25%)", format!("{:.2} MB", s.q1)));
            rows.push(("Median (50%)", format!("{:.2} MB", s.median)));
            rows.push(("Q3 (75%)", format!("{:.2} MB", s.q3)));
            rows.push(("IQR", format!("{:.2} MB", s.iqr)));
            rows.push(("Lower bound", format!("{:.2} MB", s.lower_bound)));
            rows.push(("Upper bound", format!("{:.2} MB", s.upper_bound)));
        }
        rows.push(("Below Q1", format!("{} rows", self.buckets.below_q1)));
        rows.push(("Q1 to Q3", format!("{} rows", self.buckets.q1_to_q3)));
        rows.push(("Above Q3", format!("{} rows", self.buckets.above_q3)));
        rows
    }
}
