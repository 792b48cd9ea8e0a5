//! Quartile statistics for the analyzer and the box plot geometry shared by
//! the PNG renderer and the viewer.

/// Multiplier applied to the IQR for the Tukey outlier fences.
pub const TUKEY_K: f64 = 1.5;

/// `p`-th quantile of **pre-sorted** data, linear interpolation between
/// closest ranks (`h = (n - 1) * p`).
///
/// Returns `None` for empty input or `p` outside `[0, 1]`.
pub fn quantile_sorted(sorted: &[f64], p: f64) -> Option<f64> {
    let n = sorted.len();
    if n == 0 || !(0.0..=1.0).contains(&p) {
        return None;
    }
    if n == 1 {
        return Some(sorted[0]);
    }

    let h = (n - 1) as f64 * p;
    let j = h.floor() as usize;
    let g = h - h.floor();

    if j + 1 >= n {
        Some(sorted[n - 1])
    } else {
        Some(sorted[j] + g * (sorted[j + 1] - sorted[j]))
    }
}

fn sorted_copy(values: &[f64]) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted
}

// ---------------------------------------------------------------------------
// QuartileSummary
// ---------------------------------------------------------------------------

/// Q1 / median / Q3 with the derived IQR and Tukey bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuartileSummary {
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub iqr: f64,
    pub lower_bound: f64,
    pub upper_bound: f64,
}

impl QuartileSummary {
    /// `None` when `values` is empty.
    pub fn compute(values: &[f64]) -> Option<Self> {
        Self::from_sorted(&sorted_copy(values))
    }

    fn from_sorted(sorted: &[f64]) -> Option<Self> {
        let q1 = quantile_sorted(sorted, 0.25)?;
        let median = quantile_sorted(sorted, 0.5)?;
        let q3 = quantile_sorted(sorted, 0.75)?;
        let iqr = q3 - q1;
        Some(QuartileSummary {
            q1,
            median,
            q3,
            iqr,
            lower_bound: q1 - TUKEY_K * iqr,
            upper_bound: q3 + TUKEY_K * iqr,
        })
    }

    /// Whether `value` lies inside the Tukey bounds (inclusive).
    pub fn contains(&self, value: f64) -> bool {
        self.lower_bound <= value && value <= self.upper_bound
    }
}

// ---------------------------------------------------------------------------
// QuartileBuckets
// ---------------------------------------------------------------------------

/// Descriptive three-way split around Q1 and Q3.
///
/// Independent from the outlier filter, which uses the Tukey bounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QuartileBuckets {
    pub below_q1: usize,
    pub q1_to_q3: usize,
    pub above_q3: usize,
}

impl QuartileBuckets {
    pub fn count(values: &[f64], summary: &QuartileSummary) -> Self {
        let mut buckets = QuartileBuckets::default();
        for &v in values {
            if v < summary.q1 {
                buckets.below_q1 += 1;
            } else if v > summary.q3 {
                buckets.above_q3 += 1;
            } else {
                buckets.q1_to_q3 += 1;
            }
        }
        buckets
    }

    pub fn total(&self) -> usize {
        self.below_q1 + self.q1_to_q3 + self.above_q3
    }
}

// ---------------------------------------------------------------------------
// BoxStats – what a box plot draws
// ---------------------------------------------------------------------------

/// Box plot geometry: the box spans Q1..Q3, whiskers reach the most extreme
/// data points still inside the Tukey bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxStats {
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub lower_whisker: f64,
    pub upper_whisker: f64,
    /// Points drawn individually beyond the whiskers.
    pub fliers: usize,
}

impl BoxStats {
    pub fn from_values(values: &[f64]) -> Option<Self> {
        let sorted = sorted_copy(values);
        let summary = QuartileSummary::from_sorted(&sorted)?;

        let inside: Vec<f64> = sorted
            .iter()
            .copied()
            .filter(|&v| summary.contains(v))
            .collect();
        // Never empty for non-empty input: the median rank is always inside.
        let lower_whisker = inside.first().copied().unwrap_or(summary.q1);
        let upper_whisker = inside.last().copied().unwrap_or(summary.q3);
        let fliers = sorted.len() - inside.len();

        Some(BoxStats {
            q1: summary.q1,
            median: summary.median,
            q3: summary.q3,
            lower_whisker,
            upper_whisker,
            fliers,
        })
    }
}
