use csv::StringRecord;

// ---------------------------------------------------------------------------
// Record – one row of the CSV
// ---------------------------------------------------------------------------

/// One input row. Cells stay as the original text so every column can be
/// written back untouched.
pub type Record = StringRecord;

/// Coerce a cell to a number the way a lenient numeric parser would.
///
/// Surrounding whitespace is ignored. Empty or unparsable text, NaN and
/// infinities all count as "not a number".
pub fn coerce_numeric(cell: &str) -> Option<f64> {
    let trimmed = cell.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded table
// ---------------------------------------------------------------------------

/// A loaded CSV table with one distinguished numeric column.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// Header row, written back verbatim on output.
    pub headers: StringRecord,
    /// All rows in file order.
    pub records: Vec<Record>,
    /// Position of the value column inside each record.
    value_index: usize,
}

impl Dataset {
    /// Build a dataset, resolving `column` against the headers.
    /// Header names must match exactly; returns `None` if none does.
    pub fn new(headers: StringRecord, records: Vec<Record>, column: &str) -> Option<Self> {
        let value_index = headers.iter().position(|h| h == column)?;
        Some(Dataset {
            headers,
            records,
            value_index,
        })
    }

    pub fn value_index(&self) -> usize {
        self.value_index
    }

    pub fn value_column(&self) -> &str {
        self.headers.get(self.value_index).unwrap_or_default()
    }

    /// Numeric value of the value column for a row, if it coerces.
    pub fn value(&self, row: usize) -> Option<f64> {
        self.records
            .get(row)
            .and_then(|r| r.get(self.value_index))
            .and_then(coerce_numeric)
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
