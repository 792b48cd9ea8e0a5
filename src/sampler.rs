//! Range Sampler: keep rows whose `dex_size` lies in `[min, max]` and write at
//! most [`SAMPLE_CAP`] of them, drawn reproducibly, to a new CSV.

use std::path::Path;

use crate::config::{SAMPLE_CAP, SAMPLE_SEED, VALUE_COLUMN};
use crate::data::filter::range_indices;
use crate::data::loader::{load_csv, write_csv};
use crate::data::model::Dataset;
use crate::error::Result;
use crate::sampling::sample_indices;

/// Counts reported after a sampler run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleOutcome {
    /// Rows written to the output file.
    pub written: usize,
}

/// Row indices to write, in output order.
///
/// Fewer than `cap` matches: every match in file order. Otherwise exactly
/// `cap` distinct matches drawn with `seed`.
pub fn select_rows(dataset: &Dataset, min: f64, max: f64, cap: usize, seed: u64) -> Vec<usize> {
    let matches = range_indices(dataset, min, max);
    log::debug!("{} of {} rows in [{min}, {max}]", matches.len(), dataset.len());
    if matches.len() < cap {
        return matches;
    }
    sample_indices(matches.len(), cap, seed)
        .into_iter()
        .map(|i| matches[i])
        .collect()
}

/// Load `input`, select rows in `[min_size, max_size]`, sample, write `output`.
pub fn filter_and_sample(
    input: &Path,
    min_size: i64,
    max_size: i64,
    output: &Path,
) -> Result<SampleOutcome> {
    let dataset = load_csv(input, VALUE_COLUMN)?;

    let invalid = (0..dataset.len())
        .filter(|&i| dataset.value(i).is_none())
        .count();
    if invalid > 0 {
        log::warn!("{invalid} rows have a non-numeric {VALUE_COLUMN} and are never selected");
    }

    let rows = select_rows(&dataset, min_size as f64, max_size as f64, SAMPLE_CAP, SAMPLE_SEED);

    let written = write_csv(
        output,
        &dataset.headers,
        rows.iter().map(|&i| &dataset.records[i]),
    )?;

    Ok(SampleOutcome { written })
}

#[cfg(test)]
mod tests {
    use super::*;
    use csv::StringRecord;
    use std::collections::BTreeSet;

    fn dataset(sizes: impl IntoIterator<Item = String>) -> Dataset {
        let headers = StringRecord::from(vec!["row", "dex_size"]);
        let records = sizes
            .into_iter()
            .enumerate()
            .map(|(i, s)| StringRecord::from(vec![i.to_string(), s]))
            .collect();
        Dataset::new(headers, records, "dex_size").unwrap()
    }

    #[test]
    fn few_matches_are_kept_in_file_order() {
        let ds = dataset((0..20).map(|i| (i * 100).to_string()));
        let rows = select_rows(&ds, 500.0, 1000.0, SAMPLE_CAP, SAMPLE_SEED);
        assert_eq!(rows, vec![5, 6, 7, 8, 9, 10]);
    }

    #[test]
    fn many_matches_are_capped_and_stay_in_range() {
        let ds = dataset((0..3000).map(|i| i.to_string()));
        let rows = select_rows(&ds, 1000.0, 2499.0, SAMPLE_CAP, SAMPLE_SEED);
        assert_eq!(rows.len(), SAMPLE_CAP);
        let unique: BTreeSet<usize> = rows.iter().copied().collect();
        assert_eq!(unique.len(), SAMPLE_CAP);
        assert!(rows.iter().all(|&r| (1000..=2499).contains(&r)));
    }

    #[test]
    fn exactly_cap_matches_are_all_selected() {
        let ds = dataset((0..1000).map(|i| i.to_string()));
        let rows = select_rows(&ds, 0.0, 999.0, SAMPLE_CAP, SAMPLE_SEED);
        let unique: BTreeSet<usize> = rows.iter().copied().collect();
        assert_eq!(unique, (0..1000).collect::<BTreeSet<usize>>());
    }

    #[test]
    fn selection_is_deterministic() {
        let ds = dataset((0..4000).map(|i| (i % 700).to_string()));
        let a = select_rows(&ds, 100.0, 600.0, SAMPLE_CAP, SAMPLE_SEED);
        let b = select_rows(&ds, 100.0, 600.0, SAMPLE_CAP, SAMPLE_SEED);
        assert_eq!(a, b);
    }

    #[test]
    fn filter_and_sample_writes_the_selected_rows() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.csv");
        let output = dir.path().join("out.csv");
        let mut text = String::from("row,dex_size\n");
        for i in 0..2500 {
            text.push_str(&format!("r{i},{i}\n"));
        }
        // short row: no dex_size cell at all
        text.push_str("short\n");
        std::fs::write(&input, text).unwrap();

        let outcome = filter_and_sample(&input, 100, 1600, &output).unwrap();
        assert_eq!(outcome.written, SAMPLE_CAP);

        let shipped = crate::data::loader::load_csv(&output, VALUE_COLUMN).unwrap();
        let expected = select_rows(
            &crate::data::loader::load_csv(&input, VALUE_COLUMN).unwrap(),
            100.0,
            1600.0,
            SAMPLE_CAP,
            SAMPLE_SEED,
        );
        let written: Vec<String> = shipped.records.iter().map(|r| r[0].to_string()).collect();
        let selected: Vec<String> = expected.iter().map(|i| format!("r{i}")).collect();
        assert_eq!(written, selected);
    }

    #[test]
    fn non_numeric_rows_never_match() {
        let ds = dataset(["10", "abc", "", "20", "NaN"].map(String::from));
        assert_eq!(select_rows(&ds, f64::MIN, f64::MAX, SAMPLE_CAP, SAMPLE_SEED), vec![0, 3]);
    }
}
