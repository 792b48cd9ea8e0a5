use std::path::PathBuf;

use crate::error::{PrepError, Result};

// ---------------------------------------------------------------------------
// Fixed settings shared by both tools
// ---------------------------------------------------------------------------

/// The numeric column all filtering and statistics are driven by.
pub const VALUE_COLUMN: &str = "dex_size";

/// Bytes in one megabyte (binary).
pub const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Maximum number of rows the sampler writes.
pub const SAMPLE_CAP: usize = 1000;

/// Seed of the sampler's generator, so reruns pick the same rows.
pub const SAMPLE_SEED: u64 = 42;

/// Input read by the analyzer from the working directory.
pub const DEFAULT_INPUT: &str = "latest.csv";

/// Image written by the analyzer to the working directory.
pub const DEFAULT_IMAGE: &str = "boxplot_dex_size_MB_filtered.png";

/// Set to anything but `0` to keep the analyzer from opening a window.
pub const HEADLESS_ENV: &str = "DEX_PREP_HEADLESS";

// ---------------------------------------------------------------------------
// Analyzer configuration
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    pub input: PathBuf,
    pub image_path: PathBuf,
    pub column: String,
    /// Open the interactive viewer after writing the image.
    pub show_viewer: bool,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            image_path: PathBuf::from(DEFAULT_IMAGE),
            column: VALUE_COLUMN.to_string(),
            show_viewer: false,
        }
    }
}

impl AnalyzerConfig {
    /// Fixed paths, viewer enabled when a display exists and
    /// [`HEADLESS_ENV`] is not set.
    pub fn from_env() -> Self {
        let headless = std::env::var(HEADLESS_ENV)
            .map(|v| !v.is_empty() && v != "0")
            .unwrap_or(false);
        Self {
            show_viewer: !headless && display_available(),
            ..Self::default()
        }
    }
}

/// Whether a window can be opened at all.
pub fn display_available() -> bool {
    if cfg!(any(target_os = "macos", target_os = "windows")) {
        return true;
    }
    ["DISPLAY", "WAYLAND_DISPLAY"]
        .iter()
        .any(|var| std::env::var_os(var).is_some_and(|v| !v.is_empty()))
}

// ---------------------------------------------------------------------------
// Sampler arguments
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SamplerArgs {
    pub input: PathBuf,
    pub min_size: i64,
    pub max_size: i64,
    pub output: PathBuf,
}

impl SamplerArgs {
    /// Parse `<program> <input.csv> <min_size> <max_size> <output.csv>`.
    ///
    /// The first item is the program name, as with [`std::env::args`].
    /// A wrong argument count yields [`PrepError::Usage`] carrying the line
    /// to print.
    pub fn parse<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let args: Vec<String> = args.into_iter().collect();
        let program = args
            .first()
            .map(|p| program_name(p))
            .unwrap_or_else(|| "filter-pick-range".to_string());

        let [_, input, min_size, max_size, output] = args.as_slice() else {
            return Err(PrepError::Usage(usage(&program)));
        };

        Ok(SamplerArgs {
            input: PathBuf::from(input),
            min_size: parse_int("min_size", min_size)?,
            max_size: parse_int("max_size", max_size)?,
            output: PathBuf::from(output),
        })
    }
}

pub fn usage(program: &str) -> String {
    format!("Usage: {program} <input.csv> <min_size> <max_size> <output.csv>")
}

fn program_name(arg0: &str) -> String {
    std::path::Path::new(arg0)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(arg0)
        .to_string()
}

fn parse_int(name: &'static str, value: &str) -> Result<i64> {
    value
        .trim()
        .parse::<i64>()
        .map_err(|source| PrepError::NumericParse {
            name,
            value: value.to_string(),
            source,
        })
}
