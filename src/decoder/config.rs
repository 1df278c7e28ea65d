use std::sync::OnceLock;

/// Default number of differing pixels tolerated between scanlines of one row
pub const DEFAULT_MAX_ROW_DIFFERENCE: usize = 6;
/// Default number of consecutive matching scanlines before a row is accepted
pub const DEFAULT_MIN_MATCHING_SCANS: usize = 2;

fn parse_env_usize(name: &str, default: usize) -> usize {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(default)
}

static MAX_ROW_DIFFERENCE: OnceLock<usize> = OnceLock::new();

pub(crate) fn max_row_difference() -> usize {
    *MAX_ROW_DIFFERENCE.get_or_init(|| {
        parse_env_usize("PDF417_MAX_ROW_DIFFERENCE", DEFAULT_MAX_ROW_DIFFERENCE).clamp(0, 64)
    })
}

static MIN_MATCHING_SCANS: OnceLock<usize> = OnceLock::new();

pub(crate) fn min_matching_scans() -> usize {
    *MIN_MATCHING_SCANS.get_or_init(|| {
        parse_env_usize("PDF417_MIN_MATCHING_SCANS", DEFAULT_MIN_MATCHING_SCANS).clamp(1, 16)
    })
}

/// Tunables of the row synchronizer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncParams {
    /// Scanlines differing in at most this many pixels belong to the same row
    pub max_row_difference: usize,
    /// Consecutive matching scanlines needed before a row becomes active
    pub min_matching_scans: usize,
}

impl SyncParams {
    /// Parameters with `PDF417_MAX_ROW_DIFFERENCE` / `PDF417_MIN_MATCHING_SCANS` applied
    pub fn from_env() -> Self {
        Self {
            max_row_difference: max_row_difference(),
            min_matching_scans: min_matching_scans(),
        }
    }
}

impl Default for SyncParams {
    fn default() -> Self {
        Self {
            max_row_difference: DEFAULT_MAX_ROW_DIFFERENCE,
            min_matching_scans: DEFAULT_MIN_MATCHING_SCANS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = SyncParams::default();
        assert_eq!(params.max_row_difference, 6);
        assert_eq!(params.min_matching_scans, 2);
    }

    #[test]
    fn test_parse_env_falls_back() {
        assert_eq!(parse_env_usize("PDF417_TEST_UNSET_VARIABLE", 7), 7);
    }
}
