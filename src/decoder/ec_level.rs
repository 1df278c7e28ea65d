//! Error-correction level recovery from row indicators
//!
//! Within every cluster of three rows the left indicator of the middle row
//! and the right indicator of the last row carry the same value, which
//! encodes the error-correction level. The first triple whose two reads
//! agree fixes the level for the rest of the decode.

/// Per-decode indicator bookkeeping
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EcLevelRecoverer {
    left_column: Option<u16>,
    level: Option<u8>,
    rows: usize,
}

impl EcLevelRecoverer {
    /// Fresh state with no level known
    pub fn new() -> Self {
        Self::default()
    }

    /// Level recovered so far
    pub fn level(&self) -> Option<u8> {
        self.level
    }

    /// True once a triple agreed
    pub fn is_resolved(&self) -> bool {
        self.level.is_some()
    }

    /// Record the left indicator of a row
    pub fn observe_left(&mut self, row_number: usize, value: Option<u16>) {
        if self.is_resolved() {
            return;
        }
        if row_number % 3 == 1 {
            self.left_column = value;
        }
    }

    /// Compare the right indicator of a row against the remembered left one
    pub fn observe_right(&mut self, row_number: usize, value: Option<u16>) {
        if self.is_resolved() || row_number % 3 != 2 {
            return;
        }
        let (Some(right), Some(left)) = (value, self.left_column) else {
            return;
        };
        if right != left || left == 0 {
            return;
        }
        // `rows` is published after the scan, so it reads 0 mid-decode.
        // Truncating division keeps the level in 0..=9.
        let level = (i32::from(right % 30) - (self.rows % 3) as i32) / 3;
        self.level = Some(level as u8);

        if cfg!(debug_assertions) && crate::debug::debug_enabled() {
            eprintln!(
                "PDF417: ec level {} from indicator {} at row {}",
                level, right, row_number
            );
        }
    }

    /// Record the final row count of the scan
    pub fn publish_rows(&mut self, rows: usize) {
        self.rows = rows;
    }

    /// Rows published by the last completed scan
    pub fn rows(&self) -> usize {
        self.rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_agreeing_triple_sets_level() {
        let mut ec = EcLevelRecoverer::new();
        ec.observe_left(1, Some(7));
        ec.observe_right(2, Some(7));
        assert_eq!(ec.level(), Some(2));
    }

    #[test]
    fn test_level_uses_value_mod_thirty() {
        let mut ec = EcLevelRecoverer::new();
        ec.observe_left(4, Some(55));
        ec.observe_right(5, Some(55));
        assert_eq!(ec.level(), Some(8));
    }

    #[test]
    fn test_disagreement_leaves_level_unknown() {
        let mut ec = EcLevelRecoverer::new();
        ec.observe_left(1, Some(7));
        ec.observe_right(2, Some(8));
        assert_eq!(ec.level(), None);
    }

    #[test]
    fn test_zero_and_unreadable_indicators_are_ignored() {
        let mut ec = EcLevelRecoverer::new();
        ec.observe_left(1, Some(0));
        ec.observe_right(2, Some(0));
        assert_eq!(ec.level(), None);

        ec.observe_left(1, None);
        ec.observe_right(2, None);
        assert_eq!(ec.level(), None);
    }

    #[test]
    fn test_wrong_residues_are_ignored() {
        let mut ec = EcLevelRecoverer::new();
        ec.observe_left(0, Some(7));
        ec.observe_right(2, Some(7));
        assert_eq!(ec.level(), None);

        ec.observe_left(1, Some(7));
        ec.observe_right(3, Some(7));
        assert_eq!(ec.level(), None);
    }

    #[test]
    fn test_first_agreement_wins() {
        let mut ec = EcLevelRecoverer::new();
        ec.observe_left(1, Some(7));
        ec.observe_right(2, Some(7));
        ec.observe_left(4, Some(25));
        ec.observe_right(5, Some(25));
        assert_eq!(ec.level(), Some(2));
    }

    #[test]
    fn test_published_rows_shift_level() {
        let mut ec = EcLevelRecoverer::new();
        ec.publish_rows(5);
        ec.observe_left(1, Some(7));
        ec.observe_right(2, Some(7));
        // (7 - 2) / 3
        assert_eq!(ec.level(), Some(1));
        assert_eq!(ec.rows(), 5);
    }
}
