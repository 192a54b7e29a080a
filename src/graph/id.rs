//! Fixed-width player identifiers.

/// Renders player indices as zero-padded identifiers of equal width.
///
/// The width is the number of decimal digits in the player *count*, not in
/// the largest index, so 10 players get two-digit ids `00`..`09`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdFormatter {
    width: usize,
}

impl IdFormatter {
    pub fn new(player_count: usize) -> Self {
        let width = player_count
            .checked_ilog10()
            .map_or(1, |digits| digits as usize + 1);
        Self { width }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Format `index` padded with leading zeros to the identifier width
    pub fn format(&self, index: usize) -> String {
        format!("{:0width$}", index, width = self.width)
    }
}
