use crate::artifacts::diff::token::Token;

/// Score assigned to every cell on the `i = -1` / `j = -1` boundary.
///
/// One rather than the textbook zero. Interior comparisons are unaffected, but along the edges
/// the walk in `word_diff` resolves ties towards insertions. Changing it changes which of the
/// equally short diffs gets emitted.
pub const BOUNDARY_SCORE: usize = 1;

/// LCS score table over every prefix pair of two token sequences.
///
/// Logical indices run from `-1` to `len - 1` on both axes and are stored shifted by one in a
/// single row-major buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignmentTable {
    columns: usize,
    cells: Vec<usize>,
}

impl AlignmentTable {
    pub fn build(prev: &[Token], curr: &[Token]) -> Self {
        let (rows, columns) = (prev.len() + 1, curr.len() + 1);
        let mut table = Self {
            columns,
            cells: vec![BOUNDARY_SCORE; rows * columns],
        };

        for (i, prev_token) in prev.iter().enumerate() {
            for (j, curr_token) in curr.iter().enumerate() {
                let (i, j) = (i as isize, j as isize);

                let score = if prev_token == curr_token {
                    table.score(i - 1, j - 1) + 1
                } else {
                    table.score(i, j - 1).max(table.score(i - 1, j))
                };

                let offset = table.offset(i, j);
                table.cells[offset] = score;
            }
        }

        tracing::debug!(rows, columns, "built alignment table");

        table
    }

    /// Score of the prefix pair ending at `prev[i]` and `curr[j]`, either index may be `-1`.
    pub fn score(&self, i: isize, j: isize) -> usize {
        self.cells[self.offset(i, j)]
    }

    fn offset(&self, i: isize, j: isize) -> usize {
        debug_assert!(i >= -1 && j >= -1, "index below boundary: ({i}, {j})");

        (i + 1) as usize * self.columns + (j + 1) as usize
    }
}
