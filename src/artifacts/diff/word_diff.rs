use crate::artifacts::diff::alignment::AlignmentTable;
use crate::artifacts::diff::segment::DiffSegment;
use crate::artifacts::diff::token::Token;
use derive_new::new;

pub trait DiffAlgorithm<'d> {
    type Table;
    type EditPath;
    type EditScript;

    fn compute_table(&self) -> Self::Table;
    fn backtrack(&self) -> Self::EditPath;
    fn diff(&self) -> Self::EditScript;
}

/// Word diff backed by an LCS score table.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct LcsWordDiff<'d> {
    prev: &'d [Token],
    curr: &'d [Token],
}

impl<'d> DiffAlgorithm<'d> for LcsWordDiff<'d> {
    type Table = AlignmentTable;
    type EditPath = Vec<DiffSegment>;
    type EditScript = Vec<DiffSegment>;

    fn compute_table(&self) -> Self::Table {
        AlignmentTable::build(self.prev, self.curr)
    }

    /// Walks the table from the last token pair back to `(-1, -1)`.
    ///
    /// Segments come out last-first. On a tie between the left and upper neighbour the walk
    /// takes the insertion, and once `prev` is exhausted only insertions remain.
    fn backtrack(&self) -> Self::EditPath {
        let table = self.compute_table();
        let (mut i, mut j) = (self.prev.len() as isize - 1, self.curr.len() as isize - 1);
        let mut edit_path = Vec::with_capacity(self.prev.len() + self.curr.len());

        while i >= 0 || j >= 0 {
            if i >= 0 && j >= 0 && self.prev[i as usize] == self.curr[j as usize] {
                // diagonal
                edit_path.push(DiffSegment::Equal(self.prev[i as usize].clone()));
                i -= 1;
                j -= 1;
            } else if j >= 0 && (i == -1 || table.score(i, j - 1) >= table.score(i - 1, j)) {
                edit_path.push(DiffSegment::Inserted(self.curr[j as usize].clone()));
                j -= 1;
            } else {
                // i >= 0 here, and either j == -1 or the upper neighbour scores higher
                edit_path.push(DiffSegment::Deleted(self.prev[i as usize].clone()));
                i -= 1;
            }

            tracing::trace!(i, j, segment = ?edit_path.last(), "backtrack step");
        }

        edit_path
    }

    fn diff(&self) -> Self::EditScript {
        let mut diff = self.backtrack();
        diff.reverse();
        diff
    }
}
