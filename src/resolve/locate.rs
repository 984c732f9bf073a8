use crate::model::Declaration;

/// Index of the last declaration starting at or before `line`.
///
/// `declarations` must be in ascending line order. Returns `None` when `line`
/// precedes every declaration (or there are none); a line past the last
/// declaration's start maps to the last declaration.
pub fn locate(declarations: &[Declaration], line: usize) -> Option<usize> {
    declarations
        .partition_point(|d| d.line <= line)
        .checked_sub(1)
}
