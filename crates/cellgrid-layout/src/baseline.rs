//! Baseline aggregation for cells sharing a row.

use cellgrid_core::{Constraints, VerticalAlign};
use indexmap::IndexMap;

/// Shared ascent/descent of the baseline-aligned cells in one row group.
///
/// Both values include the cells' top/bottom gaps and exclude their visual
/// paddings, so `height()` is the padded row height the group needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct RowBaselineData {
    pub max_above_baseline: i32,
    pub max_below_baseline: i32,
}

impl RowBaselineData {
    pub fn height(&self) -> i32 {
        self.max_above_baseline + self.max_below_baseline
    }

    /// Offset of the shared baseline from the top of a row of `row_height`.
    pub fn baseline_offset(&self, align: VerticalAlign, row_height: i32) -> i32 {
        match align {
            VerticalAlign::Top | VerticalAlign::Fill => self.max_above_baseline,
            VerticalAlign::Center => (row_height - self.height()) / 2 + self.max_above_baseline,
            VerticalAlign::Bottom => row_height - self.max_below_baseline,
        }
    }
}

/// Baseline groups of one grid, keyed by row and vertical alignment.
#[derive(Debug, Clone, Default)]
pub(crate) struct BaselineGroups {
    rows: IndexMap<(usize, VerticalAlign), RowBaselineData>,
}

impl BaselineGroups {
    /// Only single-row cells that do not stretch vertically can share a
    /// baseline.
    pub fn is_supported(constraints: &Constraints) -> bool {
        constraints.height == 1 && constraints.vertical_align != VerticalAlign::Fill
    }

    pub fn clear(&mut self) {
        self.rows.clear();
    }

    pub fn register(&mut self, constraints: &Constraints, ascent: i32, descent: i32) {
        let data = self
            .rows
            .entry((constraints.y, constraints.vertical_align))
            .or_default();
        data.max_above_baseline = data.max_above_baseline.max(ascent);
        data.max_below_baseline = data.max_below_baseline.max(descent);
    }

    pub fn get(&self, constraints: &Constraints) -> Option<&RowBaselineData> {
        self.rows.get(&(constraints.y, constraints.vertical_align))
    }
}
