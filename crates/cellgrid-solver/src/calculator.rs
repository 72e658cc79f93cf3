//! Per-axis size calculation.
//!
//! One calculator handles one axis of one grid. Cells feed it span
//! constraints ("columns `[start, start + span)` need at least `size`
//! pixels"); it answers with the minimal per-index sizes and with the final
//! boundary coordinates for a given total extent.

use std::collections::BTreeSet;

use smallvec::{smallvec, SmallVec};

/// Boundary coordinates of an axis: `coords[i]` is the start of index `i`,
/// `coords[count]` the end of the last index.
pub type Coords = SmallVec<[i32; 8]>;

type Sizes = SmallVec<[i32; 8]>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SpanConstraint {
    start: usize,
    span: usize,
    size: i32,
}

/// Minimum-size solver for one axis.
#[derive(Debug, Clone, Default)]
pub struct SizeCalculator {
    constraints: SmallVec<[SpanConstraint; 8]>,
    count: usize,
}

impl SizeCalculator {
    /// Create an empty calculator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Require `span` indices starting at `start` to be at least `size` long
    /// in total.
    ///
    /// The axis grows to cover `start + span`. A zero span contributes no
    /// size.
    pub fn add_constraint(&mut self, start: usize, span: usize, size: i32) {
        self.count = self.count.max(start + span);
        if span == 0 {
            return;
        }
        self.constraints.push(SpanConstraint { start, span, size });
    }

    /// Number of indices on the axis.
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Smallest per-index sizes satisfying every constraint.
    ///
    /// Single-span constraints set each index to the largest requirement
    /// anchored there. Multi-span constraints are then checked shortest span
    /// first; a shortfall is added to the last index of the span only.
    pub fn min_sizes(&self) -> SmallVec<[i32; 8]> {
        let mut sizes: Sizes = smallvec![0; self.count];
        let mut spanning: SmallVec<[SpanConstraint; 8]> = SmallVec::new();

        for constraint in &self.constraints {
            if constraint.span == 1 {
                let size = &mut sizes[constraint.start];
                *size = (*size).max(constraint.size);
            } else {
                spanning.push(*constraint);
            }
        }

        // Stable sort keeps registration order among equal spans
        spanning.sort_by_key(|c| c.span);

        for constraint in &spanning {
            let end = constraint.start + constraint.span;
            let current: i32 = sizes[constraint.start..end].iter().sum();
            if current < constraint.size {
                sizes[end - 1] += constraint.size - current;
            }
        }

        sizes
    }

    /// Total extent of the axis at minimum sizes.
    pub fn preferred_size(&self) -> i32 {
        self.min_sizes().iter().sum()
    }

    /// Resolve boundary coordinates for an axis of `total` length.
    ///
    /// The difference between `total` and the preferred size goes to the
    /// `resizable` indices only, split evenly; the first `remainder`
    /// resizable indices (ascending) get one extra pixel. When `total` is
    /// smaller than the preferred size the resizable indices shrink the same
    /// way, never below zero. Without resizable indices the minimum sizes are
    /// kept and the axis ends short of (or beyond) `total`.
    pub fn coords(&self, total: i32, resizable: &BTreeSet<usize>) -> Coords {
        let mut sizes = self.min_sizes();
        let extra = total - sizes.iter().sum::<i32>();
        let targets: SmallVec<[usize; 8]> = resizable
            .iter()
            .copied()
            .filter(|&index| index < self.count)
            .collect();

        if extra != 0 && !targets.is_empty() {
            let n = targets.len() as i32;
            let magnitude = extra.abs();
            let share = magnitude / n;
            let remainder = magnitude % n;

            for (k, &index) in targets.iter().enumerate() {
                let delta = share + i32::from((k as i32) < remainder);
                sizes[index] = if extra > 0 {
                    sizes[index] + delta
                } else {
                    (sizes[index] - delta).max(0)
                };
            }
        }

        let mut coords = Coords::with_capacity(sizes.len() + 1);
        let mut current = 0;
        coords.push(current);
        for size in &sizes {
            current += size;
            coords.push(current);
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(total, extra, coords = ?coords.as_slice(), "resolved axis coordinates");

        coords
    }
}
