//! Interface to the host toolkit's components.

use crate::types::{Rect, Size};

/// Access to the components a grid lays out.
///
/// The grid never owns components. It stores a key `K` per cell and asks
/// the host about that key whenever it needs a measurement. All queries
/// happen on the caller's thread during a single layout call.
pub trait ComponentHost<K> {
    /// Natural size of the component.
    fn preferred_size(&self, component: &K) -> Size;

    /// Invisible components are skipped entirely and take no space.
    fn is_visible(&self, component: &K) -> bool;

    /// Distance from the component's top edge to its text baseline when
    /// laid out at `width` x `height`. `None` (or a negative value) means
    /// the component has no baseline.
    fn baseline(&self, _component: &K, _width: i32, _height: i32) -> Option<i32> {
        None
    }

    /// Apply the final bounds.
    fn set_bounds(&mut self, component: &K, bounds: Rect);
}
