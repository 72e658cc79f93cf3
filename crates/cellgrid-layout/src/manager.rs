//! Container-level layout manager.

use cellgrid_core::{ComponentHost, Constraints, Gaps, GridError, Rect, Size};

use crate::grid::Grid;
use crate::snapshot::LayoutSnapshot;

/// Lays out a container's components with a root [`Grid`] inside the
/// container's insets.
#[derive(Debug, Clone)]
pub struct GridLayout<K> {
    root: Grid<K>,
    insets: Gaps,
}

impl<K> Default for GridLayout<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> GridLayout<K> {
    pub fn new() -> Self {
        Self { root: Grid::new(), insets: Gaps::EMPTY }
    }

    /// Set the container insets.
    pub fn with_insets(mut self, insets: Gaps) -> Self {
        self.insets = insets;
        self
    }

    pub fn insets(&self) -> Gaps {
        self.insets
    }

    pub fn root(&self) -> &Grid<K> {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Grid<K> {
        &mut self.root
    }

    /// Add a component to the root grid.
    pub fn add(&mut self, component: K, constraints: Constraints) -> Result<(), GridError> {
        self.root.register(component, constraints)
    }

    /// Add a sub-grid to the root grid.
    pub fn add_sub_grid(&mut self, constraints: Constraints) -> Result<&mut Grid<K>, GridError> {
        self.root.register_sub_grid(constraints)
    }

    pub fn preferred_layout_size<H: ComponentHost<K>>(&self, host: &H) -> Size {
        self.root.preferred_size(host).outset(&self.insets)
    }

    /// Grids never shrink below their preferred size.
    pub fn minimum_layout_size<H: ComponentHost<K>>(&self, host: &H) -> Size {
        self.preferred_layout_size(host)
    }

    /// Lay out the root grid inside `bounds` minus the insets.
    pub fn layout_container<H: ComponentHost<K>>(&self, host: &mut H, bounds: Rect) {
        self.root.layout(host, bounds.inset(&self.insets));
    }

    pub fn snapshot<H: ComponentHost<K>>(&self, host: &H, bounds: Rect) -> LayoutSnapshot<K>
    where
        K: Clone,
    {
        self.root.snapshot(host, bounds.inset(&self.insets))
    }
}

impl<K: PartialEq> GridLayout<K> {
    /// Remove a component from wherever it sits in the grid tree.
    pub fn remove(&mut self, component: &K) -> bool {
        self.root.unregister(component)
    }

    pub fn constraints_of(&self, component: &K) -> Option<&Constraints> {
        self.root.constraints_of(component)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedHost;

    impl ComponentHost<&'static str> for FixedHost {
        fn preferred_size(&self, _component: &&'static str) -> Size {
            Size::new(30, 10)
        }

        fn is_visible(&self, _component: &&'static str) -> bool {
            true
        }

        fn set_bounds(&mut self, _component: &&'static str, _bounds: Rect) {}
    }

    #[test]
    fn test_preferred_size_includes_insets() {
        let mut layout = GridLayout::new().with_insets(Gaps::new(1, 2, 3, 4));
        layout.add("label", Constraints::new(0, 0)).unwrap();
        assert_eq!(layout.preferred_layout_size(&FixedHost), Size::new(36, 14));
        assert_eq!(layout.minimum_layout_size(&FixedHost), Size::new(36, 14));
    }

    #[test]
    fn test_empty_layout_is_just_insets() {
        let layout: GridLayout<&'static str> = GridLayout::new().with_insets(Gaps::uniform(5));
        assert_eq!(layout.preferred_layout_size(&FixedHost), Size::new(10, 10));
    }

    #[test]
    fn test_snapshot_starts_inside_insets() {
        let mut layout = GridLayout::new().with_insets(Gaps::uniform(5));
        layout.add("field", Constraints::new(0, 0).fill()).unwrap();
        let snapshot = layout.snapshot(&FixedHost, Rect::new(0, 0, 40, 20));
        assert_eq!(snapshot.bounds, Rect::new(5, 5, 30, 10));
        assert_eq!(snapshot.find(&"field").map(|cell| cell.bounds), Some(Rect::new(5, 5, 30, 10)));
    }

    #[test]
    fn test_remove_and_lookup() {
        let mut layout = GridLayout::new();
        layout.add("a", Constraints::new(0, 0)).unwrap();
        let sub = layout.add_sub_grid(Constraints::new(1, 0)).unwrap();
        sub.register("b", Constraints::new(0, 0)).unwrap();

        assert_eq!(layout.constraints_of(&"b").map(|c| c.x), Some(0));
        assert!(layout.remove(&"b"));
        assert!(layout.constraints_of(&"b").is_none());
        assert!(!layout.remove(&"b"));
    }
}
