//! Mock host shared by the integration tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;

use cellgrid_layout::{ComponentHost, Rect, Size};

#[derive(Debug, Clone, Copy)]
pub struct MockComponent {
    pub preferred: Size,
    pub visible: bool,
    pub baseline: Option<i32>,
}

/// Components keyed by `u32`, recording every `set_bounds` and baseline
/// query.
#[derive(Debug, Default)]
pub struct MockHost {
    components: HashMap<u32, MockComponent>,
    pub bounds: HashMap<u32, Rect>,
    pub baseline_queries: RefCell<Vec<(u32, i32, i32)>>,
}

impl MockHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, key: u32, width: i32, height: i32) -> &mut Self {
        self.components.insert(
            key,
            MockComponent { preferred: Size::new(width, height), visible: true, baseline: None },
        );
        self
    }

    pub fn add_with_baseline(&mut self, key: u32, width: i32, height: i32, baseline: i32) -> &mut Self {
        self.components.insert(
            key,
            MockComponent {
                preferred: Size::new(width, height),
                visible: true,
                baseline: Some(baseline),
            },
        );
        self
    }

    pub fn set_visible(&mut self, key: u32, visible: bool) {
        if let Some(component) = self.components.get_mut(&key) {
            component.visible = visible;
        }
    }

    pub fn bounds_of(&self, key: u32) -> Rect {
        self.bounds.get(&key).copied().unwrap_or_else(|| panic!("component {key} was not laid out"))
    }
}

impl ComponentHost<u32> for MockHost {
    fn preferred_size(&self, component: &u32) -> Size {
        self.components.get(component).map(|c| c.preferred).unwrap_or_default()
    }

    fn is_visible(&self, component: &u32) -> bool {
        self.components.get(component).map(|c| c.visible).unwrap_or(false)
    }

    fn baseline(&self, component: &u32, width: i32, height: i32) -> Option<i32> {
        self.baseline_queries.borrow_mut().push((*component, width, height));
        self.components.get(component).and_then(|c| c.baseline)
    }

    fn set_bounds(&mut self, component: &u32, bounds: Rect) {
        self.bounds.insert(*component, bounds);
    }
}
