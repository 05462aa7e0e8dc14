//! Stable per-child labels for route stops.
//!
//! Labels are derived from the sequence as it was when editing started, so
//! they stay attached to the same stop while points are reordered.

use std::collections::HashMap;

use crate::point::{RoutePoint, StopKind};

/// Maps each child to a 0-based index in first-occurrence order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChildIndex {
    indices: HashMap<String, usize>,
}

impl ChildIndex {
    pub fn from_points(points: &[RoutePoint]) -> Self {
        let mut indices = HashMap::new();
        for point in points {
            let next = indices.len();
            indices.entry(point.child_name.clone()).or_insert(next);
        }
        Self { indices }
    }

    pub fn index_of(&self, child_name: &str) -> Option<usize> {
        self.indices.get(child_name).copied()
    }

    /// Label for a point, `None` if its child was not in the original list.
    pub fn label_for(&self, point: &RoutePoint) -> Option<String> {
        self.index_of(&point.child_name)
            .map(|index| label(point.kind, index))
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// Renders `A(1)` for the first child's pickup, `A(2)` for its dropoff,
/// `B(1)` for the second child's pickup and so on.
///
/// Routes carry at most 26 children; later indices render as `?`.
pub fn label(kind: StopKind, child_index: usize) -> String {
    let letter = u8::try_from(child_index)
        .ok()
        .filter(|offset| *offset < 26)
        .map(|offset| char::from(b'A' + offset))
        .unwrap_or('?');
    let digit = match kind {
        StopKind::Pickup => 1,
        StopKind::Dropoff => 2,
    };
    format!("{}({})", letter, digit)
}
