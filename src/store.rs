//! Editable stop sequence with a lagging map copy.
//!
//! The store owns two independent copies of the sequence: the working copy
//! that moves mutate, and the displayed copy last handed to the map. After
//! every effective move the working copy's `order` fields are `1..=N`.

use tracing::debug;

use crate::point::RoutePoint;

#[derive(Debug, Clone, Default)]
pub struct PointsReorderStore {
    working: Vec<RoutePoint>,
    displayed: Vec<RoutePoint>,
    has_pending_changes: bool,
    map_needs_refresh: bool,
}

impl PointsReorderStore {
    pub fn new(points: &[RoutePoint]) -> Self {
        let mut store = Self::default();
        store.reset(points);
        store
    }

    /// Replaces both copies with clones of `points`.
    ///
    /// Pending changes start out set when the list already contains injected
    /// points, since those exist only locally.
    pub fn reset(&mut self, points: &[RoutePoint]) {
        self.working = points.to_vec();
        self.displayed = points.to_vec();
        self.has_pending_changes = points.iter().any(|point| point.is_new);
        self.map_needs_refresh = false;
    }

    /// Swaps the point at `index` with its predecessor.
    pub fn move_up(&mut self, index: usize) -> bool {
        if index == 0 || index >= self.working.len() {
            return false;
        }
        self.working.swap(index, index - 1);
        self.after_move();
        debug!(index, "moved stop up");
        true
    }

    /// Swaps the point at `index` with its successor.
    pub fn move_down(&mut self, index: usize) -> bool {
        if index >= self.working.len().saturating_sub(1) {
            return false;
        }
        self.working.swap(index, index + 1);
        self.after_move();
        debug!(index, "moved stop down");
        true
    }

    /// Moves the stop with `stop_id` so it ends up at 1-based `target_order`.
    ///
    /// Targets outside `1..=N` are clamped. The other points keep their
    /// relative order.
    pub fn move_to_position(&mut self, stop_id: &str, target_order: usize) -> bool {
        let Some(current) = self.working.iter().position(|point| point.stop_id == stop_id) else {
            return false;
        };
        let target = target_order.clamp(1, self.working.len()) - 1;
        if target == current {
            return false;
        }

        let point = self.working.remove(current);
        self.working.insert(target, point);
        self.after_move();
        debug!(stop_id, target = target + 1, "moved stop to position");
        true
    }

    /// Copies the working sequence into the displayed one.
    pub fn refresh(&mut self) {
        self.displayed.clone_from(&self.working);
        self.map_needs_refresh = false;
    }

    /// Clears both flags once the working copy has been committed.
    pub fn mark_saved(&mut self) {
        self.has_pending_changes = false;
        self.map_needs_refresh = false;
    }

    pub fn working(&self) -> &[RoutePoint] {
        &self.working
    }

    pub fn displayed(&self) -> &[RoutePoint] {
        &self.displayed
    }

    pub fn has_pending_changes(&self) -> bool {
        self.has_pending_changes
    }

    pub fn map_needs_refresh(&self) -> bool {
        self.map_needs_refresh
    }

    fn after_move(&mut self) {
        renumber(&mut self.working);
        self.has_pending_changes = true;
        self.map_needs_refresh = true;
    }
}

fn renumber(points: &mut [RoutePoint]) {
    for (position, point) in points.iter_mut().enumerate() {
        point.order = position + 1;
    }
}
