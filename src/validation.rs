//! Pickup-before-dropoff validation.

use std::collections::HashMap;

use serde::Serialize;

use crate::point::{RoutePoint, StopKind};

/// Outcome of validating a candidate stop sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    /// Violations in scan order.
    pub errors: Vec<String>,
}

/// Checks that every child's dropoff comes after their pickup.
///
/// The slice position is the intended order; `order` fields are not
/// consulted, so a sequence seeded with placeholder orders still validates by
/// where its points sit.
pub fn validate_order(points: &[RoutePoint]) -> ValidationResult {
    let mut last_pickup: HashMap<&str, usize> = HashMap::new();
    let mut errors = Vec::new();

    for (position, point) in points.iter().enumerate() {
        match point.kind {
            StopKind::Pickup => {
                last_pickup.insert(point.child_name.as_str(), position);
            }
            StopKind::Dropoff => match last_pickup.get(point.child_name.as_str()) {
                None => errors.push(format!(
                    "{}: dropoff occurs before pickup",
                    point.child_name
                )),
                Some(&pickup) if pickup >= position => errors.push(format!(
                    "{}: dropoff must come after pickup",
                    point.child_name
                )),
                Some(_) => {}
            },
        }
    }

    ValidationResult {
        is_valid: errors.is_empty(),
        errors,
    }
}
