//! Display counters for a stop sequence.

use serde::Serialize;

use crate::point::RoutePoint;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteStats {
    pub total_points: usize,
    pub existing_points: usize,
    pub new_points: usize,
    /// Points that can be placed on the map.
    pub valid_points: usize,
    pub missing_coordinates: usize,
}

impl RouteStats {
    pub fn from_points(points: &[RoutePoint]) -> Self {
        let total_points = points.len();
        let new_points = points.iter().filter(|point| point.is_new).count();
        let valid_points = points.iter().filter(|point| point.has_coordinates()).count();

        Self {
            total_points,
            existing_points: total_points - new_points,
            new_points,
            valid_points,
            missing_coordinates: total_points - valid_points,
        }
    }
}
