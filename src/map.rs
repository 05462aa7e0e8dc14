//! Map framing and render data for a stop sequence.
//!
//! Framing is computed when an editing session opens, not on every move, so
//! the view does not jump while the operator reorders stops.

use serde::{Deserialize, Serialize};

use crate::labels::ChildIndex;
use crate::point::{RoutePoint, StopKind};

/// Map framing configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapOptions {
    /// Center (lat, lng) used when no point is geolocated.
    pub default_center: (f64, f64),
    pub default_zoom: u8,
    pub single_point_zoom: u8,
    /// Zoom for 2 to 5 geolocated points.
    pub few_points_zoom: u8,
    /// Zoom for 6 to 10 geolocated points.
    pub medium_zoom: u8,
    /// Zoom for more than 10 geolocated points.
    pub wide_area_zoom: u8,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            default_center: (52.2297, 21.0122),
            default_zoom: 12,
            single_point_zoom: 15,
            few_points_zoom: 13,
            medium_zoom: 12,
            wide_area_zoom: 11,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MapSetup {
    pub center: (f64, f64),
    pub zoom: u8,
}

impl MapSetup {
    pub fn from_points(points: &[RoutePoint], options: &MapOptions) -> Self {
        let located: Vec<(f64, f64)> = points.iter().filter_map(RoutePoint::location).collect();
        if located.is_empty() {
            return Self {
                center: options.default_center,
                zoom: options.default_zoom,
            };
        }

        let count = located.len() as f64;
        let (lat_sum, lng_sum) = located
            .iter()
            .fold((0.0_f64, 0.0_f64), |(lat, lng), &(p_lat, p_lng)| (lat + p_lat, lng + p_lng));

        let zoom = match located.len() {
            1 => options.single_point_zoom,
            2..=5 => options.few_points_zoom,
            6..=10 => options.medium_zoom,
            _ => options.wide_area_zoom,
        };

        Self {
            center: (lat_sum / count, lng_sum / count),
            zoom,
        }
    }
}

/// A labelled marker for one geolocated stop.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapMarker {
    pub lat: f64,
    pub lng: f64,
    pub label: String,
    pub kind: StopKind,
    pub order: usize,
}

/// Builds markers for every geolocated point, in sequence order.
///
/// Points whose child is unknown to `labels` fall back to their order number.
pub fn markers(points: &[RoutePoint], labels: &ChildIndex) -> Vec<MapMarker> {
    points
        .iter()
        .filter_map(|point| {
            let (lat, lng) = point.location()?;
            let label = labels
                .label_for(point)
                .unwrap_or_else(|| point.order.to_string());
            Some(MapMarker {
                lat,
                lng,
                label,
                kind: point.kind,
                order: point.order,
            })
        })
        .collect()
}

/// The line drawn through the geolocated stops in sequence order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteLine {
    points: Vec<(f64, f64)>,
}

impl RouteLine {
    pub fn from_points(points: &[RoutePoint]) -> Self {
        Self {
            points: points.iter().filter_map(RoutePoint::location).collect(),
        }
    }

    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    /// A line needs at least two vertices to be drawn.
    pub fn is_drawable(&self) -> bool {
        self.points.len() >= 2
    }
}
