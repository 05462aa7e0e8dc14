//! Route stop model.

use serde::ser::{SerializeStruct, Serializer};
use serde::{Deserialize, Serialize};

/// Whether a stop picks a child up or drops them off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StopKind {
    Pickup,
    Dropoff,
}

/// One stop in a route's sequence.
///
/// `order` is 1-based. Whether the point can be placed on a map is derived
/// from the coordinates, see [`RoutePoint::has_coordinates`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutePoint {
    pub address: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub kind: StopKind,
    pub child_name: String,
    pub order: usize,
    /// Existing stop id, or a placeholder for a stop not yet persisted.
    pub stop_id: String,
    pub schedule_id: String,
    #[serde(default)]
    pub is_new: bool,
}

impl RoutePoint {
    pub fn new(
        stop_id: impl Into<String>,
        schedule_id: impl Into<String>,
        kind: StopKind,
        child_name: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            address: address.into(),
            latitude: None,
            longitude: None,
            kind,
            child_name: child_name.into(),
            order: 0,
            stop_id: stop_id.into(),
            schedule_id: schedule_id.into(),
            is_new: false,
        }
    }

    /// Sets both coordinates.
    pub fn at(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = Some(latitude);
        self.longitude = Some(longitude);
        self
    }

    pub fn with_order(mut self, order: usize) -> Self {
        self.order = order;
        self
    }

    /// Marks the point as injected by the current editing session.
    pub fn injected(mut self) -> Self {
        self.is_new = true;
        self
    }

    /// True iff both latitude and longitude are present.
    pub fn has_coordinates(&self) -> bool {
        self.location().is_some()
    }

    /// Location as (lat, lng) when geolocated.
    pub fn location(&self) -> Option<(f64, f64)> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lng)) => Some((lat, lng)),
            _ => None,
        }
    }
}

// Written by hand so `hasCoordinates` is always computed, never stored.
impl Serialize for RoutePoint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("RoutePoint", 10)?;
        state.serialize_field("address", &self.address)?;
        state.serialize_field("latitude", &self.latitude)?;
        state.serialize_field("longitude", &self.longitude)?;
        state.serialize_field("kind", &self.kind)?;
        state.serialize_field("childName", &self.child_name)?;
        state.serialize_field("order", &self.order)?;
        state.serialize_field("hasCoordinates", &self.has_coordinates())?;
        state.serialize_field("stopId", &self.stop_id)?;
        state.serialize_field("scheduleId", &self.schedule_id)?;
        state.serialize_field("isNew", &self.is_new)?;
        state.end()
    }
}
