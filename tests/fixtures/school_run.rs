//! Morning school-run routes.

#![allow(dead_code)]

use stop_sequencer::{RoutePoint, StopKind};

pub const SCHEDULE: &str = "schedule-12";

/// Builds a stop; coordinates are optional to model ungeocoded addresses.
pub fn stop(
    stop_id: &str,
    kind: StopKind,
    child: &str,
    address: &str,
    coords: Option<(f64, f64)>,
    order: usize,
) -> RoutePoint {
    let point = RoutePoint::new(stop_id, SCHEDULE, kind, child, address).with_order(order);
    match coords {
        Some((lat, lng)) => point.at(lat, lng),
        None => point,
    }
}

const SP12: (&str, Option<(f64, f64)>) = ("SP 12, ul. Zlota 7", Some((52.2330, 21.0050)));

/// Three children picked up at home and dropped at two schools.
pub fn morning_run() -> Vec<RoutePoint> {
    let (school, school_coords) = SP12;
    vec![
        stop("101", StopKind::Pickup, "Alice", "ul. Mokotowska 12", Some((52.2230, 21.0170)), 1),
        stop("102", StopKind::Pickup, "Bartek", "ul. Hoza 40", Some((52.2260, 21.0140)), 2),
        stop("103", StopKind::Dropoff, "Alice", school, school_coords, 3),
        stop("104", StopKind::Pickup, "Celina", "ul. Marszalkowska 99", None, 4),
        stop("105", StopKind::Dropoff, "Bartek", school, school_coords, 5),
        stop(
            "106",
            StopKind::Dropoff,
            "Celina",
            "LO 4, ul. Emilii Plater 29",
            Some((52.2280, 21.0020)),
            6,
        ),
    ]
}

/// `morning_run` plus a new child injected locally at the end.
pub fn morning_run_with_new_child() -> Vec<RoutePoint> {
    let (school, school_coords) = SP12;
    let mut points = morning_run();
    points.push(
        stop("new-1", StopKind::Pickup, "Dawid", "ul. Wspolna 3", Some((52.2275, 21.0155)), 7)
            .injected(),
    );
    points.push(stop("new-2", StopKind::Dropoff, "Dawid", school, school_coords, 8).injected());
    points
}

/// Linear congruential generator so property loops are reproducible.
pub struct Lcg(u64);

impl Lcg {
    pub fn new(seed: u64) -> Self {
        Self(seed)
    }

    pub fn next_below(&mut self, bound: usize) -> usize {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        ((self.0 >> 33) % bound as u64) as usize
    }
}
