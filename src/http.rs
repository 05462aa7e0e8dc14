//! HTTP adapter that persists a saved stop order through the dashboard API.

use std::collections::HashSet;
use std::error::Error;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::point::{RoutePoint, StopKind};
use crate::traits::SequenceCommitter;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            timeout_secs: 10,
        }
    }
}

#[derive(Debug)]
pub enum HttpCommitError {
    Http(reqwest::Error),
    /// The server answered with a non-success status.
    Rejected { stop_id: String, status: u16 },
}

impl From<reqwest::Error> for HttpCommitError {
    fn from(err: reqwest::Error) -> Self {
        HttpCommitError::Http(err)
    }
}

impl fmt::Display for HttpCommitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HttpCommitError::Http(err) => write!(f, "request failed: {}", err),
            HttpCommitError::Rejected { stop_id, status } => {
                write!(f, "stop '{}' rejected with status {}", stop_id, status)
            }
        }
    }
}

impl Error for HttpCommitError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            HttpCommitError::Http(err) => Some(err),
            HttpCommitError::Rejected { .. } => None,
        }
    }
}

/// Body of the order update for an existing stop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderUpdate {
    pub order: usize,
}

/// Body used to create a stop injected during editing.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewStop<'a> {
    pub address: &'a str,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub kind: StopKind,
    pub child_name: &'a str,
    pub order: usize,
}

/// One request the updater will send for a point.
#[derive(Debug, Clone, PartialEq)]
pub enum StopRequest<'a> {
    Update { url: String, body: OrderUpdate },
    Create { url: String, body: NewStop<'a> },
}

impl<'a> StopRequest<'a> {
    pub fn for_point(base_url: &str, point: &'a RoutePoint) -> Self {
        let base_url = base_url.trim_end_matches('/');
        if point.is_new {
            StopRequest::Create {
                url: format!("{}/schedules/{}/stops", base_url, point.schedule_id),
                body: NewStop {
                    address: &point.address,
                    latitude: point.latitude,
                    longitude: point.longitude,
                    kind: point.kind,
                    child_name: &point.child_name,
                    order: point.order,
                },
            }
        } else {
            StopRequest::Update {
                url: format!("{}/stops/{}", base_url, point.stop_id),
                body: OrderUpdate { order: point.order },
            }
        }
    }
}

/// Sends one request per stop, in sequence order, stopping at the first failure.
///
/// Injected stops created by an attempt that later failed are remembered, so a
/// retry of the same save does not create them twice. The memory is cleared
/// once a whole sequence has been committed.
#[derive(Debug, Clone)]
pub struct HttpStopUpdater {
    config: HttpConfig,
    client: reqwest::blocking::Client,
    created: HashSet<String>,
}

impl HttpStopUpdater {
    pub fn new(config: HttpConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            config,
            client,
            created: HashSet::new(),
        })
    }

    fn send(&self, point: &RoutePoint) -> Result<(), HttpCommitError> {
        let request = match StopRequest::for_point(&self.config.base_url, point) {
            StopRequest::Update { url, body } => self.client.patch(url).json(&body),
            StopRequest::Create { url, body } => self.client.post(url).json(&body),
        };

        let response = request.send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(HttpCommitError::Rejected {
                stop_id: point.stop_id.clone(),
                status: status.as_u16(),
            });
        }
        Ok(())
    }
}

impl SequenceCommitter for HttpStopUpdater {
    type Error = HttpCommitError;

    fn commit(&mut self, points: &[RoutePoint]) -> Result<(), HttpCommitError> {
        for point in points {
            if point.is_new && self.created.contains(&point.stop_id) {
                debug!(stop_id = %point.stop_id, "stop already created, skipping");
                continue;
            }
            if let Err(err) = self.send(point) {
                warn!(stop_id = %point.stop_id, error = %err, "stop update failed");
                return Err(err);
            }
            if point.is_new {
                self.created.insert(point.stop_id.clone());
            }
            debug!(stop_id = %point.stop_id, order = point.order, "stop persisted");
        }
        self.created.clear();
        Ok(())
    }
}
