//! Interactive stop-sequence editing session.
//!
//! A session is either closed or open. Opening copies the caller's points;
//! saving hands the edited copy to a [`SequenceCommitter`]; cancelling throws
//! the edits away. The caller's own list is never touched.

use std::error::Error;
use std::fmt;

use tracing::{debug, info, warn};

use crate::labels::ChildIndex;
use crate::map::{self, MapMarker, MapOptions, MapSetup, RouteLine};
use crate::point::RoutePoint;
use crate::stats::RouteStats;
use crate::store::PointsReorderStore;
use crate::traits::SequenceCommitter;
use crate::validation::{validate_order, ValidationResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Closed,
    Open,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// The operation needs an open session.
    NotOpen,
    /// The working sequence has ordering violations.
    InvalidOrder { errors: Vec<String> },
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::NotOpen => write!(f, "editing session is not open"),
            SessionError::InvalidOrder { errors } => {
                write!(f, "stop order is invalid: {}", errors.join("; "))
            }
        }
    }
}

impl Error for SessionError {}

#[derive(Debug)]
pub enum SaveError<E> {
    Session(SessionError),
    /// The committer refused the sequence; the session stays open.
    Commit(E),
}

impl<E> From<SessionError> for SaveError<E> {
    fn from(err: SessionError) -> Self {
        SaveError::Session(err)
    }
}

impl<E: fmt::Display> fmt::Display for SaveError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SaveError::Session(err) => write!(f, "{}", err),
            SaveError::Commit(err) => write!(f, "failed to commit stop order: {}", err),
        }
    }
}

impl<E: Error + 'static> Error for SaveError<E> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SaveError::Session(err) => Some(err),
            SaveError::Commit(err) => Some(err),
        }
    }
}

#[derive(Debug, Clone)]
pub struct EditorSession {
    options: MapOptions,
    state: SessionState,
    original: Vec<RoutePoint>,
    store: PointsReorderStore,
    labels: ChildIndex,
    map_setup: MapSetup,
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new(MapOptions::default())
    }
}

impl EditorSession {
    pub fn new(options: MapOptions) -> Self {
        let map_setup = MapSetup::from_points(&[], &options);
        Self {
            options,
            state: SessionState::Closed,
            original: Vec::new(),
            store: PointsReorderStore::default(),
            labels: ChildIndex::default(),
            map_setup,
        }
    }

    /// Opens the session on a copy of `points`, discarding any earlier edits.
    pub fn open(&mut self, points: &[RoutePoint]) {
        self.seed(points);
        self.state = SessionState::Open;
        info!(
            points = points.len(),
            children = self.labels.len(),
            pending = self.store.has_pending_changes(),
            "opened stop editing session"
        );
    }

    /// Re-seeds an open session after the caller's input list changed.
    pub fn update_input(&mut self, points: &[RoutePoint]) -> Result<(), SessionError> {
        self.ensure_open()?;
        self.seed(points);
        debug!(points = points.len(), "reloaded session input");
        Ok(())
    }

    pub fn move_up(&mut self, index: usize) -> Result<bool, SessionError> {
        self.ensure_open()?;
        Ok(self.store.move_up(index))
    }

    pub fn move_down(&mut self, index: usize) -> Result<bool, SessionError> {
        self.ensure_open()?;
        Ok(self.store.move_down(index))
    }

    pub fn move_to_position(
        &mut self,
        stop_id: &str,
        target_order: usize,
    ) -> Result<bool, SessionError> {
        self.ensure_open()?;
        Ok(self.store.move_to_position(stop_id, target_order))
    }

    /// Redraws the map from the working copy. Only allowed while the order is valid.
    pub fn refresh(&mut self) -> Result<(), SessionError> {
        self.ensure_open()?;
        let validation = self.validation();
        if !validation.is_valid {
            warn!(errors = validation.errors.len(), "refresh rejected");
            return Err(SessionError::InvalidOrder {
                errors: validation.errors,
            });
        }
        self.store.refresh();
        debug!("map refreshed");
        Ok(())
    }

    /// Commits the working copy and closes the session.
    ///
    /// Nothing changes when the order is invalid or the committer fails.
    pub fn save<C>(&mut self, committer: &mut C) -> Result<(), SaveError<C::Error>>
    where
        C: SequenceCommitter,
    {
        self.ensure_open()?;
        let validation = self.validation();
        if !validation.is_valid {
            warn!(errors = ?validation.errors, "save rejected");
            return Err(SessionError::InvalidOrder {
                errors: validation.errors,
            }
            .into());
        }

        debug!(points = self.store.working().len(), "saving stop order");
        if let Err(err) = committer.commit(self.store.working()) {
            warn!("commit failed, session left open");
            return Err(SaveError::Commit(err));
        }

        self.store.mark_saved();
        self.state = SessionState::Closed;
        info!("saved stop editing session");
        Ok(())
    }

    /// Restores the original points and closes the session.
    pub fn cancel(&mut self) -> Result<(), SessionError> {
        self.ensure_open()?;
        self.store.reset(&self.original);
        self.state = SessionState::Closed;
        info!("cancelled stop editing session");
        Ok(())
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == SessionState::Open
    }

    pub fn validation(&self) -> ValidationResult {
        validate_order(self.store.working())
    }

    pub fn stats(&self) -> RouteStats {
        RouteStats::from_points(self.store.working())
    }

    pub fn working(&self) -> &[RoutePoint] {
        self.store.working()
    }

    pub fn displayed(&self) -> &[RoutePoint] {
        self.store.displayed()
    }

    pub fn has_pending_changes(&self) -> bool {
        self.store.has_pending_changes()
    }

    pub fn map_needs_refresh(&self) -> bool {
        self.store.map_needs_refresh()
    }

    pub fn map_setup(&self) -> MapSetup {
        self.map_setup
    }

    pub fn labels(&self) -> &ChildIndex {
        &self.labels
    }

    /// Markers for the displayed copy.
    pub fn markers(&self) -> Vec<MapMarker> {
        map::markers(self.store.displayed(), &self.labels)
    }

    pub fn route_line(&self) -> RouteLine {
        RouteLine::from_points(self.store.displayed())
    }

    fn seed(&mut self, points: &[RoutePoint]) {
        self.original = points.to_vec();
        self.store.reset(points);
        self.labels = ChildIndex::from_points(points);
        self.map_setup = MapSetup::from_points(points, &self.options);
    }

    fn ensure_open(&self) -> Result<(), SessionError> {
        match self.state {
            SessionState::Open => Ok(()),
            SessionState::Closed => Err(SessionError::NotOpen),
        }
    }
}
