//! stop-sequencer
//!
//! Reordering, validation and display data for the pickup/dropoff stops of a
//! child-transport route.

pub mod point;
pub mod labels;
pub mod validation;
pub mod stats;
pub mod store;
pub mod map;
pub mod traits;
pub mod session;
pub mod http;

pub use point::{RoutePoint, StopKind};
pub use session::{EditorSession, SaveError, SessionError, SessionState};
pub use traits::SequenceCommitter;
