//! Seams between the sequencing engine and its host application.

use crate::point::RoutePoint;

/// Receives a validated, renumbered stop sequence when an editing session is
/// saved.
///
/// Persisting the sequence is entirely up to the implementation. Any closure
/// `FnMut(&[RoutePoint]) -> Result<(), E>` is a committer.
pub trait SequenceCommitter {
    type Error;

    fn commit(&mut self, points: &[RoutePoint]) -> Result<(), Self::Error>;
}

impl<F, E> SequenceCommitter for F
where
    F: FnMut(&[RoutePoint]) -> Result<(), E>,
{
    type Error = E;

    fn commit(&mut self, points: &[RoutePoint]) -> Result<(), E> {
        self(points)
    }
}
