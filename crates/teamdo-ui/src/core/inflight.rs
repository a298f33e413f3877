//! In-flight permits for serialized work.
//!
//! # Design
//! - At most one operation per lane; independent lanes run concurrently.
//! - Each todo collection is a lane, and so is the team directory, so a
//!   result is always written back over the state it started from.
//! - Permits release on drop so error paths cannot leak a busy lane.

use crate::core::scope::Scope;
use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

/// Unit of serialized work.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Lane {
    /// One todo collection: sync and mutations.
    List(Scope),
    /// Team cards: load, create, join and delete.
    TeamDirectory,
}

impl From<Scope> for Lane {
    fn from(scope: Scope) -> Self {
        Self::List(scope)
    }
}

/// Registry of lanes with an outstanding operation.
#[derive(Clone, Debug, Default)]
pub struct InFlight {
    busy: Rc<RefCell<HashSet<Lane>>>,
}

impl PartialEq for InFlight {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.busy, &other.busy)
    }
}

impl InFlight {
    /// Claim `lane`, or `None` when an operation is already outstanding there.
    #[must_use]
    pub fn try_acquire(&self, lane: impl Into<Lane>) -> Option<InFlightPermit> {
        let lane = lane.into();
        if self.busy.borrow_mut().insert(lane) {
            Some(InFlightPermit {
                busy: Rc::clone(&self.busy),
                lane,
            })
        } else {
            None
        }
    }

    /// Whether `lane` currently holds a permit.
    #[must_use]
    pub fn is_busy(&self, lane: impl Into<Lane>) -> bool {
        self.busy.borrow().contains(&lane.into())
    }
}

/// RAII marker for one outstanding operation.
#[derive(Debug)]
pub struct InFlightPermit {
    busy: Rc<RefCell<HashSet<Lane>>>,
    lane: Lane,
}

impl Drop for InFlightPermit {
    fn drop(&mut self) {
        self.busy.borrow_mut().remove(&self.lane);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_permit_for_same_lane_is_refused() {
        let inflight = InFlight::default();
        let first = inflight.try_acquire(Scope::Personal);
        assert!(first.is_some());
        assert!(inflight.try_acquire(Scope::Personal).is_none());
        assert!(inflight.try_acquire(Scope::Team(1)).is_some());
        assert!(inflight.try_acquire(Lane::TeamDirectory).is_some());
    }

    #[test]
    fn drop_releases_lane() {
        let inflight = InFlight::default();
        {
            let _permit = inflight.try_acquire(Scope::Team(9)).expect("permit");
            assert!(inflight.is_busy(Scope::Team(9)));
            assert!(!inflight.is_busy(Lane::TeamDirectory));
        }
        assert!(!inflight.is_busy(Scope::Team(9)));
        assert!(inflight.try_acquire(Scope::Team(9)).is_some());
    }
}
