use crate::model::Post;
use chrono::{DateTime, Duration, Utc};

/// How long a deleted post stays restorable.
pub const UNDO_WINDOW_SECS: i64 = 6;

/// The single most-recently-deleted post, kept restorable for a bounded
/// window together with the position it was removed from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingDeletion {
    pub post: Post,
    pub index: usize,
}

/// Observable controller state: the restore affordance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UndoState {
    Idle,
    Pending { remaining_ms: i64 },
}

/// Two-state machine over the pending-deletion slot.
///
/// The expiry timer is a deadline checked against the injected clock's time:
/// on a single thread, a delayed callback and a lazy deadline comparison are
/// observationally the same, and the deadline form makes the restore-vs-
/// expire race a plain ordering of `now` against one instant.
///
/// Arming while already pending silently replaces the held record; the
/// earlier one is gone for good.
#[derive(Debug, Default)]
pub struct UndoController {
    pending: Option<(PendingDeletion, DateTime<Utc>)>,
}

impl UndoController {
    pub fn new() -> Self {
        Self::default()
    }

    /// idle → pending, or pending → pending (replace and reset the window).
    pub fn arm(&mut self, post: Post, index: usize, now: DateTime<Utc>) {
        let deadline = now + Duration::seconds(UNDO_WINDOW_SECS);
        self.pending = Some((PendingDeletion { post, index }, deadline));
    }

    /// Takes the pending deletion if the window is still open. An overdue
    /// slot is cleared and `None` returned, whichever way it is observed
    /// first.
    pub fn take(&mut self, now: DateTime<Utc>) -> Option<PendingDeletion> {
        self.expire_if_due(now);
        self.pending.take().map(|(pending, _)| pending)
    }

    /// Clears an overdue slot. Returns whether an expiry actually happened,
    /// so callers can withdraw the restore affordance exactly once.
    pub fn expire_if_due(&mut self, now: DateTime<Utc>) -> bool {
        match &self.pending {
            Some((_, deadline)) if now >= *deadline => {
                self.pending = None;
                true
            }
            _ => false,
        }
    }

    /// The raw slot, deadline not consulted. Used for id-uniqueness checks
    /// where an expired-but-uncleared record still counts as held.
    pub fn peek(&self) -> Option<&PendingDeletion> {
        self.pending.as_ref().map(|(pending, _)| pending)
    }

    pub fn state(&self, now: DateTime<Utc>) -> UndoState {
        match &self.pending {
            Some((_, deadline)) if now < *deadline => UndoState::Pending {
                remaining_ms: (*deadline - now).num_milliseconds(),
            },
            _ => UndoState::Idle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::manual::ManualClock;
    use crate::clock::Clock;
    use crate::store::memory::fixtures::post;

    #[test]
    fn starts_idle() {
        let clock = ManualClock::at(0);
        let controller = UndoController::new();
        assert_eq!(controller.state(clock.now()), UndoState::Idle);
    }

    #[test]
    fn arm_then_take_within_window() {
        let clock = ManualClock::at(0);
        let mut controller = UndoController::new();
        controller.arm(post(1, "A"), 0, clock.now());

        clock.advance_secs(5);
        let pending = controller.take(clock.now()).unwrap();
        assert_eq!(pending.post.id, 1);
        assert_eq!(pending.index, 0);
        assert_eq!(controller.state(clock.now()), UndoState::Idle);
    }

    #[test]
    fn window_closes_at_the_deadline() {
        let clock = ManualClock::at(0);
        let mut controller = UndoController::new();
        controller.arm(post(1, "A"), 0, clock.now());

        clock.advance_secs(UNDO_WINDOW_SECS);
        assert_eq!(controller.state(clock.now()), UndoState::Idle);
        assert!(controller.take(clock.now()).is_none());
    }

    #[test]
    fn second_arm_replaces_and_resets_the_window() {
        let clock = ManualClock::at(0);
        let mut controller = UndoController::new();
        controller.arm(post(1, "first"), 0, clock.now());

        clock.advance_secs(4);
        controller.arm(post(2, "second"), 1, clock.now());

        // 4s after the first arm plus 4s more: the first window would have
        // closed, but the reset one is still open.
        clock.advance_secs(4);
        let pending = controller.take(clock.now()).unwrap();
        assert_eq!(pending.post.id, 2);
    }

    #[test]
    fn expire_if_due_reports_once() {
        let clock = ManualClock::at(0);
        let mut controller = UndoController::new();
        controller.arm(post(1, "A"), 0, clock.now());

        clock.advance_secs(UNDO_WINDOW_SECS + 1);
        assert!(controller.expire_if_due(clock.now()));
        assert!(!controller.expire_if_due(clock.now()));
    }

    #[test]
    fn state_reports_remaining_time() {
        let clock = ManualClock::at(0);
        let mut controller = UndoController::new();
        controller.arm(post(1, "A"), 0, clock.now());

        clock.advance_ms(2_500);
        match controller.state(clock.now()) {
            UndoState::Pending { remaining_ms } => assert_eq!(remaining_ms, 3_500),
            UndoState::Idle => panic!("expected a pending deletion"),
        }
    }
}
