//! Input Debouncing
//!
//! Amount inputs wait for a quiet period before filtering. Each keystroke
//! takes a ticket; when its timer fires, the value is applied only if no
//! newer ticket has been issued since.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Proof of which keystroke scheduled a pending update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceTicket(u64);

/// Monotonic counter deciding which pending update is still wanted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Generation(u64);

impl Generation {
    /// New ticket; every earlier ticket is now stale
    pub fn issue(&mut self) -> DebounceTicket {
        self.0 = self.0.wrapping_add(1);
        DebounceTicket(self.0)
    }

    /// Invalidate all outstanding tickets without issuing one
    pub fn cancel(&mut self) {
        self.0 = self.0.wrapping_add(1);
    }

    pub fn is_current(&self, ticket: DebounceTicket) -> bool {
        self.0 == ticket.0
    }
}

/// Trailing-edge debouncer bound to the reactive owner that created it
#[derive(Clone, Copy)]
pub struct Debouncer {
    generation: StoredValue<Generation>,
    delay_ms: u32,
}

impl Debouncer {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            generation: StoredValue::new(Generation::default()),
            delay_ms,
        }
    }

    /// Run `apply` after the delay unless another call supersedes it first
    pub fn run(&self, apply: impl FnOnce() + 'static) {
        let Some(ticket) = self.generation.try_update_value(|g| g.issue()) else {
            return;
        };
        let generation = self.generation;
        let delay_ms = self.delay_ms;

        spawn_local(async move {
            TimeoutFuture::new(delay_ms).await;
            if generation.try_with_value(|g| g.is_current(ticket)).unwrap_or(false) {
                apply();
            } else {
                log::trace!("debounced update superseded");
            }
        });
    }

    /// Drop any pending update
    pub fn cancel(&self) {
        self.generation.try_update_value(|g| g.cancel());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_ticket_wins() {
        let mut generation = Generation::default();
        let first = generation.issue();
        let second = generation.issue();
        let third = generation.issue();

        assert!(!generation.is_current(first));
        assert!(!generation.is_current(second));
        assert!(generation.is_current(third));
    }

    #[test]
    fn test_cancel_invalidates_pending() {
        let mut generation = Generation::default();
        let ticket = generation.issue();
        generation.cancel();
        assert!(!generation.is_current(ticket));

        let next = generation.issue();
        assert!(generation.is_current(next));
    }

    #[test]
    fn test_tickets_are_distinct() {
        let mut generation = Generation::default();
        let a = generation.issue();
        let b = generation.issue();
        assert_ne!(a, b);
    }
}
