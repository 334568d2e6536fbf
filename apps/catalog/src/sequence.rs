use std::cell::Cell;

/// Monotonic request counter for one display region.
///
/// Every trigger writes the same region, so a completion is applied only when
/// its ticket is the newest issued for the region, whichever trigger issued it.
#[derive(Debug, Default)]
pub struct RequestTracker {
    latest: Cell<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

impl Ticket {
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl RequestTracker {
    pub const fn new() -> Self {
        Self {
            latest: Cell::new(0),
        }
    }

    pub fn issue(&self) -> Ticket {
        let next = self.latest.get().wrapping_add(1);
        self.latest.set(next);
        Ticket(next)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.latest.get() == ticket.0
    }
}
