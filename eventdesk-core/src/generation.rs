//! Request generations.
//!
//! A controller hands out a `Ticket` when it starts talking to the store and
//! only applies the response if that ticket is still current. Starting a
//! newer request of the same kind, or tearing the view down, supersedes
//! every outstanding ticket.

/// Proof that a response belongs to a particular request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug, Default)]
pub struct Generation {
    current: u64,
}

impl Generation {
    /// Supersede all outstanding tickets and issue a new one.
    pub fn next(&mut self) -> Ticket {
        self.current += 1;
        Ticket(self.current)
    }

    /// Supersede all outstanding tickets without issuing a new one.
    pub fn invalidate(&mut self) {
        self.current += 1;
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latest_ticket_is_current() {
        let mut generation = Generation::default();
        let first = generation.next();
        assert!(generation.is_current(first));

        let second = generation.next();
        assert!(!generation.is_current(first));
        assert!(generation.is_current(second));
    }

    #[test]
    fn invalidate_supersedes_outstanding_ticket() {
        let mut generation = Generation::default();
        let ticket = generation.next();
        generation.invalidate();
        assert!(!generation.is_current(ticket));
    }
}
