/// Tag carried by an in-flight request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Latest-request-wins bookkeeping for one screen instance.
///
/// Only the most recently issued ticket is current. `invalidate` retires
/// every outstanding ticket, which is how unmounting drops late responses.
#[derive(Debug, Default)]
pub struct RequestTickets {
    issued: u64,
    retired: bool,
}

impl RequestTickets {
    pub fn issue(&mut self) -> Ticket {
        self.issued += 1;
        Ticket(self.issued)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        !self.retired && ticket.0 == self.issued
    }

    pub fn invalidate(&mut self) {
        self.retired = true;
    }

    pub fn is_retired(&self) -> bool {
        self.retired
    }
}
