//! Sequencing guard for overlapping image search requests.
//!
//! The page fires image searches without cancellation: a second request
//! can be issued while an earlier one is still in flight, and both will
//! complete. Each request issued here carries a ticket, and a completion
//! is applied only while its ticket is still the newest issued, so a slow
//! stale response can never overwrite a newer one.

/// Ticket identifying one issued request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestTicket(u64);

#[derive(Debug)]
pub struct ImageSearchSession<T> {
    latest: u64,
    results: Option<Vec<T>>,
}

impl<T> ImageSearchSession<T> {
    pub fn new() -> Self {
        Self {
            latest: 0,
            results: None,
        }
    }

    /// Issues a ticket for a new request, superseding all earlier ones.
    pub fn begin(&mut self) -> RequestTicket {
        self.latest += 1;
        RequestTicket(self.latest)
    }

    /// Applies results if the ticket is still the newest. Returns whether
    /// the results were accepted.
    pub fn complete(&mut self, ticket: RequestTicket, results: Vec<T>) -> bool {
        if ticket.0 != self.latest {
            return false;
        }
        self.results = Some(results);
        true
    }

    /// The most recently accepted results, if any request has completed.
    pub fn results(&self) -> Option<&[T]> {
        self.results.as_deref()
    }
}

impl<T> Default for ImageSearchSession<T> {
    fn default() -> Self {
        Self::new()
    }
}
