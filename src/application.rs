use tracing::{debug, error, info};

use api_client::{error::Result as ApiResult, Book, BlockingApiClient};

/// Anything that can answer an ISBN lookup. The terminal UI only talks to
/// this, never to a concrete client.
pub trait BookSource: Send + Sync {
    fn find_by_isbn(&self, isbn: &str) -> ApiResult<Option<Book>>;
}

impl BookSource for BlockingApiClient {
    fn find_by_isbn(&self, isbn: &str) -> ApiResult<Option<Book>> {
        self.lookup_isbn(isbn)
    }
}

/// Proof that a request was issued for a particular query. Completions are
/// matched against the most recent ticket.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestTicket {
    sequence: u64,
    query: String,
}

impl RequestTicket {
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    pub fn query(&self) -> &str {
        &self.query
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LookupState {
    #[default]
    Idle,
    Fetching {
        query: String,
    },
    Resolved(Book),
    Empty,
    Errored(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Completion {
    Applied,
    Stale,
}

/// Owns the lookup screen's state: the last observed query text and
/// whatever the newest request produced.
#[derive(Debug, Default)]
pub struct LookupController {
    last_query: Option<String>,
    latest_sequence: u64,
    state: LookupState,
}

impl LookupController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &LookupState {
        &self.state
    }

    pub fn book(&self) -> Option<&Book> {
        match &self.state {
            LookupState::Resolved(book) => Some(book),
            _ => None,
        }
    }

    /// Observe a new value of the search text. Returns a ticket when a
    /// request has to be issued for it.
    pub fn query_changed(&mut self, text: &str) -> Option<RequestTicket> {
        if self.last_query.as_deref() == Some(text) {
            return None;
        }
        self.last_query = Some(text.to_owned());

        // Bumping the sequence also orphans whatever is still in flight.
        self.latest_sequence += 1;

        if text.trim().is_empty() {
            self.state = LookupState::Idle;
            return None;
        }

        let ticket = RequestTicket {
            sequence: self.latest_sequence,
            query: text.to_owned(),
        };
        debug!(sequence = ticket.sequence, query = %ticket.query, "issuing lookup");
        self.state = LookupState::Fetching {
            query: ticket.query.clone(),
        };

        Some(ticket)
    }

    pub fn complete(
        &mut self,
        ticket: &RequestTicket,
        outcome: ApiResult<Option<Book>>,
    ) -> Completion {
        if ticket.sequence != self.latest_sequence {
            debug!(
                sequence = ticket.sequence,
                latest = self.latest_sequence,
                query = %ticket.query,
                "discarding stale lookup"
            );
            return Completion::Stale;
        }

        self.state = match outcome {
            Ok(Some(book)) => {
                info!(query = %ticket.query, %book, "book found");
                LookupState::Resolved(book)
            }
            Ok(None) => {
                info!(query = %ticket.query, "no book found");
                LookupState::Empty
            }
            Err(failure) => {
                error!(
                    query = %ticket.query,
                    %failure,
                    "Encountered an error attempting to fetch book from google books api"
                );
                LookupState::Errored(failure.to_string())
            }
        };

        Completion::Applied
    }
}

/// Run the lookup a ticket stands for. Blocking; call it off the UI thread.
pub fn resolve<S>(source: &S, ticket: &RequestTicket) -> ApiResult<Option<Book>>
where
    S: BookSource + ?Sized,
{
    source.find_by_isbn(ticket.query())
}
