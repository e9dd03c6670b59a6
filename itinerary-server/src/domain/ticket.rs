//! Ticket type.

use std::fmt;

/// Error returned when a raw ticket does not have exactly two stops.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid ticket: expected [source, destination], got {len} element(s)")]
pub struct InvalidTicket {
    len: usize,
}

impl InvalidTicket {
    /// Number of elements the rejected ticket had.
    pub fn found(&self) -> usize {
        self.len
    }
}

/// A single directed ticket from `source` to `destination`.
///
/// Stop names are opaque and case-sensitive; no normalisation is applied.
///
/// # Examples
///
/// ```
/// use itinerary_server::domain::Ticket;
///
/// let ticket = Ticket::from_pair(vec!["JFK".into(), "LAX".into()]).unwrap();
/// assert_eq!(ticket.source, "JFK");
/// assert_eq!(ticket.destination, "LAX");
///
/// // Wrong arity is rejected
/// assert!(Ticket::from_pair(vec!["JFK".into()]).is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Ticket {
    pub source: String,
    pub destination: String,
}

impl Ticket {
    /// Create a ticket between two stops.
    pub fn new(source: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
        }
    }

    /// Build a ticket from a `[source, destination]` pair as it arrives on the wire.
    pub fn from_pair(pair: Vec<String>) -> Result<Self, InvalidTicket> {
        let len = pair.len();
        let mut it = pair.into_iter();
        match (it.next(), it.next(), it.next()) {
            (Some(source), Some(destination), None) => Ok(Self {
                source,
                destination,
            }),
            _ => Err(InvalidTicket { len }),
        }
    }
}

impl TryFrom<Vec<String>> for Ticket {
    type Error = InvalidTicket;

    fn try_from(pair: Vec<String>) -> Result<Self, Self::Error> {
        Self::from_pair(pair)
    }
}

impl fmt::Debug for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ticket({}->{})", self.source, self.destination)
    }
}

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source, self.destination)
    }
}
