//! Reconstructed itinerary.

/// An ordered sequence of stops.
///
/// Consecutive stops correspond one-to-one with the tickets that were
/// consumed to build the itinerary, so a non-empty itinerary always has
/// one more stop than it has legs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Itinerary {
    stops: Vec<String>,
}

impl Itinerary {
    /// Create an itinerary from stops in travel order.
    pub fn new(stops: Vec<String>) -> Self {
        Self { stops }
    }

    /// An itinerary with no stops.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Stops in travel order.
    pub fn stops(&self) -> &[String] {
        &self.stops
    }

    pub fn into_stops(self) -> Vec<String> {
        self.stops
    }

    /// Number of stops (not legs).
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// First stop, if any.
    pub fn origin(&self) -> Option<&str> {
        self.stops.first().map(String::as_str)
    }

    /// Last stop, if any.
    pub fn destination(&self) -> Option<&str> {
        self.stops.last().map(String::as_str)
    }

    /// Iterate over the legs as `(from, to)` pairs.
    pub fn legs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.stops
            .windows(2)
            .map(|w| (w[0].as_str(), w[1].as_str()))
    }

    /// True if the itinerary returns to where it started.
    ///
    /// A single stop never counts as closed.
    pub fn is_closed(&self) -> bool {
        self.stops.len() >= 2 && self.origin() == self.destination()
    }
}

impl From<Vec<String>> for Itinerary {
    fn from(stops: Vec<String>) -> Self {
        Self::new(stops)
    }
}
