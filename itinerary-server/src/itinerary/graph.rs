//! Ticket graph construction.
//!
//! Node names are borrowed from the input tickets; the graph lives only for
//! the duration of one reconstruction.

use std::collections::HashMap;

use crate::domain::Ticket;

/// Remaining outgoing edges per stop.
///
/// Each adjacency list is kept in descending order so that popping from the
/// tail always yields the lexicographically smallest remaining destination.
#[derive(Debug, Default)]
pub(crate) struct Graph<'a> {
    adjacency: HashMap<&'a str, Vec<&'a str>>,
}

impl<'a> Graph<'a> {
    /// Consume and return the next outgoing edge from `stop`, if any remain.
    pub(crate) fn take_next(&mut self, stop: &str) -> Option<&'a str> {
        self.adjacency.get_mut(stop)?.pop()
    }

    /// Number of edges not yet consumed.
    pub(crate) fn remaining_edges(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    #[cfg(test)]
    pub(crate) fn destinations(&self, stop: &str) -> &[&'a str] {
        self.adjacency.get(stop).map(Vec::as_slice).unwrap_or_default()
    }
}

/// Out-degree and in-degree per stop, fixed at build time.
#[derive(Debug, Default)]
pub(crate) struct Degrees<'a> {
    outgoing: HashMap<&'a str, usize>,
    incoming: HashMap<&'a str, usize>,
}

impl<'a> Degrees<'a> {
    pub(crate) fn out_degree(&self, stop: &str) -> usize {
        self.outgoing.get(stop).copied().unwrap_or(0)
    }

    pub(crate) fn in_degree(&self, stop: &str) -> usize {
        self.incoming.get(stop).copied().unwrap_or(0)
    }

    /// Stops that are the source of at least one ticket.
    pub(crate) fn sources(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.outgoing.keys().copied()
    }

    /// Stops that are the destination of at least one ticket.
    pub(crate) fn sinks(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.incoming.keys().copied()
    }

    /// `out - in` for a stop.
    pub(crate) fn surplus(&self, stop: &str) -> isize {
        self.out_degree(stop) as isize - self.in_degree(stop) as isize
    }
}

/// Build the adjacency lists and degree tables for a ticket list.
pub(crate) fn build_graph(tickets: &[Ticket]) -> (Graph<'_>, Degrees<'_>) {
    let mut graph = Graph::default();
    let mut degrees = Degrees::default();

    for ticket in tickets {
        let (src, dst) = (ticket.source.as_str(), ticket.destination.as_str());
        graph.adjacency.entry(src).or_default().push(dst);
        *degrees.outgoing.entry(src).or_insert(0) += 1;
        *degrees.incoming.entry(dst).or_insert(0) += 1;
    }

    // Descending, so the walker pops the smallest destination from the tail.
    for destinations in graph.adjacency.values_mut() {
        destinations.sort_unstable_by(|a, b| b.cmp(a));
    }

    (graph, degrees)
}
