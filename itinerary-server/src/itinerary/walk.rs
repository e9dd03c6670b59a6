//! Iterative Hierholzer walk.

use super::graph::Graph;

/// Walk every edge reachable from `start` exactly once.
///
/// Uses an explicit stack rather than recursion, so itinerary length is
/// bounded by memory rather than call depth. Stops are emitted as they run
/// out of edges, which is the reverse of travel order; the result is
/// reversed before returning.
pub(crate) fn walk<'a>(start: &'a str, graph: &mut Graph<'a>) -> Vec<&'a str> {
    let mut stack = vec![start];
    let mut path = Vec::with_capacity(graph.remaining_edges() + 1);

    while let Some(&current) = stack.last() {
        match graph.take_next(current) {
            Some(next) => stack.push(next),
            None => {
                path.push(current);
                stack.pop();
            }
        }
    }

    path.reverse();
    path
}
