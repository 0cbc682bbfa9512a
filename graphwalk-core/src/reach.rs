//! Two-airport reachability.

use std::ops::ControlFlow;

use tracing::debug;

use crate::common::GraphTraversal;
use crate::flights::{Airport, FlightNetwork};

/// Whether `destination` can be reached from `start` by zero or more flights.
///
/// Either airport absent: `false`, even if both are absent. Equal airports:
/// `true` without traversal. Otherwise a depth-first search that stops as soon
/// as the destination is visited.
pub fn can_reach(
    network: &FlightNetwork,
    start: Option<&Airport>,
    destination: Option<&Airport>,
) -> bool {
    let (Some(start), Some(destination)) = (start, destination) else {
        return false;
    };
    if start == destination {
        return true;
    }

    let found = network
        .walk_preorder(start.clone(), |airport| {
            if airport == destination {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        })
        .is_break();

    debug!(from = %start, to = %destination, found, "can_reach");
    found
}
