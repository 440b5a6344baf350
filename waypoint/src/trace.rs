use crate::concepts::node::{same_node, Node, NodeRef};
use crate::concepts::packet::Packet;
use crate::feedback::ForwardError;
use crate::framework::ForwardingSystem;

/// Follows the forwarding decisions for `packet` starting at `start`, without delivering it.
///
/// Returns the addresses of every node the packet would be handed to, in order, ending with the
/// first node that does not forward (a sink). An empty path means `start` itself is a sink.
///
/// Forwarding itself has no loop detection, this is meant for validating a topology before traffic
/// flows through it.
pub fn trace_route<T: ForwardingSystem>(
    start: &dyn Node<T>,
    packet: &Packet<T>,
    limit: usize,
) -> Result<Vec<T::Address>, ForwardError<T>> {
    let mut hops = Vec::new();
    let mut visited: Vec<NodeRef<T>> = Vec::new();
    let mut current: Option<NodeRef<T>> = None;

    loop {
        let node: &dyn Node<T> = match &current {
            Some(node) => node.as_ref(),
            None => start,
        };
        let Some(switch) = node.as_switch() else {
            return Ok(hops);
        };
        if hops.len() >= limit {
            return Err(ForwardError::HopLimitExceeded { limit });
        }
        let next = switch.next_hop(packet).ok_or_else(|| ForwardError::NoRoute {
            at: node.address().clone(),
        })?;

        if same_node(next.as_ref(), start) || visited.iter().any(|v| same_node(v.as_ref(), next.as_ref())) {
            return Err(ForwardError::Loop {
                at: next.address().clone(),
            });
        }

        hops.push(next.address().clone());
        visited.push(next.clone());
        current = Some(next);
    }
}

/// [`trace_route`] bounded by the system's configured hop limit
pub fn trace<T: ForwardingSystem>(start: &dyn Node<T>, packet: &Packet<T>) -> Result<Vec<T::Address>, ForwardError<T>> {
    trace_route(start, packet, T::config().hop_limit)
}
