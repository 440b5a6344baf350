use std::sync::Arc;
use log::debug;
use crate::concepts::node::{Node, NodeRef, SwitchNode};
use crate::concepts::packet::Packet;
use crate::framework::ForwardingSystem;
use crate::router::{Router, Table};

/// The basic forwarding device. It listens on all of its links and forwards every packet it
/// receives out to the neighbour picked by its router, or drops it silently.
///
/// There is no loop detection: a router that sends packets back towards this switch will make them
/// circulate forever. Use [`trace_route`](crate::trace::trace_route) to validate a topology.
pub struct Switch<T: ForwardingSystem, R: Router<T> = Table<T>> {
    address: T::Address,
    router: R,
    /// fixed at construction, membership changes are up to the router
    neighbours: Vec<NodeRef<T>>,
}

impl<T: ForwardingSystem, R: Router<T>> Switch<T, R> {
    pub fn new(address: T::Address, router: R, neighbours: Vec<NodeRef<T>>) -> Self {
        Self {
            address,
            router,
            neighbours,
        }
    }

    pub fn into_ref(self) -> NodeRef<T>
    where
        R: 'static,
    {
        Arc::new(self)
    }
}

impl<T: ForwardingSystem, R: Router<T>> Node<T> for Switch<T, R> {
    fn address(&self) -> &T::Address {
        &self.address
    }

    fn handle_packet(&self, packet: Packet<T>, _from: &dyn Node<T>) {
        match self.next_hop(&packet) {
            // we are the forwarder of record, not whoever sent it to us
            Some(next) => next.handle_packet(packet, self),
            None => {
                debug!("Dropped packet for {:?} at {:?}, no route", packet.destination(), self.address);
            }
        }
    }

    fn as_switch(&self) -> Option<&dyn SwitchNode<T>> {
        Some(self)
    }
}

impl<T: ForwardingSystem, R: Router<T>> SwitchNode<T> for Switch<T, R> {
    fn router(&self) -> &dyn Router<T> {
        &self.router
    }

    fn neighbours(&self) -> &[NodeRef<T>] {
        &self.neighbours
    }
}
