use std::sync::Arc;
use crate::concepts::packet::Packet;
use crate::framework::ForwardingSystem;
use crate::router::Router;

/// Nodes are shared by reference between switches and tables, never copied
pub type NodeRef<T> = Arc<dyn Node<T>>;

/// An endpoint of the network
pub trait Node<T: ForwardingSystem>: Send + Sync {
    fn address(&self) -> &T::Address;

    /// Receives a packet forwarded by `from`, which is either the originator or the switch one hop
    /// before this node.
    ///
    /// This is called synchronously by the forwarding switch, it should return promptly instead of
    /// blocking on I/O.
    fn handle_packet(&self, packet: Packet<T>, from: &dyn Node<T>);

    /// exposes the switching capability of this node, if it forwards packets
    fn as_switch(&self) -> Option<&dyn SwitchNode<T>> {
        None
    }
}

/// A node which forwards every packet it receives out to one of its neighbours, according to its
/// router.
pub trait SwitchNode<T: ForwardingSystem>: Node<T> {
    /// the router that decides where packets go
    fn router(&self) -> &dyn Router<T>;

    /// the candidates a packet may be forwarded to
    fn neighbours(&self) -> &[NodeRef<T>];

    /// asks the router for the next hop of a packet without forwarding it
    fn next_hop(&self, packet: &Packet<T>) -> Option<NodeRef<T>> {
        self.router().route(packet, self.neighbours())
    }
}

/// Identity comparison, two handles refer to the same node instance
pub fn same_node<T: ForwardingSystem>(a: &dyn Node<T>, b: &dyn Node<T>) -> bool {
    std::ptr::eq(a as *const _ as *const (), b as *const _ as *const ())
}
