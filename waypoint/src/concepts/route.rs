use educe::Educe;
use crate::concepts::node::NodeRef;
use crate::framework::ForwardingSystem;

/// A node reachable via this address. Several entries may point to the same node under different
/// addresses.
#[derive(Educe)]
#[educe(Clone(bound()), Debug(bound()))]
pub struct TableEntry<T: ForwardingSystem> {
    /// the address compared against packet destinations
    pub address: T::Address,
    /// where matching packets are forwarded to
    #[educe(Debug(method(fmt_next_hop)))]
    pub next_hop: NodeRef<T>,
}

impl<T: ForwardingSystem> TableEntry<T> {
    pub fn new(address: T::Address, next_hop: NodeRef<T>) -> Self {
        Self { address, next_hop }
    }
}

fn fmt_next_hop<T: ForwardingSystem>(node: &NodeRef<T>, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    std::fmt::Debug::fmt(node.address(), f)
}
