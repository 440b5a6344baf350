use std::fmt::Debug;

pub trait ForwardingSystem: 'static {
    /// Identity of a node on the forwarding network. Addresses are only ever compared through a
    /// distance metric, the default metric being strict equality.
    type Address: NodeAddress;
    /// Opaque data carried by packets, never inspected while forwarding
    type Payload: Send + 'static;
    fn config() -> ForwardingParams {
        Default::default()
    }
}

pub trait NodeAddress: Clone + Eq + Debug + Send + Sync + 'static {}
impl<T: Clone + Eq + Debug + Send + Sync + 'static> NodeAddress for T {}

/// Tunables shared by every node of a forwarding system
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ForwardingParams {
    /// maximum number of forwarding hops a traced packet may take before it is considered lost
    pub hop_limit: usize,
    /// capacity of queue node buffers, `None` for unbounded buffers.
    /// a bounded buffer blocks the forwarding switch while it is full
    pub queue_capacity: Option<usize>,
}
impl Default for ForwardingParams {
    fn default() -> Self {
        Self {
            hop_limit: 64,
            queue_capacity: None,
        }
    }
}
