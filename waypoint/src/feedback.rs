use educe::Educe;
use thiserror::Error;
use crate::framework::ForwardingSystem;

/// Raised while tracing the path of a packet. Normal forwarding never raises these, a packet
/// without a route is simply dropped.
#[derive(Error)]
#[derive(Educe)]
#[educe(Debug(bound()), Clone(bound()), PartialEq(bound()))]
pub enum ForwardError<T: ForwardingSystem + ?Sized> {
    /// The router of the switch at `at` did not select any next hop
    #[error("No route for packet at {at:?}, it would be dropped.")]
    NoRoute {
        at: T::Address
    },
    /// The packet was still being forwarded after `limit` hops
    #[error("Packet exceeded the hop limit of {limit}.")]
    HopLimitExceeded {
        limit: usize
    },
    /// The packet came back to a node it already visited, it would be forwarded forever
    #[error("Forwarding loop detected, packet revisited {at:?}.")]
    Loop {
        at: T::Address
    }
}

/// Rejected address construction
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressError {
    #[error("Prefix length {0} is longer than 32 bits.")]
    PrefixLength(u8),
    #[error("Invalid prefix notation {0:?}, expected <ipv4>/<len>.")]
    Notation(String),
}
