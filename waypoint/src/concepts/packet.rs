use educe::Educe;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use crate::framework::ForwardingSystem;

/// The unit moved through the network. Anything can be forwarded as long as it has a destination,
/// which is fixed for the lifetime of the packet.
#[derive(Educe)]
#[educe(Clone(bound(T::Payload: Clone)), Debug(bound(T::Payload: std::fmt::Debug)), PartialEq(bound(T::Payload: PartialEq)))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(bound(
    serialize = "T::Address: Serialize, T::Payload: Serialize",
    deserialize = "T::Address: Deserialize<'de>, T::Payload: Deserialize<'de>"
)))]
pub struct Packet<T: ForwardingSystem + ?Sized> {
    /// the address of the endpoint this packet is headed to
    destination: T::Address,
    payload: T::Payload,
}

impl<T: ForwardingSystem + ?Sized> Packet<T> {
    pub fn new(destination: T::Address, payload: T::Payload) -> Self {
        Self {
            destination,
            payload,
        }
    }

    pub fn destination(&self) -> &T::Address {
        &self.destination
    }

    pub fn payload(&self) -> &T::Payload {
        &self.payload
    }

    /// consumes the packet, this is what the final recipient does
    pub fn into_payload(self) -> T::Payload {
        self.payload
    }
}
