use std::sync::Arc;
use crossbeam_channel::{bounded, unbounded, Receiver, Sender};
use log::{error, trace};
use crate::concepts::node::{Node, NodeRef};
use crate::concepts::packet::Packet;
use crate::framework::ForwardingSystem;

/// A terminal node which accepts packets into a FIFO queue.
///
/// Any number of switches may enqueue concurrently, packets come out in the order they were
/// enqueued. Draining the queue is up to the consumer. With a bounded buffer, forwarding blocks
/// while the queue is full.
pub struct QueueNode<T: ForwardingSystem> {
    address: T::Address,
    tx: Sender<Packet<T>>,
    rx: Receiver<Packet<T>>,
}

impl<T: ForwardingSystem> QueueNode<T> {
    /// creates a queue node with a buffer sized by [`ForwardingParams::queue_capacity`](crate::framework::ForwardingParams)
    pub fn new(address: T::Address) -> Self {
        let (tx, rx) = match T::config().queue_capacity {
            Some(capacity) => bounded(capacity),
            None => unbounded(),
        };
        Self::with_buffer(address, tx, rx)
    }

    /// creates a queue node over an existing channel, other holders of the receiver can consume
    /// packets too
    pub fn with_buffer(address: T::Address, tx: Sender<Packet<T>>, rx: Receiver<Packet<T>>) -> Self {
        Self { address, tx, rx }
    }

    pub fn into_ref(self) -> NodeRef<T> {
        Arc::new(self)
    }

    /// the queue of accepted packets
    pub fn queue(&self) -> &Receiver<Packet<T>> {
        &self.rx
    }

    /// takes every packet currently queued, without waiting
    pub fn drain(&self) -> Vec<Packet<T>> {
        self.rx.try_iter().collect()
    }
}

impl<T: ForwardingSystem> Node<T> for QueueNode<T> {
    fn address(&self) -> &T::Address {
        &self.address
    }

    fn handle_packet(&self, packet: Packet<T>, from: &dyn Node<T>) {
        trace!("{:?} queued packet from {:?}", self.address, from.address());
        if self.tx.send(packet).is_err() {
            // cannot happen while we hold the receiver ourselves
            error!("Queue of {:?} is disconnected, dropping packet", self.address);
        }
    }
}
