use crate::concepts::node::NodeRef;
use crate::concepts::packet::Packet;
use crate::concepts::route::TableEntry;
use crate::framework::ForwardingSystem;
use crate::metric::{exact, intrinsic, Distance, Metric};
use crate::util::is_unreachable;
use arc_swap::ArcSwap;
use log::trace;
use std::sync::Arc;

/// Sentinel distance for addresses that cannot reach each other. Metrics may return any negative
/// value to the same effect.
pub const UNREACHABLE: i64 = -1;

/// Decides where a packet goes. This captures the whole control plane: static tables, routing
/// protocols or URL style muxers are all routers.
///
/// Routing should be as close to a static table lookup as possible, prepare the decision data
/// ahead of time rather than blocking in `route`.
pub trait Router<T: ForwardingSystem>: Send + Sync {
    /// Picks the next hop for `packet`, or `None` if no route is suitable at all (the packet is
    /// dropped). `candidates` are the caller's live neighbours, a router is free to ignore them.
    fn route(&self, packet: &Packet<T>, candidates: &[NodeRef<T>]) -> Option<NodeRef<T>>;
}

impl<T: ForwardingSystem, R: Router<T> + ?Sized> Router<T> for Arc<R> {
    fn route(&self, packet: &Packet<T>, candidates: &[NodeRef<T>]) -> Option<NodeRef<T>> {
        (**self).route(packet, candidates)
    }
}

/// A router based on a distance criterion between entry addresses and packet destinations.
///
/// The entry with the smallest distance wins, ties go to the entry appended first. Entries with an
/// unreachable distance are never selected.
///
/// Entries are copy-on-write: appending swaps in a new entry list atomically, so a route lookup
/// running concurrently with an append scans either the old or the new list, never a torn one.
/// Concurrent appends do not lose entries, though their relative order is unspecified.
///
/// ```
/// use std::sync::Arc;
/// use waypoint::concepts::node::Node;
/// use waypoint::concepts::packet::Packet;
/// use waypoint::concepts::queue::QueueNode;
/// use waypoint::framework::ForwardingSystem;
/// use waypoint::metric::suffix_mismatch;
/// use waypoint::router::Table;
///
/// struct Names;
/// impl ForwardingSystem for Names {
///     type Address = String;
///     type Payload = &'static str;
/// }
///
/// let n1 = QueueNode::<Names>::new("aaa".to_string()).into_ref();
/// let n2 = QueueNode::<Names>::new("aba".to_string()).into_ref();
/// let n3 = QueueNode::<Names>::new("abc".to_string()).into_ref();
///
/// let table = Table::<Names>::with_distance(suffix_mismatch::<String>);
/// table.add_nodes([&n1, &n2]);
///
/// let p3 = Packet::new("abc".to_string(), "hello3");
/// // n2, because we don't have n3 and n2 is the closest
/// assert_eq!(table.lookup(&p3).unwrap().address(), "aba");
///
/// table.add_node(&n3);
/// assert_eq!(table.lookup(&p3).unwrap().address(), "abc");
/// ```
pub struct Table<T: ForwardingSystem> {
    entries: ArcSwap<Vec<TableEntry<T>>>,
    distance: Option<Box<dyn Metric<T::Address>>>,
}

impl<T: ForwardingSystem> Default for Table<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ForwardingSystem> Table<T> {
    /// a table without a metric, only exact address matches are routed
    pub fn new() -> Self {
        Self {
            entries: ArcSwap::from_pointee(Vec::new()),
            distance: None,
        }
    }

    pub fn with_distance(metric: impl Metric<T::Address> + 'static) -> Self {
        Self {
            entries: ArcSwap::from_pointee(Vec::new()),
            distance: Some(Box::new(metric)),
        }
    }

    /// a table measuring distance with the addresses' own [`Distance`]
    pub fn by_address_distance() -> Self
    where
        T::Address: Distance,
    {
        Self::with_distance(intrinsic::<T::Address>)
    }

    // region Maintenance

    /// appends an (address, next hop) entry
    pub fn add_entry(&self, address: T::Address, next_hop: NodeRef<T>) {
        let entry = TableEntry::new(address, next_hop);
        self.entries.rcu(|entries| {
            let mut next = Vec::clone(entries);
            next.push(entry.clone());
            next
        });
    }

    /// appends an entry for the node under its own address
    pub fn add_node(&self, node: &NodeRef<T>) {
        self.add_entry(node.address().clone(), node.clone());
    }

    /// appends one entry per node, under each node's own address, in iteration order
    pub fn add_nodes<'a>(&self, nodes: impl IntoIterator<Item = &'a NodeRef<T>>) {
        let batch: Vec<TableEntry<T>> = nodes
            .into_iter()
            .map(|node| TableEntry::new(node.address().clone(), node.clone()))
            .collect();
        self.entries.rcu(|entries| {
            let mut next = Vec::with_capacity(entries.len() + batch.len());
            next.extend(entries.iter().cloned());
            next.extend(batch.iter().cloned());
            next
        });
    }

    /// Points `address` at `next_hop`. The first entry with an equal address is replaced in place,
    /// keeping its position for tie-breaks, and any later duplicates of that address are removed.
    /// Appends a new entry if none matched.
    ///
    /// returns: whether an existing entry was replaced
    pub fn replace_entry(&self, address: T::Address, next_hop: NodeRef<T>) -> bool {
        let entry = TableEntry::new(address, next_hop);
        let previous = self.entries.rcu(|entries| {
            let mut next = Vec::with_capacity(entries.len() + 1);
            let mut replaced = false;
            for existing in entries.iter() {
                if existing.address != entry.address {
                    next.push(existing.clone());
                } else if !replaced {
                    next.push(entry.clone());
                    replaced = true;
                }
            }
            if !replaced {
                next.push(entry.clone());
            }
            next
        });
        previous.iter().any(|e| e.address == entry.address)
    }

    // endregion

    pub fn len(&self) -> usize {
        self.entries.load().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.load().is_empty()
    }

    /// a snapshot of the current entries, in insertion order
    pub fn entries(&self) -> Arc<Vec<TableEntry<T>>> {
        self.entries.load_full()
    }

    fn distance(&self, entry: &T::Address, dest: &T::Address) -> i64 {
        match &self.distance {
            Some(metric) => metric.distance(entry, dest),
            None => exact(entry, dest),
        }
    }

    /// Routes a packet considering every entry in the table. One pass over the entries, ranked by
    /// address distance only.
    pub fn lookup(&self, packet: &Packet<T>) -> Option<NodeRef<T>> {
        let entries = self.entries.load();
        if entries.is_empty() {
            return None;
        }

        let dest = packet.destination();
        let mut best: Option<(i64, &TableEntry<T>)> = None;

        for entry in entries.iter() {
            let dist = self.distance(&entry.address, dest);
            if is_unreachable(dist) {
                continue;
            }
            // strictly less, the first entry at a given distance keeps the route
            if best.map_or(true, |(best_dist, _)| dist < best_dist) {
                best = Some((dist, entry));
            }
        }

        match best {
            Some((dist, entry)) => {
                trace!("Routing {:?} via {:?} at distance {dist}", dest, entry.address);
                Some(entry.next_hop.clone())
            }
            None => {
                trace!("No route to {:?} among {} entries", dest, entries.len());
                None
            }
        }
    }
}

impl<T: ForwardingSystem> Router<T> for Table<T> {
    /// The entries decide on their own, `candidates` need not match them one to one.
    fn route(&self, packet: &Packet<T>, _candidates: &[NodeRef<T>]) -> Option<NodeRef<T>> {
        self.lookup(packet)
    }
}
