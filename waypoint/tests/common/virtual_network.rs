use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};
use waypoint::concepts::node::{Node, NodeRef};
use waypoint::concepts::packet::Packet;
use waypoint::concepts::switch::Switch;
use waypoint::framework::ForwardingSystem;
use waypoint::metric::suffix_mismatch;
use waypoint::router::Table;

/// string addressed network, payloads are strings too
pub struct NameSystem;

impl ForwardingSystem for NameSystem {
    type Address = String;
    type Payload = String;
}

pub fn packet(dest: &str, payload: &str) -> Packet<NameSystem> {
    Packet::new(dest.to_string(), payload.to_string())
}

/// A sink which records every packet it receives along with who forwarded it
pub struct MockNode {
    pub addr: String,
    pub received: Mutex<Vec<(Packet<NameSystem>, String)>>,
}

impl MockNode {
    pub fn new(addr: &str) -> Arc<MockNode> {
        Arc::new(MockNode {
            addr: addr.to_string(),
            received: Mutex::new(Vec::new()),
        })
    }

    pub fn payloads(&self) -> Vec<String> {
        self.received.lock().unwrap().iter().map(|(p, _)| p.payload().clone()).collect()
    }

    pub fn forwarders(&self) -> Vec<String> {
        self.received.lock().unwrap().iter().map(|(_, f)| f.clone()).collect()
    }

    pub fn count(&self) -> usize {
        self.received.lock().unwrap().len()
    }
}

impl Node<NameSystem> for MockNode {
    fn address(&self) -> &String {
        &self.addr
    }

    fn handle_packet(&self, packet: Packet<NameSystem>, from: &dyn Node<NameSystem>) {
        self.received.lock().unwrap().push((packet, from.address().clone()));
    }
}

pub fn node_ref(node: &Arc<MockNode>) -> NodeRef<NameSystem> {
    node.clone()
}

/// A collection of named sinks and switches wired together by tables
#[derive(Default)]
pub struct VirtualNetwork {
    pub sinks: BTreeMap<String, Arc<MockNode>>,
    pub switches: BTreeMap<String, NodeRef<NameSystem>>,
}

impl VirtualNetwork {
    pub fn add_sink(&mut self, addr: &str) -> NodeRef<NameSystem> {
        let node = MockNode::new(addr);
        self.sinks.insert(addr.to_string(), node.clone());
        node
    }

    /// adds a switch whose table holds one entry per neighbour, under the neighbour's address
    pub fn add_switch(&mut self, addr: &str, neighbours: &[&str]) -> NodeRef<NameSystem> {
        let neighbours: Vec<NodeRef<NameSystem>> = neighbours.iter().map(|n| self.get(n)).collect();
        let table = Table::<NameSystem>::with_distance(suffix_mismatch::<String>);
        table.add_nodes(&neighbours);
        let switch = Switch::new(addr.to_string(), table, neighbours).into_ref();
        self.switches.insert(addr.to_string(), switch.clone());
        switch
    }

    pub fn get(&self, addr: &str) -> NodeRef<NameSystem> {
        if let Some(sink) = self.sinks.get(addr) {
            return sink.clone();
        }
        self.switches.get(addr).unwrap_or_else(|| panic!("No node {addr} found")).clone()
    }

    pub fn sink(&self, addr: &str) -> &MockNode {
        self.sinks.get(addr).unwrap_or_else(|| panic!("No sink {addr} found"))
    }

    /// injects a packet at `at`, as if sent by `from`
    pub fn send(&self, at: &str, from: &str, dest: &str, payload: &str) {
        let from = self.get(from);
        self.get(at).handle_packet(packet(dest, payload), from.as_ref());
    }

    pub fn total_received(&self) -> usize {
        self.sinks.values().map(|s| s.count()).sum()
    }
}
