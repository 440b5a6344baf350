use std::sync::{Arc, OnceLock};
use waypoint::concepts::node::NodeRef;
use waypoint::concepts::packet::Packet;
use waypoint::concepts::switch::Switch;
use waypoint::router::{Router, Table};
use crate::common::virtual_network::{NameSystem, VirtualNetwork};

/// one switch "sss" directly connected to four sinks
pub fn vnet_star() -> VirtualNetwork {
    let mut network = VirtualNetwork::default();
    for sink in ["abc", "abd", "add", "ddd"] {
        network.add_sink(sink);
    }
    network.add_switch("sss", &["abc", "abd", "add", "ddd"]);
    network
}

/// zzz -> aaz -> {aab, aac}
/// zzz -> bbb
pub fn vnet_two_tier() -> VirtualNetwork {
    let mut network = VirtualNetwork::default();
    network.add_sink("aab");
    network.add_sink("aac");
    network.add_sink("bbb");
    network.add_switch("aaz", &["aab", "aac"]);
    network.add_switch("zzz", &["aaz", "bbb"]);
    network
}

/// Routes everything to a node chosen after construction, ignoring the candidates
#[derive(Default)]
pub struct DeferredRouter {
    pub target: OnceLock<NodeRef<NameSystem>>,
}

impl Router<NameSystem> for DeferredRouter {
    fn route(&self, _packet: &Packet<NameSystem>, _candidates: &[NodeRef<NameSystem>]) -> Option<NodeRef<NameSystem>> {
        self.target.get().cloned()
    }
}

/// two switches "lla" and "llb" forwarding everything to each other, returns lla
pub fn switch_loop() -> NodeRef<NameSystem> {
    let deferred = Arc::new(DeferredRouter::default());
    let lla = Switch::new("lla".to_string(), deferred.clone(), Vec::new()).into_ref();

    let table = Table::<NameSystem>::new();
    table.add_entry("aaa".to_string(), lla.clone());
    let llb = Switch::new("llb".to_string(), table, vec![lla.clone()]).into_ref();

    let _ = deferred.target.set(llb);
    lla
}
