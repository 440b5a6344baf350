use std::collections::HashMap;
use std::sync::Arc;
use anyhow::{anyhow, bail};
use log::debug;
use serde::{Deserialize, Serialize};
use waypoint::concepts::node::{same_node, NodeRef};
use waypoint::concepts::queue::QueueNode;
use waypoint::concepts::switch::Switch;
use waypoint::metric::Ipv4Prefix;
use waypoint::router::Table;
use crate::routing::IPV4System;

#[derive(Serialize, Deserialize)]
pub struct Topology {
    pub hosts: Vec<HostConfig>,
    /// switches are built in order, a switch may only route via nodes declared before it
    pub switches: Vec<SwitchConfig>,
    #[serde(default)]
    pub packets: Vec<PacketConfig>,
}

#[derive(Serialize, Deserialize)]
pub struct HostConfig {
    pub name: String,
    pub address: Ipv4Prefix,
}

#[derive(Serialize, Deserialize)]
pub struct SwitchConfig {
    pub name: String,
    pub address: Ipv4Prefix,
    pub routes: Vec<RouteConfig>,
}

#[derive(Serialize, Deserialize)]
pub struct RouteConfig {
    pub prefix: Ipv4Prefix,
    pub via: String,
}

#[derive(Serialize, Deserialize)]
pub struct PacketConfig {
    /// name of the node the packet is injected at
    pub at: String,
    pub to: Ipv4Prefix,
    pub body: String,
}

pub struct Network {
    pub hosts: Vec<(String, Arc<QueueNode<IPV4System>>)>,
    pub nodes: HashMap<String, NodeRef<IPV4System>>,
}

impl Network {
    pub fn get(&self, name: &str) -> anyhow::Result<&NodeRef<IPV4System>> {
        self.nodes.get(name).ok_or_else(|| anyhow!("Unknown node {name}"))
    }
}

pub fn build(topology: &Topology) -> anyhow::Result<Network> {
    let mut network = Network {
        hosts: Vec::new(),
        nodes: HashMap::new(),
    };

    for host in &topology.hosts {
        let node = Arc::new(QueueNode::new(host.address));
        network.hosts.push((host.name.clone(), node.clone()));
        if network.nodes.insert(host.name.clone(), node).is_some() {
            bail!("Duplicate node name {}", host.name);
        }
    }

    for switch in &topology.switches {
        let table = Table::<IPV4System>::by_address_distance();
        let mut neighbours: Vec<NodeRef<IPV4System>> = Vec::new();
        for route in &switch.routes {
            let via = network
                .get(&route.via)
                .map_err(|_| anyhow!("Switch {} routes via {}, which is not declared before it", switch.name, route.via))?
                .clone();
            if !neighbours.iter().any(|n| same_node(n.as_ref(), via.as_ref())) {
                neighbours.push(via.clone());
            }
            table.add_entry(route.prefix, via);
        }
        debug!("Built switch {} with {} routes", switch.name, table.len());

        let node = Switch::new(switch.address, table, neighbours).into_ref();
        if network.nodes.insert(switch.name.clone(), node).is_some() {
            bail!("Duplicate node name {}", switch.name);
        }
    }

    Ok(network)
}
