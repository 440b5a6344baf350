mod routing;
mod topology;

use std::env;
use std::fs;
use anyhow::Context;
use log::{info, warn};
use simplelog::*;
use waypoint::concepts::node::Node;
use waypoint::concepts::packet::Packet;
use waypoint::trace::trace;
use crate::topology::{build, Topology};

const DEFAULT_TOPOLOGY: &str = include_str!("../topology.json");

fn load_topology() -> anyhow::Result<Topology> {
    match env::args().nth(1) {
        Some(path) => {
            let file = fs::read_to_string(&path).with_context(|| format!("Failed to read topology {path}"))?;
            Ok(serde_json::from_str(&file)?)
        }
        None => {
            info!("No topology given, using the built-in one");
            Ok(serde_json::from_str(DEFAULT_TOPOLOGY)?)
        }
    }
}

fn main() -> anyhow::Result<()> {
    TermLogger::init(LevelFilter::Debug, Config::default(), TerminalMode::Mixed, ColorChoice::Auto)
        .context("Failed to init logger")?;

    info!("Starting Prefix Mesh Demo");

    let topology = load_topology()?;
    let network = build(&topology)?;

    for pkt in &topology.packets {
        let at = network.get(&pkt.at)?;
        let packet = Packet::new(pkt.to, pkt.body.clone());

        match trace(at.as_ref(), &packet) {
            Ok(path) => {
                let path: Vec<String> = path.iter().map(|hop| hop.to_string()).collect();
                info!("{} -> {}: {}", pkt.at, pkt.to, path.join(" -> "));
            }
            Err(err) => warn!("{} -> {}: {err}", pkt.at, pkt.to),
        }

        // we inject the packet ourselves, so we are the forwarder of record
        at.handle_packet(packet, at.as_ref());
    }

    for (name, host) in &network.hosts {
        for packet in host.drain() {
            info!("{name} ({}) received \"{}\"", host.address(), packet.payload());
        }
    }

    Ok(())
}
