#![cfg(feature = "serde")]

use std::net::Ipv4Addr;
use serde::{Deserialize, Serialize};
use waypoint::concepts::packet::Packet;
use waypoint::feedback::AddressError;
use waypoint::framework::ForwardingSystem;
use waypoint::metric::{Distance, Ipv4Prefix};

struct IpSystem;
impl ForwardingSystem for IpSystem {
    type Address = Ipv4Prefix;
    type Payload = Message;
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
struct Message {
    body: String,
}

#[test]
fn packet_freeze_restore() {
    let packet = Packet::<IpSystem>::new(
        Ipv4Prefix::host(Ipv4Addr::new(10, 1, 2, 3)),
        Message { body: "hello".to_string() },
    );
    let frozen = serde_json::to_string(&packet).unwrap();
    assert_eq!(frozen, r#"{"destination":"10.1.2.3/32","payload":{"body":"hello"}}"#);

    let restored: Packet<IpSystem> = serde_json::from_str(&frozen).unwrap();
    assert_eq!(restored, packet);
}

#[test]
fn prefixes_are_validated() {
    let prefix: Ipv4Prefix = serde_json::from_str(r#""10.1.2.3/8""#).unwrap();
    // host bits are cleared
    assert_eq!(prefix.network(), Ipv4Addr::new(10, 0, 0, 0));
    assert_eq!(prefix.to_string(), "10.0.0.0/8");

    assert!(serde_json::from_str::<Ipv4Prefix>(r#""10.0.0.0/33""#).is_err());
    assert_eq!("10.0.0.0/33".parse::<Ipv4Prefix>(), Err(AddressError::PrefixLength(33)));
    assert!(matches!("ten/8".parse::<Ipv4Prefix>(), Err(AddressError::Notation(_))));
}

#[test]
fn prefix_distance() {
    let wide: Ipv4Prefix = "10.0.0.0/8".parse().unwrap();
    let narrow: Ipv4Prefix = "10.1.0.0/16".parse().unwrap();
    let host = Ipv4Prefix::host(Ipv4Addr::new(10, 1, 0, 9));

    assert_eq!(wide.distance(&host), 24);
    assert_eq!(narrow.distance(&host), 16);
    assert_eq!(host.distance(&host), 0);
    // a narrower route does not cover a wider destination
    assert!(narrow.distance(&wide) < 0);
}
