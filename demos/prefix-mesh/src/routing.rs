use waypoint::framework::ForwardingSystem;
use waypoint::metric::Ipv4Prefix;

pub struct IPV4System {}
impl ForwardingSystem for IPV4System {
    type Address = Ipv4Prefix;
    type Payload = String;
}
