//! Random IPv4-shaped addresses.

use crate::generators::scalar::generate_natural;
use crate::source::UniformSource;
use std::net::Ipv4Addr;

/// Four independent `natural(0, 255)` octets.
pub fn generate_ip<S: UniformSource + ?Sized>(source: &mut S) -> Ipv4Addr {
    let mut octets = [0u8; 4];
    for octet in &mut octets {
        *octet = generate_natural(source, 0, 255) as u8;
    }
    Ipv4Addr::from(octets)
}
