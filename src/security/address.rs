//! Public-address classification.
//!
//! Pure range checks deciding whether a single IP is routable on the public
//! Internet. Anything private, loopback, link-local, or otherwise reserved is
//! non-public and must never be contacted by the resolver. Callers are
//! responsible for parsing; these functions take an already-parsed address.

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// Returns `true` if `ip` is routable on the public Internet.
pub fn is_public_ip(ip: IpAddr) -> bool {
    match ip {
        IpAddr::V4(v4) => is_public_ipv4(v4),
        IpAddr::V6(v6) => is_public_ipv6(v6),
    }
}

/// Returns `true` if an IPv4 address is publicly routable.
pub fn is_public_ipv4(ip: Ipv4Addr) -> bool {
    let o = ip.octets();
    // Loopback 127.0.0.0/8
    if o[0] == 127 {
        return false;
    }
    // Private 10.0.0.0/8
    if o[0] == 10 {
        return false;
    }
    // Private 172.16.0.0/12
    if o[0] == 172 && (16..=31).contains(&o[1]) {
        return false;
    }
    // Private 192.168.0.0/16
    if o[0] == 192 && o[1] == 168 {
        return false;
    }
    // Link-local 169.254.0.0/16
    if o[0] == 169 && o[1] == 254 {
        return false;
    }
    // Shared address space (CGNAT) 100.64.0.0/10
    if o[0] == 100 && (64..=127).contains(&o[1]) {
        return false;
    }
    // This-network 0.0.0.0/8
    if o[0] == 0 {
        return false;
    }
    // IETF protocol assignments 192.0.0.0/24
    if o[0] == 192 && o[1] == 0 && o[2] == 0 {
        return false;
    }
    // Documentation 192.0.2.0/24, 198.51.100.0/24, 203.0.113.0/24
    if (o[0] == 192 && o[1] == 0 && o[2] == 2)
        || (o[0] == 198 && o[1] == 51 && o[2] == 100)
        || (o[0] == 203 && o[1] == 0 && o[2] == 113)
    {
        return false;
    }
    // Benchmarking 198.18.0.0/15
    if o[0] == 198 && (o[1] == 18 || o[1] == 19) {
        return false;
    }
    // Multicast 224.0.0.0/4
    if (224..=239).contains(&o[0]) {
        return false;
    }
    // Reserved 240.0.0.0/4 (includes 255.255.255.255 broadcast)
    if o[0] >= 240 {
        return false;
    }
    true
}

/// Returns `true` if an IPv6 address is publicly routable.
///
/// IPv4-mapped addresses (`::ffff:a.b.c.d`) classify by their embedded IPv4
/// address, so `::ffff:127.0.0.1` is as non-public as `127.0.0.1`.
pub fn is_public_ipv6(ip: Ipv6Addr) -> bool {
    if let Some(v4) = ip.to_ipv4_mapped() {
        return is_public_ipv4(v4);
    }
    let s = ip.segments();
    // ::1 loopback
    if s == [0, 0, 0, 0, 0, 0, 0, 1] {
        return false;
    }
    // :: unspecified
    if s == [0; 8] {
        return false;
    }
    // Deprecated IPv4-compatible ::a.b.c.d (everything else in ::/96)
    if s[..6] == [0, 0, 0, 0, 0, 0] {
        return false;
    }
    // fc00::/7 unique-local
    if (s[0] & 0xfe00) == 0xfc00 {
        return false;
    }
    // fe80::/10 link-local
    if (s[0] & 0xffc0) == 0xfe80 {
        return false;
    }
    // ff00::/8 multicast
    if s[0] & 0xff00 == 0xff00 {
        return false;
    }
    // 2001:db8::/32 documentation
    if s[0] == 0x2001 && s[1] == 0xdb8 {
        return false;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_ipv4() {
        assert!(is_public_ipv4(Ipv4Addr::new(8, 8, 8, 8)));
        assert!(is_public_ipv4(Ipv4Addr::new(1, 1, 1, 1)));
        assert!(is_public_ipv4(Ipv4Addr::new(93, 184, 216, 34)));
        // Adjacent to blocked ranges but public
        assert!(is_public_ipv4(Ipv4Addr::new(172, 15, 0, 1)));
        assert!(is_public_ipv4(Ipv4Addr::new(172, 32, 0, 1)));
        assert!(is_public_ipv4(Ipv4Addr::new(100, 63, 0, 1)));
        assert!(is_public_ipv4(Ipv4Addr::new(198, 17, 0, 1)));
    }

    #[test]
    fn test_private_ipv4() {
        assert!(!is_public_ipv4(Ipv4Addr::new(127, 0, 0, 1)));
        assert!(!is_public_ipv4(Ipv4Addr::new(10, 0, 0, 5)));
        assert!(!is_public_ipv4(Ipv4Addr::new(172, 16, 0, 1)));
        assert!(!is_public_ipv4(Ipv4Addr::new(172, 31, 255, 255)));
        assert!(!is_public_ipv4(Ipv4Addr::new(192, 168, 1, 2)));
        assert!(!is_public_ipv4(Ipv4Addr::new(169, 254, 1, 1)));
        assert!(!is_public_ipv4(Ipv4Addr::new(100, 64, 0, 1)));
        assert!(!is_public_ipv4(Ipv4Addr::new(0, 0, 0, 0)));
        assert!(!is_public_ipv4(Ipv4Addr::new(192, 0, 2, 1)));
        assert!(!is_public_ipv4(Ipv4Addr::new(198, 18, 0, 1)));
        assert!(!is_public_ipv4(Ipv4Addr::new(224, 0, 0, 1)));
        assert!(!is_public_ipv4(Ipv4Addr::new(255, 255, 255, 255)));
    }

    #[test]
    fn test_public_ipv6() {
        assert!(is_public_ipv6(Ipv6Addr::new(
            0x2001, 0x4860, 0x4860, 0, 0, 0, 0, 0x8888
        )));
        assert!(is_public_ipv6(Ipv6Addr::new(
            0x2607, 0xf8b0, 0x4004, 0x800, 0, 0, 0, 0x200e
        )));
    }

    #[test]
    fn test_private_ipv6() {
        assert!(!is_public_ipv6(Ipv6Addr::new(0, 0, 0, 0, 0, 0, 0, 1)));
        assert!(!is_public_ipv6(Ipv6Addr::new(0xfc00, 0, 0, 0, 0, 0, 0, 1)));
        assert!(!is_public_ipv6(Ipv6Addr::new(0xfe80, 0, 0, 0, 0, 0, 0, 1)));
        assert!(!is_public_ipv6(Ipv6Addr::new(0xff00, 0, 0, 0, 0, 0, 0, 1)));
        assert!(!is_public_ipv6(Ipv6Addr::new(0, 0, 0, 0, 0, 0, 0, 0)));
        assert!(!is_public_ipv6(Ipv6Addr::new(0x2001, 0xdb8, 0, 0, 0, 0, 0, 1)));
    }

    #[test]
    fn test_ipv4_mapped_ipv6_classifies_by_embedded_address() {
        // ::ffff:127.0.0.1 must not slip through as "IPv6"
        let mapped_loopback = Ipv4Addr::new(127, 0, 0, 1).to_ipv6_mapped();
        assert!(!is_public_ipv6(mapped_loopback));
        let mapped_private = Ipv4Addr::new(192, 168, 1, 2).to_ipv6_mapped();
        assert!(!is_public_ipv6(mapped_private));
        let mapped_public = Ipv4Addr::new(8, 8, 8, 8).to_ipv6_mapped();
        assert!(is_public_ipv6(mapped_public));
    }
}
