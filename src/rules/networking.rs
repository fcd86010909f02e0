//! Networking misconception rules: TCP/UDP semantics, address widths,
//! private addressing, and OSI layer assignments.

use super::{Rule, Topic};

pub fn rules() -> Vec<Rule> {
    vec![
        Rule::new(
            "tcp-connectionless",
            Topic::Networking,
            "TCP described as connectionless",
            "TCP is connection-oriented; a connection is established before data transfer",
            r"\btcp\b[^.;]*\bconnectionless\b",
            &["not connectionless"],
        ),
        Rule::new(
            "udp-connection-oriented",
            Topic::Networking,
            "UDP described as connection-oriented",
            "UDP is connectionless; no connection is established",
            r"\budp\b[^.;]*\bconnection[\s-]oriented\b",
            &[r"not connection[\s-]oriented"],
        ),
        Rule::new(
            "udp-guaranteed-delivery",
            Topic::Networking,
            "UDP described as guaranteeing delivery",
            "UDP is best-effort and does not guarantee delivery",
            r"\budp\b[^.;]*\b(?:provides|guarantees|offers)\s+(?:guaranteed|reliable)\s+delivery",
            &[],
        ),
        Rule::new(
            "ipv4-address-width",
            Topic::Networking,
            "IPv4 given a 64- or 128-bit address width",
            "IPv4 addresses are 32 bits",
            r"\bipv4\b[^.;]*\b(?:128|64)[\s-]?bit",
            &["ipv6"],
        ),
        Rule::new(
            "ipv6-address-width",
            Topic::Networking,
            "IPv6 given a 32-bit address width",
            "IPv6 addresses are 128 bits",
            r"\bipv6\b[^.;]*\b32[\s-]?bit",
            &["ipv4"],
        ),
        Rule::new(
            "rfc1918-link-local",
            Topic::Networking,
            "169.254.0.0/16 attributed to RFC 1918",
            "169.254.0.0/16 is link-local (APIPA); RFC 1918 covers 10/8, 172.16/12, and 192.168/16",
            r"rfc\s?1918[^.;]*169\.254",
            &[r"not rfc\s?1918", r"link[\s-]local"],
        ),
        Rule::new(
            "http-transport-layer",
            Topic::Networking,
            "HTTP placed at the transport layer",
            "HTTP is an application layer protocol",
            r"\bhttp\b[^.;]*\b(?:is|operates)\b[^.;]*transport layer",
            &["application layer", "transport layer security"],
        ),
        Rule::new(
            "ip-transport-layer",
            Topic::Networking,
            "IP placed at the transport layer",
            "IP is a network layer protocol",
            r"\bip\b[^.;]*\b(?:is|operates)\b[^.;]*transport layer",
            &["network layer"],
        ),
    ]
}
