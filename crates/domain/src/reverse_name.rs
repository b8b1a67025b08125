//! Transform pair between `ip6.arpa.` reverse-lookup names and suffixed
//! forward labels.
//!
//! A reverse-lookup name carries the address as 32 single-nibble labels in
//! reversed order. The forward encoding drops the arpa tail and the dots
//! and reverses the character sequence, which leaves the 32 hex digits of
//! the address in natural order; decoding re-inserts the colon separators
//! and parses the literal. The two functions are exact inverses for any
//! name produced by the standard nibble-per-label PTR convention.

use std::net::Ipv6Addr;

const IP6_ARPA_TAIL: &str = ".ip6.arpa.";
const NIBBLES: usize = 32;

/// Derives the forward hostname answered for a PTR query.
///
/// `"4.3.2.1.<28 zero labels>.ip6.arpa."` with suffix `"v6.example.com"`
/// becomes `"00000000000000000000000000001234.v6.example.com."`.
///
/// The transform is applied to the name as-is: every literal occurrence of
/// `".ip6.arpa."` is removed, then every dot, then the remaining code
/// points are reversed and the suffix appended. Names that never were
/// reverse-lookup names still produce an answer, matching the behavior of
/// a handler that is only put in front of the reverse zone.
pub fn ptr_target(name: &str, suffix: &str) -> String {
    let without_arpa = name.replace(IP6_ARPA_TAIL, "");
    let reversed: String = without_arpa.chars().filter(|&c| c != '.').rev().collect();
    format!("{reversed}.{suffix}.")
}

/// Reconstructs the address encoded in a forward name.
///
/// The name must be exactly 32 nibble characters directly under the
/// configured suffix; anything else (wrong length, different suffix,
/// non-hex characters) returns `None` so the caller can fall through to
/// the next handler instead of emitting a corrupt answer.
pub fn decode_forward(name: &str, suffix: &str) -> Option<Ipv6Addr> {
    let encoded = name
        .strip_suffix('.')?
        .strip_suffix(suffix)?
        .strip_suffix('.')?;
    if encoded.chars().count() != NIBBLES {
        return None;
    }
    expand_literal(encoded).parse().ok()
}

/// Re-inserts a `:` between each group of four nibbles.
fn expand_literal(encoded: &str) -> String {
    let mut literal = String::with_capacity(NIBBLES + 7);
    for (i, nibble) in encoded.chars().enumerate() {
        if i > 0 && i % 4 == 0 {
            literal.push(':');
        }
        literal.push(nibble);
    }
    literal
}
