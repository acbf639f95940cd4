//! Id normalization and construction.
//!
//! Node ids are injective on `(type, normalize(label))`: two occurrences with
//! the same type and case-folded label always collapse to the same node.

/// Lower-case, whitespace→underscore, strip everything else non-alphanumeric,
/// truncate to 100 octets.
#[must_use]
pub fn normalize(label: &str) -> String {
    let mut out = String::with_capacity(label.len());
    for ch in label.chars() {
        if ch.is_whitespace() {
            out.push('_');
        } else if ch.is_alphanumeric() {
            for lower in ch.to_lowercase() {
                out.push(lower);
            }
        }
        // everything else (punctuation, symbols) is dropped
    }
    truncate_to_octets(&out, 100)
}

/// Truncate a string to at most `max_bytes` bytes without splitting a UTF-8
/// code point.
fn truncate_to_octets(s: &str, max_bytes: usize) -> String {
    if s.len() <= max_bytes {
        return s.to_string();
    }
    let mut end = max_bytes;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    s[..end].to_string()
}

/// Build the stable node id `type:normalized-label`.
#[must_use]
pub fn node_id(entity_type: &str, label: &str) -> String {
    format!("{entity_type}:{}", normalize(label))
}

/// Canonical, order-independent edge id: `min(a,b)|max(a,b)`.
#[must_use]
pub fn edge_id(a: &str, b: &str) -> String {
    if a <= b {
        format!("{a}|{b}")
    } else {
        format!("{b}|{a}")
    }
}

/// Split a canonical edge id back into its two endpoints, in canonical order.
#[must_use]
pub fn edge_endpoints(id: &str) -> Option<(&str, &str)> {
    id.split_once('|')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_lowercases_and_joins_whitespace() {
        assert_eq!(normalize("NVIDIA Corp"), "nvidia_corp");
    }

    #[test]
    fn normalize_strips_punctuation() {
        assert_eq!(normalize("Anton's decision!"), "antons_decision");
    }

    #[test]
    fn normalize_truncates_to_100_octets() {
        let long = "a".repeat(150);
        assert_eq!(normalize(&long).len(), 100);
    }

    #[test]
    fn normalize_truncation_respects_utf8_boundaries() {
        let long = "é".repeat(80); // 2 bytes each = 160 bytes
        let out = normalize(&long);
        assert!(out.len() <= 100);
        assert!(std::str::from_utf8(out.as_bytes()).is_ok());
    }

    #[test]
    fn node_id_is_injective_on_type_and_normalized_label() {
        assert_eq!(node_id("ticker", "NVDA"), node_id("ticker", "nvda"));
        assert_ne!(node_id("ticker", "NVDA"), node_id("tool", "NVDA"));
    }

    #[test]
    fn edge_id_is_order_independent() {
        let a = node_id("person", "Anton");
        let b = node_id("ticker", "NVDA");
        assert_eq!(edge_id(&a, &b), edge_id(&b, &a));
    }

    #[test]
    fn edge_endpoints_round_trips_canonical_order() {
        let a = node_id("person", "Anton");
        let b = node_id("ticker", "NVDA");
        let id = edge_id(&a, &b);
        let (x, y) = edge_endpoints(&id).unwrap();
        assert!(x <= y);
        assert_eq!(format!("{x}|{y}"), id);
    }
}
