//! URL encoding utilities.
//!
//! Pure-Rust equivalents of `encodeURIComponent` and query string building,
//! so endpoint URLs can be computed (and tested) without a browser.

/// Characters `encodeURIComponent` leaves untouched besides ASCII alphanumerics.
const UNRESERVED: &[u8] = b"-_.!~*'()";

/// Percent-encode a query component the way `encodeURIComponent` does.
pub fn encode_component(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        if byte.is_ascii_alphanumeric() || UNRESERVED.contains(&byte) {
            out.push(byte as char);
        } else {
            out.push_str(&format!("%{:02X}", byte));
        }
    }
    out
}

/// Build `k1=v1&k2=v2` with every value percent-encoded.
pub fn query_string(params: &[(&str, &str)]) -> String {
    params
        .iter()
        .map(|(k, v)| format!("{}={}", k, encode_component(v)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Append a query string to `base`.
pub fn with_query(base: &str, params: &[(&str, &str)]) -> String {
    if params.is_empty() {
        return base.to_string();
    }
    format!("{}?{}", base, query_string(params))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_component() {
        assert_eq!(encode_component("/var/log"), "%2Fvar%2Flog");
        assert_eq!(encode_component("a b&c=d"), "a%20b%26c%3Dd");
        assert_eq!(encode_component("keep-_.!~*'()"), "keep-_.!~*'()");
        assert_eq!(encode_component("日志.txt"), "%E6%97%A5%E5%BF%97.txt");
    }

    #[test]
    fn test_query_string() {
        assert_eq!(
            query_string(&[("oldName", "/a b"), ("newName", "/c")]),
            "oldName=%2Fa%20b&newName=%2Fc"
        );
        assert_eq!(with_query("/x", &[]), "/x");
        assert_eq!(with_query("/x", &[("dir", "/")]), "/x?dir=%2F");
    }
}
