//! Minimal URL helpers for links embedded in outbound notifications.

/// Percent-encode a string for use as a query-string component
///
/// Unreserved characters (RFC 3986) pass through untouched; everything else
/// is emitted as `%XX`.
pub fn encode_query_component(value: &str) -> String {
    let mut encoded = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                encoded.push(byte as char);
            }
            _ => encoded.push_str(&format!("%{:02X}", byte)),
        }
    }
    encoded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unreserved_characters_pass_through() {
        assert_eq!(encode_query_component("abc-123_X.~"), "abc-123_X.~");
    }

    #[test]
    fn test_email_address_encoding() {
        assert_eq!(
            encode_query_component("user+tag@example.com"),
            "user%2Btag%40example.com"
        );
    }

    #[test]
    fn test_space_encoding() {
        assert_eq!(encode_query_component("a b"), "a%20b");
    }
}
