//! Handling of the `0x` marker in front of hex text.

pub fn is_0x_prefixed(value: &str) -> bool {
    value.starts_with("0x") || value.starts_with("0X")
}

/// Prepends `0x` unless the value already carries a prefix.
pub fn add_0x_prefix(value: &str) -> String {
    if is_0x_prefixed(value) {
        value.to_owned()
    } else {
        format!("0x{value}")
    }
}

/// Strips a single leading `0x` or `0X`.
pub fn remove_0x_prefix(value: &str) -> &str {
    if is_0x_prefixed(value) {
        &value[2..]
    } else {
        value
    }
}

/// Whether everything after an optional prefix is made of hex digits. Odd
/// digit counts and the bare prefix are accepted.
pub fn is_hex(value: &str) -> bool {
    remove_0x_prefix(value)
        .bytes()
        .all(|byte| byte.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
    use {super::*, rstest::rstest};

    #[rstest]
    #[case("", "0x")]
    #[case("ab", "0xab")]
    #[case("0xab", "0xab")]
    #[case("0XAB", "0XAB")]
    fn adds_prefix(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(add_0x_prefix(input), expected);
        assert_eq!(add_0x_prefix(&add_0x_prefix(input)), expected);
    }

    #[rstest]
    #[case("", "")]
    #[case("0x", "")]
    #[case("0xab", "ab")]
    #[case("0XAB", "AB")]
    #[case("ab", "ab")]
    fn removes_prefix(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(remove_0x_prefix(input), expected);
        assert_eq!(remove_0x_prefix(remove_0x_prefix(input)), expected);
    }

    #[test]
    fn hex_detection() {
        assert!(is_hex("0x"));
        assert!(is_hex("0xabc"));
        assert!(is_hex("DEADbeef"));
        assert!(!is_hex("0xg1"));
        assert!(!is_hex("hello"));
    }
}
