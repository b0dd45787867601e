use {
    conversions::{
        BigUint,
        ConversionRequest,
        Error,
        ErrorKind,
        add_0x_prefix,
        decode_hex,
        remove_0x_prefix,
        to_bytes,
        to_hex,
        to_int,
    },
    std::str::FromStr,
};

fn setup() {
    observe::tracing::initialize_reentrant("conversions=trace");
}

fn sample_bytes() -> Vec<Vec<u8>> {
    vec![
        vec![],
        vec![0x00],
        vec![0x00, 0x00, 0x01],
        vec![0xde, 0xad, 0xbe, 0xef],
        (0..=255).collect(),
    ]
}

fn sample_integers() -> Vec<BigUint> {
    vec![
        BigUint::from(0u8),
        BigUint::from(1u8),
        BigUint::from(255u8),
        BigUint::from(256u16),
        BigUint::from(u64::MAX),
        BigUint::from_str(
            "115792089237316195423570985008687907853269984665640564039457584007913129639935",
        )
        .unwrap(),
    ]
}

#[test]
fn bytes_survive_hex_round_trip() {
    setup();
    for bytes in sample_bytes() {
        let hex = to_hex(ConversionRequest::primitive(bytes.clone())).unwrap();
        assert_eq!(to_bytes(ConversionRequest::hexstr(hex)).unwrap(), bytes);
    }
}

#[test]
fn integers_survive_hex_round_trip() {
    setup();
    for value in sample_integers() {
        let hex = to_hex(ConversionRequest::primitive(&value)).unwrap();
        assert_eq!(to_int(ConversionRequest::hexstr(hex)).unwrap(), value);
    }
}

#[test]
fn integers_survive_bytes_round_trip() {
    for value in sample_integers() {
        let bytes = to_bytes(ConversionRequest::primitive(&value)).unwrap();
        assert_eq!(to_int(ConversionRequest::primitive(bytes)).unwrap(), value);
    }
}

#[test]
fn prefix_helpers_are_idempotent() {
    for s in ["", "0x", "0X", "abc", "0xabc", "0XABC"] {
        assert_eq!(add_0x_prefix(&add_0x_prefix(s)), add_0x_prefix(s));
        assert_eq!(remove_0x_prefix(remove_0x_prefix(s)), remove_0x_prefix(s));
    }
}

#[test]
fn booleans_take_single_digit_path() {
    assert_eq!(to_hex(ConversionRequest::primitive(true)).unwrap(), "0x1");
    assert_eq!(to_hex(ConversionRequest::primitive(false)).unwrap(), "0x0");
    assert_eq!(to_bytes(ConversionRequest::primitive(true)).unwrap(), b"\x01");
}

#[test]
fn integers_format_without_padding() {
    assert_eq!(to_hex(ConversionRequest::primitive(0u8)).unwrap(), "0x0");
    assert_eq!(to_hex(ConversionRequest::primitive(255u8)).unwrap(), "0xff");
}

#[test]
fn odd_length_hex_is_padded_for_bytes() {
    assert_eq!(
        to_bytes(ConversionRequest::hexstr("0xabc")).unwrap(),
        to_bytes(ConversionRequest::hexstr("0x0abc")).unwrap()
    );
}

#[test]
fn exactly_one_input_is_required() {
    setup();
    let err = ConversionRequest::from_parts(Some(1u8.into()), Some("0x1".to_owned()), None)
        .and_then(to_hex)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::IllegalArgument);

    let err = ConversionRequest::from_parts(None, None, None).and_then(to_hex).unwrap_err();
    assert!(matches!(err, Error::MissingArgument));
}

#[test]
fn strings_are_rejected_in_primitive_slot() {
    assert_eq!(
        to_hex(ConversionRequest::primitive("abc")).unwrap_err().kind(),
        ErrorKind::UnsupportedType
    );
    assert_eq!(
        to_int(ConversionRequest::primitive("abc")).unwrap_err().kind(),
        ErrorKind::IllegalArgument
    );
}

#[test]
fn text_channel() {
    assert_eq!(to_hex(ConversionRequest::text("A")).unwrap(), "0x41");
    assert_eq!(to_int(ConversionRequest::text("12")).unwrap(), BigUint::from(12u8));
}

#[test]
fn malformed_hex_fails_to_decode() {
    let err = decode_hex("0xg1").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Decoding);
}
