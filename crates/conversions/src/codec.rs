use {
    crate::{error::Error, hexstr::HexStr, prefix::remove_0x_prefix},
    num::BigUint,
    std::borrow::Cow,
};

/// Lowercase, `0x`-prefixed hex encoding. Empty input encodes as `0x`.
pub fn encode_hex(bytes: impl AsRef<[u8]>) -> HexStr {
    HexStr::from_canonical(format!("0x{}", hex::encode(bytes.as_ref())))
}

/// Strict hex decoding: the prefix is optional but the digit count has to be
/// even.
pub fn decode_hex(hexstr: &str) -> Result<Vec<u8>, Error> {
    let digits = remove_0x_prefix(hexstr);
    check_digits(digits)
        .and_then(|()| hex::decode(digits))
        .map_err(|source| Error::Decoding {
            input: hexstr.to_owned(),
            source,
        })
}

/// Rejects the first character that is not a hex digit. The index counts
/// characters, so non-ASCII input is reported as the caller wrote it.
pub(crate) fn check_digits(digits: &str) -> Result<(), hex::FromHexError> {
    match digits.chars().enumerate().find(|(_, c)| !c.is_ascii_hexdigit()) {
        Some((index, c)) => Err(hex::FromHexError::InvalidHexCharacter { c, index }),
        None => Ok(()),
    }
}

/// Interprets the bytes as a big-endian unsigned magnitude.
pub fn big_endian_to_int(bytes: &[u8]) -> BigUint {
    BigUint::from_bytes_be(bytes)
}

/// Minimal big-endian encoding. Zero is a single `0x00` byte.
pub fn int_to_big_endian(value: &BigUint) -> Vec<u8> {
    value.to_bytes_be()
}

/// Left-pads unprefixed digits with a `0` nibble so they decode pairwise.
/// Expects digits that passed [`check_digits`].
pub(crate) fn pad_to_even(digits: &str) -> Cow<'_, str> {
    if digits.len() % 2 == 0 {
        Cow::Borrowed(digits)
    } else {
        Cow::Owned(format!("0{digits}"))
    }
}
