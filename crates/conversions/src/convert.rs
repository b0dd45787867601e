//! Conversions between hex strings, unsigned integers, bytes and text.
//!
//! Every operation takes a [`ConversionRequest`] and picks its code path from
//! the channel the value arrived through. Strings are only accepted through
//! the explicit `hexstr` and `text` channels.

use {
    crate::{
        codec::{
            big_endian_to_int,
            check_digits,
            decode_hex,
            encode_hex,
            int_to_big_endian,
            pad_to_even,
        },
        error::{Error, InvalidInteger},
        hexstr::HexStr,
        prefix::{is_hex, remove_0x_prefix},
        primitive::Primitive,
        request::ConversionRequest,
    },
    num::{BigUint, Num},
};

/// Converts the value to its hex representation.
///
/// Integers are encoded without leading zeros (JSON-RPC quantity encoding) so
/// `0` becomes `0x0` and `255` becomes `0xff`. Hex text is only normalized,
/// never reinterpreted.
pub fn to_hex(request: impl Into<ConversionRequest>) -> Result<HexStr, Error> {
    let request = request.into();
    tracing::trace!(parameter = %request.parameter(), "converting to hex");
    match request {
        ConversionRequest::HexText(hexstr) => Ok(HexStr::new(hexstr)),
        ConversionRequest::PlainText(text) => Ok(encode_hex(text.as_bytes())),
        ConversionRequest::Primitive(primitive) => match primitive {
            Primitive::Bool(value) => Ok(HexStr::from_canonical(
                if value { "0x1" } else { "0x0" }.to_owned(),
            )),
            Primitive::Bytes(bytes) => Ok(encode_hex(bytes)),
            Primitive::Int(value) => Ok(HexStr::from_canonical(format!("{value:#x}"))),
            primitive @ Primitive::Text(_) => Err(Error::UnsupportedType {
                kind: primitive.kind(),
                operation: "to_hex",
                expected: "bytes, integer or boolean",
            }),
        },
    }
}

/// Converts the value to an unsigned integer.
///
/// Hex text is parsed in base 16, plain text in base 10 and bytes are read as a
/// big-endian magnitude. Booleans map to `0` and `1`.
pub fn to_int(request: impl Into<ConversionRequest>) -> Result<BigUint, Error> {
    let request = request.into();
    tracing::trace!(parameter = %request.parameter(), "converting to integer");
    match request {
        ConversionRequest::HexText(hexstr) => parse_int(remove_0x_prefix(&hexstr), 16),
        ConversionRequest::PlainText(text) => parse_int(&text, 10),
        ConversionRequest::Primitive(primitive) => match primitive {
            Primitive::Bytes(bytes) => Ok(big_endian_to_int(&bytes)),
            Primitive::Text(_) => Err(Error::StringPrimitive),
            Primitive::Bool(value) => Ok(BigUint::from(u8::from(value))),
            Primitive::Int(value) => Ok(value),
        },
    }
}

/// Converts the value to bytes.
///
/// Integers yield their minimal big-endian encoding. Hex text with an odd
/// number of digits is left-padded with a `0` nibble, unlike [`decode_hex`].
pub fn to_bytes(request: impl Into<ConversionRequest>) -> Result<Vec<u8>, Error> {
    let request = request.into();
    tracing::trace!(parameter = %request.parameter(), "converting to bytes");
    match request {
        ConversionRequest::Primitive(primitive) => match primitive {
            Primitive::Bool(value) => Ok(vec![u8::from(value)]),
            Primitive::Bytes(bytes) => Ok(bytes),
            Primitive::Int(value) => {
                to_bytes(ConversionRequest::HexText(to_hex(Primitive::Int(value))?.into_string()))
            }
            primitive @ Primitive::Text(_) => Err(Error::UnsupportedType {
                kind: primitive.kind(),
                operation: "to_bytes",
                expected: "bool, integer or bytes, or use hexstr or text",
            }),
        },
        ConversionRequest::HexText(hexstr) => {
            let digits = remove_0x_prefix(&hexstr);
            check_digits(digits)
                .and_then(|()| hex::decode(&*pad_to_even(digits)))
                .map_err(|source| Error::Decoding {
                    input: hexstr,
                    source,
                })
        }
        ConversionRequest::PlainText(text) => Ok(text.into_bytes()),
    }
}

/// Converts the value to UTF-8 text.
///
/// Hex text is decoded strictly, integers through their minimal big-endian
/// bytes.
pub fn to_text(request: impl Into<ConversionRequest>) -> Result<String, Error> {
    let request = request.into();
    tracing::trace!(parameter = %request.parameter(), "converting to text");
    let bytes = match request {
        ConversionRequest::PlainText(text) => return Ok(text),
        ConversionRequest::HexText(hexstr) => decode_hex(&hexstr)?,
        ConversionRequest::Primitive(primitive) => match primitive {
            Primitive::Bytes(bytes) => bytes,
            Primitive::Int(value) => int_to_big_endian(&value),
            Primitive::Bool(value) => vec![u8::from(value)],
            Primitive::Text(_) => return Err(Error::StringPrimitive),
        },
    };
    Ok(String::from_utf8(bytes)?)
}

/// Runs `convert` on the value, passing strings through the `text` channel.
pub fn text_if_str<T>(
    convert: impl FnOnce(ConversionRequest) -> Result<T, Error>,
    value: impl Into<Primitive>,
) -> Result<T, Error> {
    match value.into() {
        Primitive::Text(text) => convert(ConversionRequest::PlainText(text)),
        primitive => convert(ConversionRequest::Primitive(primitive)),
    }
}

/// Runs `convert` on the value, passing strings through the `hexstr` channel.
/// Strings that are not hex are rejected before `convert` is called.
pub fn hexstr_if_str<T>(
    convert: impl FnOnce(ConversionRequest) -> Result<T, Error>,
    value: impl Into<Primitive>,
) -> Result<T, Error> {
    match value.into() {
        Primitive::Text(hexstr) if is_hex(&hexstr) => convert(ConversionRequest::HexText(hexstr)),
        Primitive::Text(text) => Err(Error::NotHex(text)),
        primitive => convert(ConversionRequest::Primitive(primitive)),
    }
}

fn parse_int(digits: &str, radix: u32) -> Result<BigUint, Error> {
    let parse = || -> Result<BigUint, InvalidInteger> {
        // The number parser tolerates a sign and separators, hex text may only
        // hold digits.
        if radix == 16 {
            if let Some(c) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
                return Err(InvalidInteger::HexDigit(c));
            }
        }
        Ok(BigUint::from_str_radix(digits, radix)?)
    };
    parse().map_err(|source| Error::Parse {
        input: digits.to_owned(),
        radix,
        source,
    })
}
