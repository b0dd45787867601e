//! Conversions between the representations blockchain values travel in: raw
//! bytes, unsigned integers and `0x` prefixed hex text, with UTF-8 text as a
//! convenience input.
//!
//! The entry points are [`to_hex`], [`to_int`], [`to_bytes`] and [`to_text`].
//! Each of them takes a [`ConversionRequest`] naming the channel the value
//! arrives through, so a string is never silently interpreted as digits, hex
//! or text.

pub mod codec;
pub mod convert;
pub mod error;
pub mod hexstr;
pub mod prefix;
pub mod primitive;
pub mod request;
pub mod serialization;

pub use {
    codec::{big_endian_to_int, decode_hex, encode_hex, int_to_big_endian},
    convert::{hexstr_if_str, text_if_str, to_bytes, to_hex, to_int, to_text},
    error::{Error, ErrorKind, InvalidInteger},
    hexstr::HexStr,
    num::BigUint,
    prefix::{add_0x_prefix, is_0x_prefixed, is_hex, remove_0x_prefix},
    primitive::{Primitive, PrimitiveKind},
    request::{ConversionRequest, Parameter},
};
