//! [`serde_with`] adapters that encode values the same way the conversion
//! functions do.

use {
    crate::{
        codec::encode_hex,
        convert::{to_bytes, to_hex, to_int},
        prefix::is_0x_prefixed,
        request::ConversionRequest,
    },
    num::BigUint,
    serde::{Deserialize, Deserializer, Serializer, de},
    serde_with::{DeserializeAs, SerializeAs},
    std::borrow::Cow,
};

/// Serialize and deserialize binary data as a `0x` prefixed hex string.
///
/// Deserialization is as lenient as [`to_bytes`] on hex text: the prefix is
/// optional and an odd number of digits is left-padded.
#[derive(Debug)]
pub struct HexBytes;

impl<'de> DeserializeAs<'de, Vec<u8>> for HexBytes {
    fn deserialize_as<D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let s = Cow::<str>::deserialize(deserializer)?;
        to_bytes(ConversionRequest::hexstr(s.as_ref())).map_err(de::Error::custom)
    }
}

impl SerializeAs<Vec<u8>> for HexBytes {
    fn serialize_as<S: Serializer>(source: &Vec<u8>, serializer: S) -> Result<S::Ok, S::Error> {
        <Self as SerializeAs<[u8]>>::serialize_as(source, serializer)
    }
}

impl SerializeAs<[u8]> for HexBytes {
    fn serialize_as<S: Serializer>(source: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&encode_hex(source))
    }
}

impl<'de, const N: usize> DeserializeAs<'de, [u8; N]> for HexBytes {
    fn deserialize_as<D: Deserializer<'de>>(deserializer: D) -> Result<[u8; N], D::Error> {
        let bytes = <Self as DeserializeAs<'de, Vec<u8>>>::deserialize_as(deserializer)?;
        let len = bytes.len();
        bytes.try_into().map_err(|_| {
            de::Error::custom(format!("expected {N} bytes of hex data but got {len}"))
        })
    }
}

impl<const N: usize> SerializeAs<[u8; N]> for HexBytes {
    fn serialize_as<S: Serializer>(source: &[u8; N], serializer: S) -> Result<S::Ok, S::Error> {
        <Self as SerializeAs<[u8]>>::serialize_as(source, serializer)
    }
}

/// Serialize a [`BigUint`] as a minimal hex quantity (`0xff`) and deserialize
/// it from either a `0x` prefixed hex string or a decimal string.
#[derive(Debug)]
pub struct HexOrDecimal;

impl<'de> DeserializeAs<'de, BigUint> for HexOrDecimal {
    fn deserialize_as<D: Deserializer<'de>>(deserializer: D) -> Result<BigUint, D::Error> {
        struct Visitor;

        impl de::Visitor<'_> for Visitor {
            type Value = BigUint;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                write!(
                    formatter,
                    "an unsigned integer encoded either as 0x hex prefixed or decimal string"
                )
            }

            fn visit_str<E>(self, s: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                let request = if is_0x_prefixed(s) {
                    ConversionRequest::hexstr(s)
                } else {
                    ConversionRequest::text(s)
                };
                to_int(request).map_err(|err| E::custom(format!("failed to decode {s:?}: {err}")))
            }
        }

        deserializer.deserialize_str(Visitor)
    }
}

impl SerializeAs<BigUint> for HexOrDecimal {
    fn serialize_as<S: Serializer>(source: &BigUint, serializer: S) -> Result<S::Ok, S::Error> {
        let hex =
            to_hex(ConversionRequest::primitive(source)).map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&hex)
    }
}
