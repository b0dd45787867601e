use {
    crate::{primitive::PrimitiveKind, request::Parameter},
    itertools::Itertools,
    num::bigint::ParseBigIntError,
    std::string::FromUtf8Error,
    thiserror::Error,
};

/// Everything that can go wrong while converting between bytes, integers and
/// hex strings.
#[derive(Debug, Error)]
pub enum Error {
    #[error("no value supplied: expected exactly one of primitive, hexstr or text")]
    MissingArgument,

    #[error(
        "only one of primitive, hexstr or text may be supplied, got {}",
        .0.iter().join(", ")
    )]
    ConflictingArguments(Vec<Parameter>),

    #[error("pass strings via hexstr or text, not primitive")]
    StringPrimitive,

    #[error("unsupported type for {operation}: primitive must be {expected}, not {kind}")]
    UnsupportedType {
        kind: PrimitiveKind,
        operation: &'static str,
        expected: &'static str,
    },

    #[error("failed to decode {input:?} as hex: {source}")]
    Decoding {
        input: String,
        source: hex::FromHexError,
    },

    #[error("{0:?} is not a hex string")]
    NotHex(String),

    #[error("bytes are not valid utf-8: {0}")]
    InvalidUtf8(#[from] FromUtf8Error),

    #[error("failed to parse {input:?} as a base {radix} integer: {source}")]
    Parse {
        input: String,
        radix: u32,
        source: InvalidInteger,
    },
}

/// Why text could not be read as an integer.
#[derive(Debug, Error)]
pub enum InvalidInteger {
    #[error("invalid hex digit {0:?}")]
    HexDigit(char),
    #[error(transparent)]
    Number(#[from] ParseBigIntError),
}

/// Coarse classification of [`Error`] for callers that only care about which
/// contract was violated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
pub enum ErrorKind {
    /// Wrong number of inputs, or a string passed through the primitive slot.
    IllegalArgument,
    /// The primitive has no conversion to the requested output.
    UnsupportedType,
    /// Malformed hex text or bytes that are not UTF-8.
    Decoding,
    /// Text that is not an integer in the expected base.
    Parse,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingArgument | Self::ConflictingArguments(_) | Self::StringPrimitive => {
                ErrorKind::IllegalArgument
            }
            Self::UnsupportedType { .. } => ErrorKind::UnsupportedType,
            Self::Decoding { .. } | Self::NotHex(_) | Self::InvalidUtf8(_) => ErrorKind::Decoding,
            Self::Parse { .. } => ErrorKind::Parse,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conflicting_arguments_names_parameters() {
        let err = Error::ConflictingArguments(vec![Parameter::Primitive, Parameter::HexStr]);
        assert_eq!(
            err.to_string(),
            "only one of primitive, hexstr or text may be supplied, got primitive, hexstr"
        );
        assert_eq!(err.kind(), ErrorKind::IllegalArgument);
    }

    #[test]
    fn unsupported_type_message() {
        let err = Error::UnsupportedType {
            kind: PrimitiveKind::Text,
            operation: "to_hex",
            expected: "bytes, integer or boolean",
        };
        assert_eq!(
            err.to_string(),
            "unsupported type for to_hex: primitive must be bytes, integer or boolean, not text"
        );
        assert_eq!(err.kind(), ErrorKind::UnsupportedType);
    }
}
