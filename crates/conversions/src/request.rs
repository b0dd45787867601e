use crate::{error::Error, primitive::Primitive};

/// Names of the three mutually exclusive inputs of a conversion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Parameter {
    Primitive,
    HexStr,
    Text,
}

/// Input of a single conversion: exactly one of a primitive value, hex text or
/// plain UTF-8 text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConversionRequest {
    Primitive(Primitive),
    HexText(String),
    PlainText(String),
}

impl ConversionRequest {
    pub fn primitive(value: impl Into<Primitive>) -> Self {
        Self::Primitive(value.into())
    }

    pub fn hexstr(value: impl Into<String>) -> Self {
        Self::HexText(value.into())
    }

    pub fn text(value: impl Into<String>) -> Self {
        Self::PlainText(value.into())
    }

    /// Builds a request from three optional inputs, for callers that keep
    /// them as separate fields. Exactly one has to be present. The check is
    /// about the shape of the call only, two inputs are rejected even when
    /// they describe the same value.
    pub fn from_parts(
        primitive: Option<Primitive>,
        hexstr: Option<String>,
        text: Option<String>,
    ) -> Result<Self, Error> {
        let supplied: Vec<_> = [
            (Parameter::Primitive, primitive.is_some()),
            (Parameter::HexStr, hexstr.is_some()),
            (Parameter::Text, text.is_some()),
        ]
        .into_iter()
        .filter_map(|(parameter, present)| present.then_some(parameter))
        .collect();

        match (primitive, hexstr, text) {
            (Some(primitive), None, None) => Ok(Self::Primitive(primitive)),
            (None, Some(hexstr), None) => Ok(Self::HexText(hexstr)),
            (None, None, Some(text)) => Ok(Self::PlainText(text)),
            (None, None, None) => {
                tracing::debug!("conversion called without a value");
                Err(Error::MissingArgument)
            }
            _ => {
                tracing::debug!(?supplied, "conversion called with conflicting values");
                Err(Error::ConflictingArguments(supplied))
            }
        }
    }

    pub fn parameter(&self) -> Parameter {
        match self {
            Self::Primitive(_) => Parameter::Primitive,
            Self::HexText(_) => Parameter::HexStr,
            Self::PlainText(_) => Parameter::Text,
        }
    }
}

impl From<Primitive> for ConversionRequest {
    fn from(value: Primitive) -> Self {
        Self::Primitive(value)
    }
}
