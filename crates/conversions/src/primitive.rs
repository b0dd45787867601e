use num::BigUint;

/// A value passed through the `primitive` slot of a conversion.
///
/// Text is representable so that callers holding "some value" can hand it over
/// unchanged, but every conversion rejects it: a string could mean decimal
/// digits, hex or UTF-8, so it has to go through the `hexstr` or `text`
/// channel instead.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Primitive {
    Bool(bool),
    Int(BigUint),
    Bytes(Vec<u8>),
    Text(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum PrimitiveKind {
    Boolean,
    Integer,
    Text,
    Bytes,
}

impl Primitive {
    pub fn kind(&self) -> PrimitiveKind {
        match self {
            Self::Bool(_) => PrimitiveKind::Boolean,
            Self::Int(_) => PrimitiveKind::Integer,
            Self::Text(_) => PrimitiveKind::Text,
            Self::Bytes(_) => PrimitiveKind::Bytes,
        }
    }

    pub fn is_boolean(&self) -> bool {
        self.kind() == PrimitiveKind::Boolean
    }

    pub fn is_integer(&self) -> bool {
        self.kind() == PrimitiveKind::Integer
    }

    pub fn is_string(&self) -> bool {
        self.kind() == PrimitiveKind::Text
    }

    pub fn is_bytes(&self) -> bool {
        self.kind() == PrimitiveKind::Bytes
    }
}

impl From<bool> for Primitive {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Primitive {
                fn from(value: $t) -> Self {
                    Self::Int(BigUint::from(value))
                }
            }
        )*
    };
}

impl_from_unsigned!(u8, u16, u32, u64, u128, usize);

impl From<BigUint> for Primitive {
    fn from(value: BigUint) -> Self {
        Self::Int(value)
    }
}

impl From<&BigUint> for Primitive {
    fn from(value: &BigUint) -> Self {
        Self::Int(value.clone())
    }
}

impl From<Vec<u8>> for Primitive {
    fn from(value: Vec<u8>) -> Self {
        Self::Bytes(value)
    }
}

impl From<&[u8]> for Primitive {
    fn from(value: &[u8]) -> Self {
        Self::Bytes(value.to_vec())
    }
}

impl<const N: usize> From<[u8; N]> for Primitive {
    fn from(value: [u8; N]) -> Self {
        Self::Bytes(value.to_vec())
    }
}

impl<const N: usize> From<&[u8; N]> for Primitive {
    fn from(value: &[u8; N]) -> Self {
        Self::Bytes(value.to_vec())
    }
}

impl From<String> for Primitive {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for Primitive {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn booleans_are_not_integers() {
        let value = Primitive::from(true);
        assert!(value.is_boolean());
        assert!(!value.is_integer());
        assert_eq!(Primitive::from(1u8).kind(), PrimitiveKind::Integer);
    }

    #[test]
    fn owned_and_borrowed_bytes_are_equivalent() {
        let owned = Primitive::from(vec![1u8, 2, 3]);
        let borrowed = Primitive::from(&[1u8, 2, 3][..]);
        let array = Primitive::from([1u8, 2, 3]);
        assert_eq!(owned, borrowed);
        assert_eq!(owned, array);
        assert!(owned.is_bytes());
    }

    #[test]
    fn strings_classify_as_text() {
        assert!(Primitive::from("abc").is_string());
        assert!(Primitive::from(String::from("0x12")).is_string());
        assert_eq!(PrimitiveKind::Text.to_string(), "text");
    }
}
