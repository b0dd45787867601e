use {
    crate::{
        error::Error,
        prefix::{add_0x_prefix, is_hex, remove_0x_prefix},
    },
    serde::{Deserialize, Deserializer, Serialize, Serializer, de},
    std::{borrow::Cow, fmt, ops::Deref, str::FromStr},
};

/// Hex text in canonical form: lowercase digits behind a lowercase `0x`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HexStr(String);

impl HexStr {
    /// Canonicalizes the casing and the prefix. The digits themselves are not
    /// checked, use [`str::parse`] for that.
    pub fn new(value: impl AsRef<str>) -> Self {
        Self(add_0x_prefix(&value.as_ref().to_lowercase()))
    }

    /// Wraps an already canonical string.
    pub(crate) fn from_canonical(value: String) -> Self {
        debug_assert!(value.starts_with("0x"));
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The digits without the `0x` prefix.
    pub fn digits(&self) -> &str {
        remove_0x_prefix(&self.0)
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl FromStr for HexStr {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !is_hex(s) {
            return Err(Error::NotHex(s.to_owned()));
        }
        Ok(Self::new(s))
    }
}

impl fmt::Display for HexStr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Deref for HexStr {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<str> for HexStr {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<HexStr> for String {
    fn from(value: HexStr) -> Self {
        value.0
    }
}

impl PartialEq<str> for HexStr {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for HexStr {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl Serialize for HexStr {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for HexStr {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = Cow::<str>::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}
