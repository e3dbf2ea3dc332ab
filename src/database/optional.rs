use rocket::serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A reference (usually a UUID) that may be legitimately unset,
/// e.g. a game without a logo or a user without a photo.
///
/// Absent values render as an empty string on the wire.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OptionalRef(Option<String>);

impl OptionalRef {
    pub fn absent() -> Self {
        Self(None)
    }

    pub fn present(value: impl Into<String>) -> Self {
        Self(Some(value.into()))
    }

    /// Treats an empty string as an unset reference.
    pub fn non_empty(value: impl Into<String>) -> Self {
        let value = value.into();
        if value.is_empty() {
            Self::absent()
        } else {
            Self::present(value)
        }
    }

    pub fn as_str(&self) -> &str {
        self.0.as_deref().unwrap_or("")
    }
}

impl From<Option<String>> for OptionalRef {
    fn from(value: Option<String>) -> Self {
        Self(value)
    }
}

impl From<OptionalRef> for Option<String> {
    fn from(value: OptionalRef) -> Self {
        value.0
    }
}

impl Serialize for OptionalRef {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for OptionalRef {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<String>::deserialize(deserializer)?;
        Ok(value.map(Self::non_empty).unwrap_or_default())
    }
}
