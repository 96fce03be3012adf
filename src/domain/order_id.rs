use std::borrow::Cow;

/// A trimmed, non-empty order identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderId(String);

impl AsRef<str> for OrderId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl OrderId {
    pub fn parse(id: impl AsRef<str>) -> Result<Self, String> {
        let id = id.as_ref().trim();
        if id.is_empty() {
            return Err("The order UID cannot be empty".to_string());
        }
        Ok(Self(id.to_string()))
    }

    /// The identifier as a single URL path segment.
    pub fn percent_encoded(&self) -> Cow<'_, str> {
        urlencoding::encode(&self.0)
    }
}
