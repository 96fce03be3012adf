use serde_json::Value;

/// An order as returned by the order service. The structure is never inspected.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderRecord(Value);

impl OrderRecord {
    pub fn parse(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body).map(Self)
    }
}

// Pretty-printed with a 2 space indent.
impl std::fmt::Display for OrderRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:#}", self.0)
    }
}
