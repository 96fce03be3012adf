use crate::order_client::LookupError;
use crate::util::error_chain_line;

/// Everything the status region can say.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusMessage {
    EnterOrderId,
    Loading,
    Done,
    Rejected { status: u16, body: String },
    Failed(String),
}

impl std::fmt::Display for StatusMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EnterOrderId => f.write_str("Enter an Order UID"),
            Self::Loading => f.write_str("Loading..."),
            Self::Done => f.write_str("Done"),
            Self::Rejected { status, body } => write!(f, "Error {status}: {body}"),
            Self::Failed(description) => write!(f, "Error: {description}"),
        }
    }
}

impl From<&LookupError> for StatusMessage {
    fn from(e: &LookupError) -> Self {
        match e {
            LookupError::Rejected { status, body } => Self::Rejected {
                status: status.as_u16(),
                body: body.clone(),
            },
            other => Self::Failed(error_chain_line(other)),
        }
    }
}
