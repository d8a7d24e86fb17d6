// Error taxonomy shared by the document model and the gateway
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    /// A constructor or setter received a value outside its documented range.
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },

    /// A wire string did not match any member of a closed enumeration.
    #[error("unknown {kind} value: {value:?}")]
    UnknownEnumValue { kind: &'static str, value: String },

    /// A widget object carried a `type` discriminator with no matching variant.
    #[error("unknown widget type: {0:?}")]
    UnknownWidgetType(String),

    /// The JSON document is structurally invalid (missing key, wrong type).
    #[error("malformed document: {reason}")]
    MalformedDocument { reason: String },

    /// The targeted screenboard does not exist.
    #[error("screenboard not found: {errors:?}")]
    NotFound { errors: Vec<String> },

    /// The remote service rejected the request.
    #[error("screenboard request failed with status {status}: {errors:?}")]
    Gateway {
        status: u16,
        errors: Vec<String>,
        #[source]
        source: Option<reqwest::Error>,
    },

    /// No response was received from the remote service.
    #[error("screenboard transport failure: {0}")]
    Transport(#[from] reqwest::Error),
}

impl Error {
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }

    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedDocument {
            reason: reason.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Messages reported by the remote service, empty for local failures.
    pub fn remote_errors(&self) -> &[String] {
        match self {
            Self::NotFound { errors } | Self::Gateway { errors, .. } => errors,
            _ => &[],
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::malformed(err.to_string())
    }
}
