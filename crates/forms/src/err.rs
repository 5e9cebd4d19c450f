use thiserror::Error;

use crate::form::FormKind;

#[derive(Error, Debug)]
pub enum FormError {
    #[error("Common error: {0}")]
    Eyre(#[from] eyre::Error),
    #[error("Malformed {kind} response: {source}")]
    MalformedResponse {
        kind: FormKind,
        #[source]
        source: serde_json::Error,
    },
    #[error("Failed to encode {kind}: {source}")]
    Encode {
        kind: FormKind,
        #[source]
        source: serde_json::Error,
    },
}

impl FormError {
    pub fn is_malformed(&self) -> bool {
        matches!(self, FormError::MalformedResponse { .. })
    }
}
