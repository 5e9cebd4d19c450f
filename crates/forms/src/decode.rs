use log::warn;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{err::FormError, form::FormKind};

/// Parses a raw response payload. `Ok(None)` is the close sentinel: empty data
/// or a JSON `null`.
pub fn parse<T>(kind: FormKind, data: &[u8]) -> Result<Option<T>, FormError>
where
    T: DeserializeOwned,
{
    if data.trim_ascii().is_empty() {
        return Ok(None);
    }
    serde_json::from_slice::<Option<T>>(data).map_err(|source| {
        warn!(
            "Malformed {} response: {}. Payload:[{}]",
            kind,
            source,
            String::from_utf8_lossy(data)
        );
        FormError::MalformedResponse { kind, source }
    })
}

/// Index of the clicked menu button.
pub fn menu(data: &[u8]) -> Result<Option<i64>, FormError> {
    parse(FormKind::Menu, data)
}

/// Values of a multi-field form, aligned with its fields.
pub fn custom(data: &[u8]) -> Result<Option<Vec<Value>>, FormError> {
    parse(FormKind::Custom, data)
}

/// `true` for the first modal button, `false` for the second.
pub fn modal(data: &[u8]) -> Result<Option<bool>, FormError> {
    parse(FormKind::Modal, data)
}
