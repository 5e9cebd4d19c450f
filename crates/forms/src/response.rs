use serde_json::Value;

use crate::{
    coerce::{to_bool, to_int, to_str},
    custom::Field,
};

/// Decoded answer to a [`crate::CustomForm`].
///
/// Values are positional: value `i` answers field `i`. Every accessor falls
/// back to the zero value when the index is out of range or the value has an
/// unexpected shape.
#[derive(Debug)]
pub struct Response<'a> {
    values: Vec<Value>,
    fields: &'a [Field],
}

impl<'a> Response<'a> {
    pub(crate) fn new(values: Vec<Value>, fields: &'a [Field]) -> Response<'a> {
        Response { values, fields }
    }

    /// Selected option text of dropdown `idx`.
    pub fn dropdown_option(&self, idx: usize) -> &'a str {
        let Some(value) = self.values.get(idx) else {
            return "";
        };
        usize::try_from(to_int(value))
            .ok()
            .and_then(|opt| self.dropdown_options(idx).get(opt))
            .map(String::as_str)
            .unwrap_or_default()
    }

    pub fn dropdown_index(&self, idx: usize) -> i64 {
        self.values.get(idx).map(to_int).unwrap_or_default()
    }

    pub fn toggle_value(&self, idx: usize) -> bool {
        self.values.get(idx).map(to_bool).unwrap_or_default()
    }

    pub fn slider_value(&self, idx: usize) -> i64 {
        self.values.get(idx).map(to_int).unwrap_or_default()
    }

    pub fn text_value(&self, idx: usize) -> &str {
        self.values.get(idx).map(to_str).unwrap_or_default()
    }

    /// Options of field `idx` if it is a dropdown.
    pub fn dropdown_options(&self, idx: usize) -> &'a [String] {
        match self.fields.get(idx) {
            Some(Field::Dropdown(dropdown)) => dropdown.options(),
            _ => &[],
        }
    }

    pub fn value(&self, idx: usize) -> Option<&Value> {
        self.values.get(idx)
    }

    pub fn field(&self, idx: usize) -> Option<&'a Field> {
        self.fields.get(idx)
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
