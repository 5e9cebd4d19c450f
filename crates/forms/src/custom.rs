use std::fmt::Debug;

use log::debug;

use crate::{
    decode,
    err::FormError,
    form::{Action, Actor, Form, FormKind, Outcome},
    response::Response,
    wire::{WireField, WireForm},
};

pub type SubmitAction<A> =
    Box<dyn for<'r> FnOnce(&A, &mut <A as Actor>::Tx, Response<'r>) + Send + 'static>;

/// Input element of a [`CustomForm`].
#[derive(Debug, Clone, PartialEq)]
pub enum Field {
    Dropdown(Dropdown),
    Toggle(Toggle),
    Slider(Slider),
    Input(TextInput),
}

impl Field {
    pub fn label(&self) -> &str {
        match self {
            Field::Dropdown(dropdown) => &dropdown.label,
            Field::Toggle(toggle) => &toggle.label,
            Field::Slider(slider) => &slider.label,
            Field::Input(input) => &input.label,
        }
    }

    fn encode(&self) -> WireField<'_> {
        match self {
            Field::Dropdown(dropdown) => WireField::Dropdown {
                text: &dropdown.label,
                options: &dropdown.options,
                default: dropdown.default,
            },
            Field::Toggle(toggle) => WireField::Toggle {
                text: &toggle.label,
                default: toggle.default,
            },
            Field::Slider(slider) => WireField::Slider {
                text: &slider.label,
                min: slider.min,
                max: slider.max,
                step: slider.step,
                default: slider.default,
            },
            Field::Input(input) => WireField::Input {
                text: &input.label,
                placeholder: &input.placeholder,
                default: &input.default,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dropdown {
    label: String,
    options: Vec<String>,
    default: usize,
}

impl Dropdown {
    pub fn new<I, S>(label: impl Into<String>, options: I) -> Dropdown
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Dropdown {
            label: label.into(),
            options: options.into_iter().map(Into::into).collect(),
            default: 0,
        }
    }

    pub fn with_default(mut self, index: usize) -> Self {
        self.default = index;
        self
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn default_index(&self) -> usize {
        self.default
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toggle {
    label: String,
    default: bool,
}

impl Toggle {
    pub fn new(label: impl Into<String>) -> Toggle {
        Toggle {
            label: label.into(),
            default: false,
        }
    }

    pub fn with_default(mut self, value: bool) -> Self {
        self.default = value;
        self
    }

    pub fn default_value(&self) -> bool {
        self.default
    }
}

/// Integer slider. Bounds are recorded, not enforced.
#[derive(Debug, Clone, PartialEq)]
pub struct Slider {
    label: String,
    min: i64,
    max: i64,
    step: i64,
    default: i64,
}

impl Slider {
    /// The default value starts at `min`.
    pub fn new(label: impl Into<String>, min: i64, max: i64, step: i64) -> Slider {
        Slider {
            label: label.into(),
            min,
            max,
            step,
            default: min,
        }
    }

    pub fn with_default(mut self, value: i64) -> Self {
        self.default = value;
        self
    }

    pub fn bounds(&self) -> (i64, i64, i64) {
        (self.min, self.max, self.step)
    }

    pub fn default_value(&self) -> i64 {
        self.default
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextInput {
    label: String,
    placeholder: String,
    default: String,
}

impl TextInput {
    pub fn new(label: impl Into<String>, placeholder: impl Into<String>) -> TextInput {
        TextInput {
            label: label.into(),
            placeholder: placeholder.into(),
            default: String::new(),
        }
    }

    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        self.default = value.into();
        self
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn default_value(&self) -> &str {
        &self.default
    }
}

impl From<Dropdown> for Field {
    fn from(value: Dropdown) -> Self {
        Field::Dropdown(value)
    }
}

impl From<Toggle> for Field {
    fn from(value: Toggle) -> Self {
        Field::Toggle(value)
    }
}

impl From<Slider> for Field {
    fn from(value: Slider) -> Self {
        Field::Slider(value)
    }
}

impl From<TextInput> for Field {
    fn from(value: TextInput) -> Self {
        Field::Input(value)
    }
}

/// Multi-field input form. The answer is a list of values aligned with the
/// fields, handed to the submit callback as a [`Response`].
pub struct CustomForm<A: Actor> {
    title: String,
    fields: Vec<Field>,
    on_submit: Option<SubmitAction<A>>,
    on_close: Option<Action<A>>,
}

impl<A: Actor> CustomForm<A> {
    pub fn new(title: impl Into<String>) -> CustomForm<A> {
        CustomForm {
            title: title.into(),
            fields: vec![],
            on_submit: None,
            on_close: None,
        }
    }

    pub fn field(mut self, field: impl Into<Field>) -> Self {
        self.fields.push(field.into());
        self
    }

    pub fn dropdown<I, S>(self, label: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.field(Dropdown::new(label, options))
    }

    pub fn toggle(self, label: impl Into<String>) -> Self {
        self.field(Toggle::new(label))
    }

    pub fn slider(self, label: impl Into<String>, min: i64, max: i64, step: i64) -> Self {
        self.field(Slider::new(label, min, max, step))
    }

    pub fn input(self, label: impl Into<String>, placeholder: impl Into<String>) -> Self {
        self.field(TextInput::new(label, placeholder))
    }

    pub fn on_submit<F>(mut self, f: F) -> Self
    where
        F: FnOnce(&A, &mut A::Tx, Response<'_>) + Send + 'static,
    {
        self.on_submit = Some(Box::new(f));
        self
    }

    pub fn on_close<F>(mut self, f: F) -> Self
    where
        F: FnOnce(&A, &mut A::Tx) + Send + 'static,
    {
        self.on_close = Some(Box::new(f));
        self
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn send(self, actor: &A) -> Result<(), FormError> {
        actor.send_form(Box::new(self))
    }
}

impl<A: Actor> Form<A> for CustomForm<A> {
    fn kind(&self) -> FormKind {
        FormKind::Custom
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn encode(&self) -> WireForm<'_> {
        WireForm::Custom {
            title: &self.title,
            content: self.fields.iter().map(Field::encode).collect(),
        }
    }

    fn submit(
        self: Box<Self>,
        actor: &A,
        tx: &mut A::Tx,
        data: &[u8],
    ) -> Result<Outcome, FormError> {
        let values = match decode::custom(data)? {
            Some(values) => values,
            None => {
                self.close(actor, tx);
                return Ok(Outcome::Closed);
            }
        };

        let CustomForm {
            title,
            fields,
            on_submit,
            ..
        } = *self;
        if values.len() != fields.len() {
            debug!(
                "Form {}: got {} values for {} fields",
                title,
                values.len(),
                fields.len()
            );
        }
        match on_submit {
            Some(on_submit) => on_submit(actor, tx, Response::new(values, &fields)),
            None => debug!("Form {}: no submit callback", title),
        }
        Ok(Outcome::Submitted)
    }

    fn close(self: Box<Self>, actor: &A, tx: &mut A::Tx) {
        if let Some(on_close) = self.on_close {
            on_close(actor, tx);
        }
    }
}

impl<A: Actor> Debug for CustomForm<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CustomForm")
            .field("title", &self.title)
            .field("fields", &self.fields)
            .finish()
    }
}
