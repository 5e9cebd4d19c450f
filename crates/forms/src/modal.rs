use std::fmt::Debug;

use log::debug;

use crate::{
    decode,
    err::FormError,
    form::{Action, Actor, Form, FormKind, Outcome},
    wire::WireForm,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalChoice {
    First,
    Second,
}

impl From<bool> for ModalChoice {
    fn from(value: bool) -> Self {
        if value {
            ModalChoice::First
        } else {
            ModalChoice::Second
        }
    }
}

struct ModalButton<A: Actor> {
    text: String,
    on_click: Option<Action<A>>,
}

impl<A: Actor> Default for ModalButton<A> {
    fn default() -> Self {
        ModalButton {
            text: String::new(),
            on_click: None,
        }
    }
}

/// Two-button dialog. The actor answers `true` for the first button and
/// `false` for the second.
pub struct ModalForm<A: Actor> {
    title: String,
    body: String,
    button1: ModalButton<A>,
    button2: ModalButton<A>,
    on_close: Option<Action<A>>,
}

impl<A: Actor> ModalForm<A> {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> ModalForm<A> {
        ModalForm {
            title: title.into(),
            body: body.into(),
            button1: ModalButton::default(),
            button2: ModalButton::default(),
            on_close: None,
        }
    }

    pub fn button1<F>(mut self, text: impl Into<String>, f: F) -> Self
    where
        F: FnOnce(&A, &mut A::Tx) + Send + 'static,
    {
        self.button1 = ModalButton {
            text: text.into(),
            on_click: Some(Box::new(f)),
        };
        self
    }

    pub fn button2<F>(mut self, text: impl Into<String>, f: F) -> Self
    where
        F: FnOnce(&A, &mut A::Tx) + Send + 'static,
    {
        self.button2 = ModalButton {
            text: text.into(),
            on_click: Some(Box::new(f)),
        };
        self
    }

    pub fn on_close<F>(mut self, f: F) -> Self
    where
        F: FnOnce(&A, &mut A::Tx) + Send + 'static,
    {
        self.on_close = Some(Box::new(f));
        self
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn button_text(&self, choice: ModalChoice) -> &str {
        match choice {
            ModalChoice::First => &self.button1.text,
            ModalChoice::Second => &self.button2.text,
        }
    }

    pub fn send(self, actor: &A) -> Result<(), FormError> {
        actor.send_form(Box::new(self))
    }
}

impl<A: Actor> Form<A> for ModalForm<A> {
    fn kind(&self) -> FormKind {
        FormKind::Modal
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn encode(&self) -> WireForm<'_> {
        WireForm::Modal {
            title: &self.title,
            content: &self.body,
            button1: &self.button1.text,
            button2: &self.button2.text,
        }
    }

    fn submit(
        self: Box<Self>,
        actor: &A,
        tx: &mut A::Tx,
        data: &[u8],
    ) -> Result<Outcome, FormError> {
        let choice = match decode::modal(data)? {
            Some(value) => ModalChoice::from(value),
            None => {
                self.close(actor, tx);
                return Ok(Outcome::Closed);
            }
        };

        let ModalForm {
            title,
            button1,
            button2,
            ..
        } = *self;
        let button = match choice {
            ModalChoice::First => button1,
            ModalChoice::Second => button2,
        };
        match button.on_click {
            Some(on_click) => on_click(actor, tx),
            None => debug!("Modal {}: {:?} button has no callback", title, choice),
        }
        Ok(Outcome::Modal(choice))
    }

    fn close(self: Box<Self>, actor: &A, tx: &mut A::Tx) {
        if let Some(on_close) = self.on_close {
            on_close(actor, tx);
        }
    }
}

impl<A: Actor> Debug for ModalForm<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModalForm")
            .field("title", &self.title)
            .field("body", &self.body)
            .field("button1", &self.button1.text)
            .field("button2", &self.button2.text)
            .finish()
    }
}
