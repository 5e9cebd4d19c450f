use std::fmt::Debug;

use log::debug;

use crate::{
    decode,
    err::FormError,
    form::{Action, Actor, Form, FormKind, Outcome},
    wire::{WireButton, WireForm},
};

pub struct MenuButton<A: Actor> {
    text: String,
    icon: String,
    on_click: Option<Action<A>>,
}

impl<A: Actor> MenuButton<A> {
    pub fn new(text: impl Into<String>) -> MenuButton<A> {
        MenuButton {
            text: text.into(),
            icon: String::new(),
            on_click: None,
        }
    }

    /// Texture path shown next to the text. Empty means no icon.
    pub fn icon(mut self, path: impl Into<String>) -> Self {
        self.icon = path.into();
        self
    }

    pub fn on_click<F>(mut self, f: F) -> Self
    where
        F: FnOnce(&A, &mut A::Tx) + Send + 'static,
    {
        self.on_click = Some(Box::new(f));
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn icon_path(&self) -> Option<&str> {
        if self.icon.is_empty() {
            None
        } else {
            Some(&self.icon)
        }
    }
}

impl<A: Actor> Debug for MenuButton<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MenuButton")
            .field("text", &self.text)
            .field("icon", &self.icon)
            .field("on_click", &self.on_click.is_some())
            .finish()
    }
}

/// Menu of buttons. The actor answers with the index of the clicked button.
pub struct MenuForm<A: Actor> {
    title: String,
    body: String,
    buttons: Vec<MenuButton<A>>,
    on_close: Option<Action<A>>,
}

impl<A: Actor> MenuForm<A> {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> MenuForm<A> {
        MenuForm {
            title: title.into(),
            body: body.into(),
            buttons: vec![],
            on_close: None,
        }
    }

    pub fn push(mut self, button: MenuButton<A>) -> Self {
        self.buttons.push(button);
        self
    }

    pub fn button<F>(self, text: impl Into<String>, f: F) -> Self
    where
        F: FnOnce(&A, &mut A::Tx) + Send + 'static,
    {
        self.push(MenuButton::new(text).on_click(f))
    }

    pub fn button_with_icon<F>(
        self,
        text: impl Into<String>,
        icon: impl Into<String>,
        f: F,
    ) -> Self
    where
        F: FnOnce(&A, &mut A::Tx) + Send + 'static,
    {
        self.push(MenuButton::new(text).icon(icon).on_click(f))
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

    pub fn buttons(&self) -> &[MenuButton<A>] {
        &self.buttons
    }

    pub fn send(self, actor: &A) -> Result<(), FormError> {
        actor.send_form(Box::new(self))
    }
}

impl<A: Actor> Form<A> for MenuForm<A> {
    fn kind(&self) -> FormKind {
        FormKind::Menu
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn encode(&self) -> WireForm<'_> {
        WireForm::Menu {
            title: &self.title,
            content: &self.body,
            buttons: self
                .buttons
                .iter()
                .map(|btn| WireButton::new(&btn.text, &btn.icon))
                .collect(),
        }
    }

    fn submit(
        self: Box<Self>,
        actor: &A,
        tx: &mut A::Tx,
        data: &[u8],
    ) -> Result<Outcome, FormError> {
        let idx = match decode::menu(data)? {
            Some(idx) => idx,
            None => {
                self.close(actor, tx);
                return Ok(Outcome::Closed);
            }
        };

        let MenuForm { title, buttons, .. } = *self;
        let pos = match usize::try_from(idx) {
            Ok(pos) if pos < buttons.len() => pos,
            _ => {
                debug!("Menu {}: button {} is out of range", title, idx);
                return Ok(Outcome::OutOfRange(idx));
            }
        };

        match buttons.into_iter().nth(pos).and_then(|btn| btn.on_click) {
            Some(on_click) => on_click(actor, tx),
            None => debug!("Menu {}: button {} has no callback", title, pos),
        }
        Ok(Outcome::Button(pos))
    }

    fn close(self: Box<Self>, actor: &A, tx: &mut A::Tx) {
        if let Some(on_close) = self.on_close {
            on_close(actor, tx);
        }
    }
}

impl<A: Actor> Debug for MenuForm<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MenuForm")
            .field("title", &self.title)
            .field("body", &self.body)
            .field("buttons", &self.buttons)
            .finish()
    }
}
