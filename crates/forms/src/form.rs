use std::fmt::Debug;

use serde_json::Value;
use strum::{Display, IntoStaticStr};

use crate::{err::FormError, modal::ModalChoice, wire::WireForm};

/// The remote party a form is shown to.
///
/// Implemented by the transport layer. `Tx` is the execution context the
/// transport hands back alongside a response; forms pass it through to the
/// callbacks untouched.
pub trait Actor: Sized + 'static {
    type Tx;

    fn send_form(&self, form: PendingForm<Self>) -> Result<(), FormError>;
}

/// Callback bound to a button or to the close path.
pub type Action<A> = Box<dyn FnOnce(&A, &mut <A as Actor>::Tx) + Send + 'static>;

/// A form handed to the transport and waiting for the actor's answer.
pub type PendingForm<A> = Box<dyn Form<A>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, IntoStaticStr)]
pub enum FormKind {
    #[strum(serialize = "form")]
    Menu,
    #[strum(serialize = "custom_form")]
    Custom,
    #[strum(serialize = "modal")]
    Modal,
}

/// Dispatch path taken for a decoded response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Closed,
    Button(usize),
    OutOfRange(i64),
    Submitted,
    Modal(ModalChoice),
}

pub trait Form<A: Actor>: Send {
    fn kind(&self) -> FormKind;

    fn title(&self) -> &str;

    /// Wire representation understood by the form-rendering client.
    fn encode(&self) -> WireForm<'_>;

    /// Decodes the raw response and invokes at most one bound callback.
    ///
    /// Empty data or `null` means the actor closed the form.
    fn submit(
        self: Box<Self>,
        actor: &A,
        tx: &mut A::Tx,
        data: &[u8],
    ) -> Result<Outcome, FormError>;

    /// Runs the close callback, if any, without a payload.
    fn close(self: Box<Self>, actor: &A, tx: &mut A::Tx);

    fn to_json(&self) -> Result<Value, FormError> {
        serde_json::to_value(self.encode()).map_err(|source| FormError::Encode {
            kind: self.kind(),
            source,
        })
    }

    fn to_bytes(&self) -> Result<Vec<u8>, FormError> {
        serde_json::to_vec(&self.encode()).map_err(|source| FormError::Encode {
            kind: self.kind(),
            source,
        })
    }
}

impl<A: Actor> Debug for dyn Form<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}[{}]", self.kind(), self.title())
    }
}
