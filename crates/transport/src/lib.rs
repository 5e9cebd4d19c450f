use std::{collections::HashMap, sync::Arc};

use eyre::eyre;
use forms::{Actor, FormError, FormKind, Outcome, PendingForm};
use log::{debug, info, warn};
use parking_lot::Mutex;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};

pub type ActorId = u64;

/// Encoded form addressed to an actor.
#[derive(Debug, Clone)]
pub struct Envelope {
    pub actor: ActorId,
    pub kind: FormKind,
    pub payload: Vec<u8>,
}

/// In-memory transport keeping at most one outstanding form per actor.
///
/// Showing a form while another one is pending drops the older form without
/// dispatching it: its answer can no longer arrive.
pub struct FormHub<A: Actor> {
    pending: Arc<Mutex<HashMap<ActorId, PendingForm<A>>>>,
    outbox: UnboundedSender<Envelope>,
}

impl<A: Actor> Clone for FormHub<A> {
    fn clone(&self) -> Self {
        FormHub {
            pending: self.pending.clone(),
            outbox: self.outbox.clone(),
        }
    }
}

impl<A: Actor> FormHub<A> {
    pub fn new() -> (FormHub<A>, UnboundedReceiver<Envelope>) {
        let (outbox, rx) = unbounded_channel();
        let hub = FormHub {
            pending: Default::default(),
            outbox,
        };
        (hub, rx)
    }

    pub fn show(&self, actor: ActorId, form: PendingForm<A>) -> Result<(), FormError> {
        let envelope = Envelope {
            actor,
            kind: form.kind(),
            payload: form.to_bytes()?,
        };
        info!("Showing {:?} to actor {}", form, actor);

        if let Some(prev) = self.pending.lock().insert(actor, form) {
            warn!("Actor {}: dropping unanswered {:?}", actor, prev);
        }
        if self.outbox.send(envelope).is_err() {
            self.pending.lock().remove(&actor);
            return Err(eyre!("Outbox for actor {} is closed", actor).into());
        }
        Ok(())
    }

    /// Routes a raw response to the actor's outstanding form.
    ///
    /// Returns `Ok(None)` if nothing was pending.
    pub fn deliver(
        &self,
        id: ActorId,
        actor: &A,
        tx: &mut A::Tx,
        data: &[u8],
    ) -> Result<Option<Outcome>, FormError> {
        let form = self.pending.lock().remove(&id);
        let form = if let Some(form) = form {
            form
        } else {
            debug!("Actor {}: response without a pending form", id);
            return Ok(None);
        };

        let outcome = form.submit(actor, tx, data)?;
        debug!("Actor {}: {:?}", id, outcome);
        Ok(Some(outcome))
    }

    /// Closes the outstanding form of a departing actor.
    pub fn disconnect(&self, id: ActorId, actor: &A, tx: &mut A::Tx) -> bool {
        let form = self.pending.lock().remove(&id);
        match form {
            Some(form) => {
                info!("Actor {} disconnected, closing {:?}", id, form);
                form.close(actor, tx);
                true
            }
            None => false,
        }
    }

    pub fn is_pending(&self, id: ActorId) -> bool {
        self.pending.lock().contains_key(&id)
    }
}
