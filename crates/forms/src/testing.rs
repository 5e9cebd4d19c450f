use parking_lot::Mutex;

use crate::{
    err::FormError,
    form::{Actor, PendingForm},
};

/// Actor that keeps every form it is shown. Its context records callbacks.
#[derive(Default)]
pub(crate) struct Player {
    pub shown: Mutex<Vec<PendingForm<Player>>>,
}

impl Player {
    pub fn take_shown(&self) -> Vec<PendingForm<Player>> {
        std::mem::take(&mut *self.shown.lock())
    }
}

impl Actor for Player {
    type Tx = Vec<String>;

    fn send_form(&self, form: PendingForm<Self>) -> Result<(), FormError> {
        self.shown.lock().push(form);
        Ok(())
    }
}

pub(crate) fn record(name: &str) -> impl FnOnce(&Player, &mut Vec<String>) + Send + 'static {
    let name = name.to_string();
    move |_, tx| tx.push(name)
}
