//! The core state container.
//!
//! `Core` is the only owner of the [`Model`]. Shells hand it events through
//! [`Core::update`] and read back immutable [`ViewModel`] snapshots.

mod update;

use crate::model::Model;
use crate::view_model::ViewModel;
use std::sync::{Arc, Mutex};
use tokio::sync::watch;

struct State {
    model: Model,
    revision: u64,
}

/// A snapshot together with the revision it was published at.
///
/// Revisions grow by one per successful update, in publish order.
#[derive(Debug, Clone)]
pub struct Published {
    pub revision: u64,
    pub view: Arc<ViewModel>,
}

pub struct Core {
    state: Mutex<State>,
    snapshot: watch::Sender<Arc<ViewModel>>,
}

impl Core {
    pub fn new() -> Self {
        let model = Model::default();
        let (snapshot, _) = watch::channel(Arc::new(ViewModel::from(&model)));
        Self {
            state: Mutex::new(State { model, revision: 0 }),
            snapshot,
        }
    }

    /// Latest published snapshot.
    pub fn view(&self) -> Arc<ViewModel> {
        self.snapshot.borrow().clone()
    }

    /// Receiver that is marked changed every time an update is published.
    pub fn subscribe(&self) -> watch::Receiver<Arc<ViewModel>> {
        self.snapshot.subscribe()
    }
}

impl Default for Core {
    fn default() -> Self {
        Self::new()
    }
}
