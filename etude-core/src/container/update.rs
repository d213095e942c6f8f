use crate::container::{Core, Published};
use crate::event::{Effect, Event};
use crate::view_model::ViewModel;
use log::{debug, warn};
use std::sync::{Arc, PoisonError};

impl Core {
    /// Applies one event.
    ///
    /// Returns `[Effect::Render]` when the state changed and nothing when the
    /// event was rejected.
    pub fn update(&self, event: Event) -> Vec<Effect> {
        match self.publish(event) {
            Some(_) => vec![Effect::Render],
            None => vec![],
        }
    }

    /// Applies one event and returns the snapshot it published, or `None`
    /// when the event was rejected.
    ///
    /// The snapshot is built and published in a single replace while the
    /// model lock is still held, so readers never see a partial update and
    /// revisions follow event order.
    pub fn publish(&self, event: Event) -> Option<Published> {
        debug!("event: {:?}", event);

        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        if let Err(reason) = state.model.apply(event) {
            warn!("ignoring event: {}", reason);
            return None;
        }

        state.revision += 1;
        let view = Arc::new(ViewModel::from(&state.model));
        self.snapshot.send_replace(view.clone());
        debug!(
            "published revision {}: {} exercises, {} sessions",
            state.revision,
            state.model.exercises.len(),
            state.model.sessions.len()
        );

        Some(Published {
            revision: state.revision,
            view,
        })
    }
}
