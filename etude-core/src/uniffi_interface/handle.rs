use crate::container::{Core, Published};
use crate::event::{Effect, Event};
use crate::view_model::ViewModel;
use log::debug;
use std::sync::{Arc, Mutex, PoisonError};

/// Implemented by the host app to redraw when a new snapshot is published.
///
/// `on_render` runs on the thread that called `update` and must not call
/// back into the same handle before returning.
#[uniffi::export(with_foreign)]
pub trait ViewObserver: Send + Sync {
    fn on_render(&self, view: ViewModel);
}

#[derive(Default)]
struct Delivery {
    revision: u64,
    observers: Vec<Arc<dyn ViewObserver>>,
}

/// FFI wrapper around [`Core`].
///
/// The host app creates one at start-up and keeps it for the lifetime of the
/// UI; nothing in this crate holds a global instance.
#[derive(uniffi::Object)]
pub struct CoreHandle {
    core: Core,
    delivery: Mutex<Delivery>,
}

#[uniffi::export]
impl CoreHandle {
    #[uniffi::constructor]
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            core: Core::new(),
            delivery: Mutex::new(Delivery::default()),
        })
    }

    pub fn update(&self, event: Event) -> Vec<Effect> {
        match self.core.publish(event) {
            Some(published) => {
                self.notify(published);
                vec![Effect::Render]
            }
            None => vec![],
        }
    }

    pub fn view(&self) -> ViewModel {
        self.core.view().as_ref().clone()
    }

    pub fn observe(&self, observer: Arc<dyn ViewObserver>) {
        self.delivery
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .observers
            .push(observer);
    }
}

impl CoreHandle {
    // Observers only ever move forward: a snapshot older than the last one
    // delivered is dropped, so the final notification is the latest publish.
    fn notify(&self, published: Published) {
        let mut delivery = self.delivery.lock().unwrap_or_else(PoisonError::into_inner);
        if published.revision <= delivery.revision {
            debug!(
                "skipping revision {}, already delivered {}",
                published.revision, delivery.revision
            );
            return;
        }
        delivery.revision = published.revision;
        debug!(
            "notifying {} observers of revision {}",
            delivery.observers.len(),
            published.revision
        );

        for observer in &delivery.observers {
            observer.on_render(published.view.as_ref().clone());
        }
    }
}
