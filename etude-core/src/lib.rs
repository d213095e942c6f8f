pub mod container;
pub mod error;
pub mod event;
pub mod logging;
pub mod model;
pub mod view_model;

pub use container::Core;
pub use event::{Effect, Event};
pub use view_model::{ExerciseView, SessionView, ViewModel};

#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();
#[cfg(feature = "uniffi")]
pub mod uniffi_interface;
