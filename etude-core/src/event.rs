use serde::{Deserialize, Serialize};

/// Everything a shell can ask the core to do.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
pub enum Event {
    /// Replace the current state with the development seed data.
    DevInit,
    AddExercise {
        name: String,
    },
    AddSession {
        name: String,
    },
    AddExerciseToSession {
        session_id: u32,
        exercise_id: u32,
    },
}

/// Work the core asks the shell to perform after an update.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
pub enum Effect {
    /// A new snapshot is available; re-read `view` and redraw.
    Render,
}
