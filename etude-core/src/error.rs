use thiserror::Error;

/// Reason an event left the model untouched.
///
/// These never reach the shell; the core logs them and publishes nothing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RejectedEvent {
    #[error("name is empty")]
    EmptyName,
    #[error("no exercise with id {0}")]
    UnknownExercise(u32),
    #[error("no session with id {0}")]
    UnknownSession(u32),
    #[error("exercise {exercise_id} is already part of session {session_id}")]
    AlreadyInSession { session_id: u32, exercise_id: u32 },
    #[error("no ids left to allocate")]
    IdsExhausted,
}
