//! Durable application state.
//!
//! `Model` is owned by [`crate::Core`] and only changes through
//! [`Model::apply`], one event at a time.

mod dev_data;
mod exercises;
mod sessions;

pub use dev_data::{MAJOR_SCALES, MINOR_SCALES};
pub use exercises::{Exercise, Exercises};
pub use sessions::{Session, Sessions};

use crate::error::RejectedEvent;
use crate::event::Event;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Default, Debug, PartialEq, Eq)]
pub struct Model {
    pub exercises: Exercises,
    pub sessions: Sessions,
}

impl Model {
    pub fn apply(&mut self, event: Event) -> Result<(), RejectedEvent> {
        match event {
            Event::DevInit => {
                *self = dev_data::seed()?;
            }
            Event::AddExercise { name } => {
                let name = normalize_name(&name)?;
                self.exercises.add_exercise(name)?;
            }
            Event::AddSession { name } => {
                let name = normalize_name(&name)?;
                self.sessions.add_session(name)?;
            }
            Event::AddExerciseToSession {
                session_id,
                exercise_id,
            } => {
                if !self.exercises.contains(exercise_id) {
                    return Err(RejectedEvent::UnknownExercise(exercise_id));
                }
                let session = self
                    .sessions
                    .get_mut(session_id)
                    .ok_or(RejectedEvent::UnknownSession(session_id))?;
                if session.has_exercise(exercise_id) {
                    return Err(RejectedEvent::AlreadyInSession {
                        session_id,
                        exercise_id,
                    });
                }
                session.exercise_ids.push(exercise_id);
            }
        }
        Ok(())
    }
}

// Surrounding whitespace is dropped; nothing else about the name is changed.
fn normalize_name(name: &str) -> Result<String, RejectedEvent> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(RejectedEvent::EmptyName);
    }
    Ok(trimmed.to_string())
}
