use crate::error::RejectedEvent;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Default, Debug, PartialEq, Eq)]
pub struct Session {
    pub id: u32,
    pub name: String,
    /// Exercises practised in this session, in the order they were added.
    pub exercise_ids: Vec<u32>,
}

impl Session {
    pub fn has_exercise(&self, exercise_id: u32) -> bool {
        self.exercise_ids.contains(&exercise_id)
    }
}

#[derive(Serialize, Deserialize, Clone, Default, Debug, PartialEq, Eq)]
pub struct Sessions {
    value: Vec<Session>,
    next_id: u32,
}

impl Sessions {
    pub fn add_session(&mut self, name: String) -> Result<u32, RejectedEvent> {
        let id = self.next_id;
        self.next_id = id.checked_add(1).ok_or(RejectedEvent::IdsExhausted)?;
        self.value.push(Session {
            id,
            name,
            exercise_ids: Vec::new(),
        });
        Ok(id)
    }

    pub fn get(&self, id: u32) -> Option<&Session> {
        self.value.iter().find(|s| s.id == id)
    }

    pub fn get_mut(&mut self, id: u32) -> Option<&mut Session> {
        self.value.iter_mut().find(|s| s.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Session> {
        self.value.iter()
    }

    pub fn len(&self) -> usize {
        self.value.len()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_sessions_start_without_exercises() {
        let mut sessions = Sessions::default();
        let id = sessions.add_session("Monday".into()).unwrap();

        let session = sessions.get(id).unwrap();
        assert_eq!(session.name, "Monday");
        assert!(session.exercise_ids.is_empty());
    }

    #[test]
    fn ids_are_not_reused() {
        let mut sessions = Sessions::default();
        let ids: Vec<_> = ["Mon", "Tue", "Wed"]
            .into_iter()
            .map(|n| sessions.add_session(n.into()).unwrap())
            .collect();

        assert_eq!(ids, [0, 1, 2]);
        assert_eq!(sessions.len(), 3);
    }

    #[test]
    fn exhausted_counter_rejects_new_sessions() {
        let mut sessions: Sessions =
            serde_json::from_str(r#"{"value":[],"next_id":4294967295}"#).unwrap();

        assert_eq!(
            sessions.add_session("Monday".into()),
            Err(RejectedEvent::IdsExhausted)
        );
        assert!(sessions.is_empty());
    }
}
