use crate::error::RejectedEvent;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Default, Debug, PartialEq, Eq)]
pub struct Exercise {
    pub id: u32,
    pub name: String,
}

/// Ordered, append-only list of exercises.
///
/// Ids come from `next_id`, which only ever grows, so an id is never handed
/// out twice for the lifetime of the collection.
#[derive(Serialize, Deserialize, Clone, Default, Debug, PartialEq, Eq)]
pub struct Exercises {
    value: Vec<Exercise>,
    next_id: u32,
}

impl Exercises {
    pub fn add_exercise(&mut self, name: String) -> Result<u32, RejectedEvent> {
        let id = self.next_id;
        self.next_id = id.checked_add(1).ok_or(RejectedEvent::IdsExhausted)?;
        self.value.push(Exercise { id, name });
        Ok(id)
    }

    pub fn get(&self, id: u32) -> Option<&Exercise> {
        self.value.iter().find(|e| e.id == id)
    }

    pub fn contains(&self, id: u32) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Exercise> {
        self.value.iter()
    }

    pub fn len(&self) -> usize {
        self.value.len()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}
