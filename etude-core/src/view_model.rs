use crate::model::{Exercise, Model};
use serde::{Deserialize, Serialize};

/// Immutable snapshot handed to shells for rendering.
#[derive(Serialize, Deserialize, Clone, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct ViewModel {
    pub exercises: Vec<ExerciseView>,
    pub sessions: Vec<SessionView>,
}

#[derive(Serialize, Deserialize, Clone, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct ExerciseView {
    pub id: u32,
    pub name: String,
}

#[derive(Serialize, Deserialize, Clone, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct SessionView {
    pub id: u32,
    pub name: String,
    pub exercises: Vec<ExerciseView>,
}

impl ViewModel {
    pub fn session(&self, id: u32) -> Option<&SessionView> {
        self.sessions.iter().find(|s| s.id == id)
    }
}

impl SessionView {
    pub fn has_exercise(&self, exercise_id: u32) -> bool {
        self.exercises.iter().any(|e| e.id == exercise_id)
    }
}

impl From<&Exercise> for ExerciseView {
    fn from(e: &Exercise) -> Self {
        ExerciseView {
            id: e.id,
            name: e.name.clone(),
        }
    }
}

impl From<&Model> for ViewModel {
    fn from(model: &Model) -> Self {
        let sessions = model
            .sessions
            .iter()
            .map(|s| SessionView {
                id: s.id,
                name: s.name.clone(),
                exercises: s
                    .exercise_ids
                    .iter()
                    .filter_map(|id| model.exercises.get(*id))
                    .map(ExerciseView::from)
                    .collect(),
            })
            .collect();

        ViewModel {
            exercises: model.exercises.iter().map(ExerciseView::from).collect(),
            sessions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Event;
    use pretty_assertions::assert_eq;

    #[test]
    fn session_references_resolve_in_association_order() {
        let mut model = Model::default();
        for name in ["C Major", "G Major"] {
            model.apply(Event::AddExercise { name: name.into() }).unwrap();
        }
        model.apply(Event::AddSession { name: "Monday".into() }).unwrap();
        for exercise_id in [1, 0] {
            model
                .apply(Event::AddExerciseToSession {
                    session_id: 0,
                    exercise_id,
                })
                .unwrap();
        }

        let view = ViewModel::from(&model);
        let monday = view.session(0).unwrap();
        let names: Vec<_> = monday.exercises.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["G Major", "C Major"]);
        assert!(monday.has_exercise(0));
    }

    #[test]
    fn snapshot_json_shape() {
        let mut model = Model::default();
        model.apply(Event::AddExercise { name: "C Major".into() }).unwrap();
        model.apply(Event::AddSession { name: "Monday".into() }).unwrap();

        let json = serde_json::to_value(ViewModel::from(&model)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "exercises": [{ "id": 0, "name": "C Major" }],
                "sessions": [{ "id": 0, "name": "Monday", "exercises": [] }],
            })
        );
    }
}
