use super::Model;
use crate::error::RejectedEvent;

pub const MAJOR_SCALES: [&str; 12] = [
    "C Major",
    "G Major",
    "D Major",
    "A Major",
    "E Major",
    "B Major",
    "F# Major / Gb Major",
    "C# Major / Db Major",
    "G# Major / Ab Major",
    "D# Major / Eb Major",
    "A# Major / Bb Major",
    "F Major",
];

pub const MINOR_SCALES: [&str; 12] = [
    "A Minor",
    "E Minor",
    "B Minor",
    "F# Minor / Gb Minor",
    "C# Minor / Db Minor",
    "G# Minor / Ab Minor",
    "D# Minor / Eb Minor",
    "A# Minor / Bb Minor",
    "F Minor",
    "C Minor",
    "G Minor",
    "D Minor",
];

/// Builds the development data set: every major and minor scale, grouped
/// into one session per scale family.
pub fn seed() -> Result<Model, RejectedEvent> {
    let mut model = Model::default();

    for (session_name, scales) in [("Major scales", MAJOR_SCALES), ("Minor scales", MINOR_SCALES)] {
        let exercise_ids: Vec<u32> = scales
            .iter()
            .map(|name| model.exercises.add_exercise(name.to_string()))
            .collect::<Result<_, _>>()?;

        let session_id = model.sessions.add_session(session_name.to_string())?;
        if let Some(session) = model.sessions.get_mut(session_id) {
            session.exercise_ids = exercise_ids;
        }
    }

    Ok(model)
}
