use anyhow::{Context, Result};
use etude::{Core, Event, ViewModel};
use log::info;
use std::fs;
use std::path::Path;

pub fn format_view(view: &ViewModel) -> String {
    let mut out = String::new();

    out.push_str(&format!("Exercises ({}):\n", view.exercises.len()));
    for exercise in &view.exercises {
        out.push_str(&format!("  {}, {}\n", exercise.id, exercise.name));
    }

    out.push_str(&format!("Sessions ({}):\n", view.sessions.len()));
    for session in &view.sessions {
        out.push_str(&format!("  {}, {}\n", session.id, session.name));
        for exercise in &session.exercises {
            out.push_str(&format!("\t{}\n", exercise.name));
        }
    }

    out
}

pub fn print_view(view: &ViewModel, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(view)?);
    } else {
        print!("{}", format_view(view));
    }
    Ok(())
}

/// Applies every event in order and returns how many the core ignored.
pub fn apply_all(core: &Core, events: impl IntoIterator<Item = Event>) -> usize {
    events
        .into_iter()
        .map(|event| core.update(event))
        .filter(|effects| effects.is_empty())
        .count()
}

pub fn read_events(path: &Path) -> Result<Vec<Event>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read event log {}", path.display()))?;
    let events: Vec<Event> = serde_json::from_str(&raw)
        .with_context(|| format!("{} is not a JSON array of events", path.display()))?;
    info!("loaded {} events from {}", events.len(), path.display());
    Ok(events)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn apply_all_counts_ignored_events() {
        let core = Core::new();
        let ignored = apply_all(
            &core,
            [
                Event::AddExercise {
                    name: "C Major".into(),
                },
                Event::AddExercise { name: " ".into() },
                Event::AddSession {
                    name: "Monday".into(),
                },
                Event::AddExerciseToSession {
                    session_id: 0,
                    exercise_id: 0,
                },
                Event::AddExerciseToSession {
                    session_id: 0,
                    exercise_id: 0,
                },
            ],
        );

        assert_eq!(ignored, 2);
        assert_eq!(
            format_view(&core.view()),
            "Exercises (1):\n  0, C Major\nSessions (1):\n  0, Monday\n\tC Major\n"
        );
    }

    #[test]
    fn read_events_parses_json_log() {
        let path = std::env::temp_dir().join(format!("etude-events-{}.json", std::process::id()));
        fs::write(
            &path,
            r#"["DevInit", {"AddSession": {"name": "Monday"}}]"#,
        )
        .unwrap();

        let events = read_events(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(
            events,
            [
                Event::DevInit,
                Event::AddSession {
                    name: "Monday".into()
                }
            ]
        );
    }

    #[test]
    fn read_events_reports_missing_file() {
        let err = read_events(Path::new("/nonexistent/etude/events.json")).unwrap_err();
        assert!(err.to_string().contains("failed to read event log"));
    }
}
