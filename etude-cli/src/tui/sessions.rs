use etude::{Event, ViewModel};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

fn highlight() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

/// Session detail: every known exercise, marked when it belongs to the session.
#[derive(Debug)]
pub struct SessionDetail {
    pub session_id: u32,
    selected: usize,
}

#[derive(Debug, Default)]
pub struct SessionsTab {
    selected: usize,
    detail: Option<SessionDetail>,
}

impl SessionsTab {
    pub fn detail(&self) -> Option<&SessionDetail> {
        self.detail.as_ref()
    }

    pub fn scroll_down(&mut self, view: &ViewModel) {
        let (selected, len) = match &mut self.detail {
            Some(detail) => (&mut detail.selected, view.exercises.len()),
            None => (&mut self.selected, view.sessions.len()),
        };
        if len > 0 && *selected < len - 1 {
            *selected += 1;
        }
    }

    pub fn scroll_up(&mut self) {
        let selected = match &mut self.detail {
            Some(detail) => &mut detail.selected,
            None => &mut self.selected,
        };
        if *selected > 0 {
            *selected -= 1;
        }
    }

    pub fn open_selected(&mut self, view: &ViewModel) {
        if let Some(session) = view.sessions.get(self.selected) {
            self.detail = Some(SessionDetail {
                session_id: session.id,
                selected: 0,
            });
        }
    }

    pub fn close_detail(&mut self) {
        self.detail = None;
    }

    /// Event that adds the highlighted exercise to the open session. Nothing
    /// when no exercise is highlighted or it is already in the session.
    pub fn add_selected_exercise(&self, view: &ViewModel) -> Option<Event> {
        let detail = self.detail.as_ref()?;
        let exercise = view.exercises.get(detail.selected)?;
        if view
            .session(detail.session_id)
            .is_some_and(|s| s.has_exercise(exercise.id))
        {
            return None;
        }
        Some(Event::AddExerciseToSession {
            session_id: detail.session_id,
            exercise_id: exercise.id,
        })
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, view: &ViewModel) {
        match &mut self.detail {
            Some(detail) => render_detail(detail, frame, area, view),
            None => {
                if view.sessions.is_empty() {
                    let empty_msg =
                        Paragraph::new("No sessions yet.\nPress 'n' to plan your first session!")
                            .style(Style::default().fg(Color::Gray))
                            .block(Block::default().borders(Borders::ALL).title("Sessions"));
                    frame.render_widget(empty_msg, area);
                    return;
                }

                self.selected = self.selected.min(view.sessions.len() - 1);
                let items: Vec<ListItem> = view
                    .sessions
                    .iter()
                    .enumerate()
                    .map(|(idx, session)| {
                        let content =
                            format!("{} ({} exercises)", session.name, session.exercises.len());
                        let style = if idx == self.selected {
                            highlight()
                        } else {
                            Style::default()
                        };
                        ListItem::new(content).style(style)
                    })
                    .collect();

                let list = List::new(items).block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title(format!("Sessions ({} total)", view.sessions.len())),
                );
                let mut list_state = ListState::default();
                list_state.select(Some(self.selected));
                frame.render_stateful_widget(list, area, &mut list_state);
            }
        }
    }
}

fn render_detail(detail: &mut SessionDetail, frame: &mut Frame, area: Rect, view: &ViewModel) {
    let Some(session) = view.session(detail.session_id) else {
        let missing = Paragraph::new(format!("Session #{} not found", detail.session_id))
            .block(Block::default().borders(Borders::ALL).title("Session"));
        frame.render_widget(missing, area);
        return;
    };

    if view.exercises.is_empty() {
        let empty_msg = Paragraph::new("No exercises to add.\nCreate some in the Exercises tab.")
            .style(Style::default().fg(Color::Gray))
            .block(Block::default().borders(Borders::ALL).title(session.name.as_str()));
        frame.render_widget(empty_msg, area);
        return;
    }

    detail.selected = detail.selected.min(view.exercises.len() - 1);
    let items: Vec<ListItem> = view
        .exercises
        .iter()
        .enumerate()
        .map(|(idx, exercise)| {
            let marker = if session.has_exercise(exercise.id) {
                "•"
            } else {
                " "
            };
            let style = if idx == detail.selected {
                highlight()
            } else {
                Style::default()
            };
            ListItem::new(format!("{} {}", marker, exercise.name)).style(style)
        })
        .collect();

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(format!(
        "{} ({} of {} exercises)",
        session.name,
        session.exercises.len(),
        view.exercises.len()
    )));
    let mut list_state = ListState::default();
    list_state.select(Some(detail.selected));
    frame.render_stateful_widget(list, area, &mut list_state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use etude::Core;

    fn seeded() -> ViewModel {
        let core = Core::new();
        core.update(Event::DevInit);
        core.view().as_ref().clone()
    }

    #[test]
    fn detail_targets_selected_session_and_exercise() {
        let view = seeded();
        let mut tab = SessionsTab::default();

        tab.scroll_down(&view);
        tab.open_selected(&view);
        assert_eq!(tab.detail().map(|d| d.session_id), Some(1));

        tab.scroll_down(&view);
        tab.scroll_down(&view);
        assert_eq!(
            tab.add_selected_exercise(&view),
            Some(Event::AddExerciseToSession {
                session_id: 1,
                exercise_id: 2
            })
        );

        tab.close_detail();
        assert_eq!(tab.add_selected_exercise(&view), None);
    }

    #[test]
    fn open_on_empty_list_does_nothing() {
        let mut tab = SessionsTab::default();
        tab.open_selected(&ViewModel::default());
        assert!(tab.detail().is_none());
    }

    #[test]
    fn exercises_already_in_session_are_not_sent() {
        let view = seeded();
        let mut tab = SessionsTab::default();

        tab.open_selected(&view);
        assert_eq!(tab.add_selected_exercise(&view), None);
    }
}
