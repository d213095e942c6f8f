//! Terminal shell for the practice core.
//!
//! The app only ever draws the latest snapshot from [`Core::subscribe`] and
//! turns key presses into at most one [`Event`]. Prompt buffers, selections
//! and exercise checkboxes stay in here and are never sent to the core.

mod exercises;
mod input;
mod sessions;
mod settings;

use anyhow::Result;
use crossterm::event::{
    self, Event as TermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
};
use etude::{Core, Event, ViewModel};
use exercises::ExercisesTab;
use input::{Prompt, PromptKind};
use log::debug;
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Tabs},
};
use sessions::SessionsTab;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Exercises,
    Sessions,
    Settings,
}

impl Tab {
    const ALL: [Tab; 3] = [Tab::Exercises, Tab::Sessions, Tab::Settings];

    fn index(self) -> usize {
        match self {
            Tab::Exercises => 0,
            Tab::Sessions => 1,
            Tab::Settings => 2,
        }
    }

    fn title(self) -> &'static str {
        match self {
            Tab::Exercises => "Exercises",
            Tab::Sessions => "Sessions",
            Tab::Settings => "Settings",
        }
    }

    fn next(self) -> Self {
        Tab::ALL[(self.index() + 1) % Tab::ALL.len()]
    }

    fn previous(self) -> Self {
        Tab::ALL[(self.index() + Tab::ALL.len() - 1) % Tab::ALL.len()]
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum Action {
    None,
    Quit,
    Dispatch(Event),
}

const STATUS_HELP: &str = "n: new | space: tick | Enter: open | Tab: switch | q: quit";

pub struct App {
    tab: Tab,
    exercises: ExercisesTab,
    sessions: SessionsTab,
    prompt: Option<Prompt>,
    status_message: String,
}

impl App {
    pub fn new() -> Self {
        Self {
            tab: Tab::Exercises,
            exercises: ExercisesTab::default(),
            sessions: SessionsTab::default(),
            prompt: None,
            status_message: STATUS_HELP.to_string(),
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent, view: &ViewModel) -> Action {
        if self.prompt.is_some() {
            return self.handle_prompt_key(key);
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => return Action::Quit,
            KeyCode::Tab => self.switch_tab(self.tab.next()),
            KeyCode::BackTab => self.switch_tab(self.tab.previous()),
            KeyCode::Char('1') => self.switch_tab(Tab::Exercises),
            KeyCode::Char('2') => self.switch_tab(Tab::Sessions),
            KeyCode::Char('3') => self.switch_tab(Tab::Settings),
            KeyCode::Char('j') | KeyCode::Down => match self.tab {
                Tab::Exercises => self.exercises.scroll_down(view.exercises.len()),
                Tab::Sessions => self.sessions.scroll_down(view),
                Tab::Settings => {}
            },
            KeyCode::Char('k') | KeyCode::Up => match self.tab {
                Tab::Exercises => self.exercises.scroll_up(),
                Tab::Sessions => self.sessions.scroll_up(),
                Tab::Settings => {}
            },
            KeyCode::Char(' ') if self.tab == Tab::Exercises => {
                self.exercises.toggle_selected(view);
            }
            KeyCode::Char('n') | KeyCode::Char('N') => match self.tab {
                Tab::Exercises => self.open_prompt(PromptKind::Exercise),
                Tab::Sessions if self.sessions.detail().is_none() => {
                    self.open_prompt(PromptKind::Session)
                }
                _ => {}
            },
            KeyCode::Enter if self.tab == Tab::Sessions => {
                if self.sessions.detail().is_none() {
                    self.sessions.open_selected(view);
                } else if let Some(event) = self.sessions.add_selected_exercise(view) {
                    self.status_message = "Adding exercise to session".to_string();
                    return Action::Dispatch(event);
                } else if !view.exercises.is_empty() {
                    self.status_message = "Already in this session".to_string();
                }
            }
            KeyCode::Esc if self.tab == Tab::Sessions => self.sessions.close_detail(),
            _ => {}
        }
        Action::None
    }

    fn handle_prompt_key(&mut self, key: KeyEvent) -> Action {
        let Some(prompt) = self.prompt.as_mut() else {
            return Action::None;
        };

        match key.code {
            KeyCode::Enter => match prompt.input.submit() {
                Some(name) => {
                    let event = prompt.kind.event(name.clone());
                    self.prompt = None;
                    self.status_message = format!("Submitted: {}", name);
                    return Action::Dispatch(event);
                }
                None => {
                    self.status_message = "Name cannot be empty".to_string();
                }
            },
            KeyCode::Esc => {
                self.prompt = None;
                self.status_message = STATUS_HELP.to_string();
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                prompt.input.push(c)
            }
            KeyCode::Backspace => prompt.input.pop(),
            _ => {}
        }
        Action::None
    }

    fn switch_tab(&mut self, tab: Tab) {
        self.tab = tab;
    }

    fn open_prompt(&mut self, kind: PromptKind) {
        self.prompt = Some(Prompt::new(kind));
        self.status_message = "Type a name, Enter to add, Esc to cancel".to_string();
    }

    pub fn render(&mut self, frame: &mut Frame, view: &ViewModel) {
        let chunks = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(3),
        ])
        .split(frame.area());

        let tabs = Tabs::new(Tab::ALL.iter().map(|t| t.title()))
            .select(self.tab.index())
            .highlight_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .block(Block::default().borders(Borders::ALL).title("Etude"));
        frame.render_widget(tabs, chunks[0]);

        match &self.prompt {
            Some(prompt) => {
                let input_widget = Paragraph::new(prompt.input.as_str())
                    .style(Style::default().fg(Color::Yellow))
                    .block(
                        Block::default()
                            .borders(Borders::ALL)
                            .title(prompt.kind.title()),
                    );
                frame.render_widget(input_widget, chunks[1]);
            }
            None => match self.tab {
                Tab::Exercises => self.exercises.render(frame, chunks[1], view),
                Tab::Sessions => self.sessions.render(frame, chunks[1], view),
                Tab::Settings => settings::render(frame, chunks[1], view),
            },
        }

        let footer = Paragraph::new(self.status_message.as_str())
            .style(Style::default().fg(Color::White))
            .block(Block::default().borders(Borders::ALL).title("Status"));
        frame.render_widget(footer, chunks[2]);
    }
}

pub fn run(mut terminal: DefaultTerminal, core: &Core) -> Result<()> {
    let mut snapshots = core.subscribe();
    let mut app = App::new();

    loop {
        let view = snapshots.borrow_and_update().clone();
        terminal.draw(|frame| app.render(frame, &view))?;

        if let TermEvent::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match app.handle_key(key, &view) {
                Action::Quit => return Ok(()),
                Action::Dispatch(event) => {
                    debug!("dispatching {:?}", event);
                    core.update(event);
                }
                Action::None => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(app: &mut App, view: &ViewModel, text: &str) {
        for c in text.chars() {
            assert_eq!(app.handle_key(press(KeyCode::Char(c)), view), Action::None);
        }
    }

    fn screen(app: &mut App, view: &ViewModel) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|f| app.render(f, view)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn prompt_submission_emits_one_event_and_closes() {
        let view = ViewModel::default();
        let mut app = App::new();

        app.handle_key(press(KeyCode::Char('n')), &view);
        type_text(&mut app, &view, " C Major ");
        let action = app.handle_key(press(KeyCode::Enter), &view);

        assert_eq!(
            action,
            Action::Dispatch(Event::AddExercise {
                name: "C Major".into()
            })
        );
        assert!(app.prompt.is_none());
    }

    #[test]
    fn blank_prompt_emits_nothing() {
        let view = ViewModel::default();
        let mut app = App::new();

        app.handle_key(press(KeyCode::Char('2')), &view);
        app.handle_key(press(KeyCode::Char('n')), &view);
        type_text(&mut app, &view, "  ");

        assert_eq!(app.handle_key(press(KeyCode::Enter), &view), Action::None);
        assert!(app.prompt.is_some());
    }

    #[test]
    fn typing_q_in_prompt_does_not_quit() {
        let view = ViewModel::default();
        let mut app = App::new();

        app.handle_key(press(KeyCode::Char('n')), &view);
        assert_eq!(app.handle_key(press(KeyCode::Char('q')), &view), Action::None);
        app.handle_key(press(KeyCode::Esc), &view);
        assert_eq!(app.handle_key(press(KeyCode::Char('q')), &view), Action::Quit);
    }

    #[test]
    fn tabs_cycle_both_ways() {
        assert_eq!(Tab::Settings.next(), Tab::Exercises);
        assert_eq!(Tab::Exercises.previous(), Tab::Settings);
    }

    #[test]
    fn checkbox_stays_out_of_the_core() {
        let core = Core::new();
        core.update(Event::DevInit);
        let view = core.view();
        let mut app = App::new();

        assert_eq!(app.handle_key(press(KeyCode::Char(' ')), &view), Action::None);
        assert!(app.exercises.is_checked(0));
        assert_eq!(core.view(), view);
    }

    #[test]
    fn renders_latest_snapshot() {
        let core = Core::new();
        let mut app = App::new();

        let text = screen(&mut app, &core.view());
        assert!(text.contains("No exercises yet"));

        core.update(Event::AddExercise {
            name: "C Major".into(),
        });
        let text = screen(&mut app, &core.view());
        assert!(text.contains("[ ] C Major"));
        assert!(text.contains("Exercises (0/1 done)"));
    }

    #[test]
    fn session_detail_adds_exercise_through_the_core() {
        let core = Core::new();
        core.update(Event::AddExercise {
            name: "C Major".into(),
        });
        core.update(Event::AddSession {
            name: "Monday".into(),
        });
        let mut app = App::new();
        let view = core.view();

        app.handle_key(press(KeyCode::Tab), &view);
        app.handle_key(press(KeyCode::Enter), &view);
        if let Action::Dispatch(event) = app.handle_key(press(KeyCode::Enter), &view) {
            core.update(event);
        }

        let view = core.view();
        assert_eq!(view.sessions[0].exercises[0].name, "C Major");
        let text = screen(&mut app, &view);
        assert!(text.contains("Monday (1 of 1 exercises)"));
        assert!(text.contains("• C Major"));
    }

    #[test]
    fn enter_on_exercise_already_in_session_dispatches_nothing() {
        let core = Core::new();
        core.update(Event::DevInit);
        let view = core.view();
        let mut app = App::new();

        app.handle_key(press(KeyCode::Tab), &view);
        app.handle_key(press(KeyCode::Enter), &view);

        assert_eq!(app.handle_key(press(KeyCode::Enter), &view), Action::None);
        assert_eq!(app.status_message, "Already in this session");
    }

    #[test]
    fn control_chars_are_not_typed_into_prompt() {
        let view = ViewModel::default();
        let mut app = App::new();

        app.handle_key(press(KeyCode::Char('n')), &view);
        type_text(&mut app, &view, "Monday");
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL), &view);

        assert_eq!(app.prompt.as_ref().unwrap().input.as_str(), "Monday");
    }
}
