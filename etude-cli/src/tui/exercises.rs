use etude::ViewModel;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use std::collections::HashSet;

/// Exercise list with completion checkboxes.
///
/// Checkbox state belongs to this tab only; the core never hears about it.
#[derive(Debug, Default)]
pub struct ExercisesTab {
    selected: usize,
    checked: HashSet<u32>,
}

impl ExercisesTab {
    pub fn scroll_down(&mut self, len: usize) {
        if len > 0 && self.selected < len - 1 {
            self.selected += 1;
        }
    }

    pub fn scroll_up(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    pub fn toggle_selected(&mut self, view: &ViewModel) {
        let Some(exercise) = view.exercises.get(self.selected) else {
            return;
        };
        if !self.checked.remove(&exercise.id) {
            self.checked.insert(exercise.id);
        }
    }

    pub fn is_checked(&self, exercise_id: u32) -> bool {
        self.checked.contains(&exercise_id)
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, view: &ViewModel) {
        if view.exercises.is_empty() {
            let empty_msg = Paragraph::new("No exercises yet.\nPress 'n' to add your first one!")
                .style(Style::default().fg(Color::Gray))
                .block(Block::default().borders(Borders::ALL).title("Exercises"));
            frame.render_widget(empty_msg, area);
            return;
        }

        self.selected = self.selected.min(view.exercises.len() - 1);

        let items: Vec<ListItem> = view
            .exercises
            .iter()
            .enumerate()
            .map(|(idx, exercise)| {
                let checkbox = if self.is_checked(exercise.id) {
                    "[x]"
                } else {
                    "[ ]"
                };
                let style = if idx == self.selected {
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Cyan)
                        .add_modifier(Modifier::BOLD)
                } else if self.is_checked(exercise.id) {
                    Style::default().fg(Color::Blue)
                } else {
                    Style::default()
                };
                ListItem::new(format!("{} {}", checkbox, exercise.name)).style(style)
            })
            .collect();

        let done = view
            .exercises
            .iter()
            .filter(|e| self.is_checked(e.id))
            .count();
        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Exercises ({}/{} done)", done, view.exercises.len())),
        );

        let mut list_state = ListState::default();
        list_state.select(Some(self.selected));
        frame.render_stateful_widget(list, area, &mut list_state);
    }
}
