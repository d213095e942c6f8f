use etude::ViewModel;
use ratatui::{
    Frame,
    layout::Rect,
    widgets::{Block, Borders, Paragraph},
};

const KEY_BINDINGS: &[&str] = &[
    "Tab / Shift-Tab / 1-3   switch tab",
    "j / k                   move selection",
    "n                       new exercise or session",
    "space                   tick exercise (Exercises)",
    "Enter                   open session / add exercise to session",
    "Esc                     close prompt or session detail",
    "q                       quit",
];

pub fn render(frame: &mut Frame, area: Rect, view: &ViewModel) {
    let mut lines = vec![
        format!("Exercises: {}", view.exercises.len()),
        format!("Sessions:  {}", view.sessions.len()),
        String::new(),
        "Keys:".to_string(),
    ];
    lines.extend(KEY_BINDINGS.iter().map(|k| format!("  {}", k)));

    let settings = Paragraph::new(lines.join("\n"))
        .block(Block::default().borders(Borders::ALL).title("Settings"));
    frame.render_widget(settings, area);
}
