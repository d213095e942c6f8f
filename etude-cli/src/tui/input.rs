use etude::Event;

/// Text buffer behind a name prompt. Local to the prompt and dropped with it.
#[derive(Debug, Default)]
pub struct NameInput {
    buffer: String,
}

impl NameInput {
    pub fn push(&mut self, c: char) {
        self.buffer.push(c);
    }

    pub fn pop(&mut self) {
        self.buffer.pop();
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Takes the trimmed buffer, clearing it. Blank buffers are left as they
    /// are and yield nothing.
    pub fn submit(&mut self) -> Option<String> {
        let name = self.buffer.trim();
        if name.is_empty() {
            return None;
        }
        let name = name.to_string();
        self.buffer.clear();
        Some(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    Exercise,
    Session,
}

impl PromptKind {
    pub fn title(self) -> &'static str {
        match self {
            PromptKind::Exercise => "New Exercise Name",
            PromptKind::Session => "New Session Name",
        }
    }

    pub fn event(self, name: String) -> Event {
        match self {
            PromptKind::Exercise => Event::AddExercise { name },
            PromptKind::Session => Event::AddSession { name },
        }
    }
}

#[derive(Debug)]
pub struct Prompt {
    pub kind: PromptKind,
    pub input: NameInput,
}

impl Prompt {
    pub fn new(kind: PromptKind) -> Self {
        Self {
            kind,
            input: NameInput::default(),
        }
    }
}
