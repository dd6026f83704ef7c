use parley_core::{Message, UserDirectory};
use parley_state::{Action, Conversation};

/// Convert a character index to a byte index for UTF-8 safe string operations
fn char_to_byte_index(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}

/// Interaction state of the terminal front-end.
///
/// All conversation mutations flow through the reducer; the app only adds
/// what the screen itself needs, the input cursor and the message
/// selection.
pub struct App {
    pub should_quit: bool,
    pub conversation: Conversation,
    /// Cursor position in the draft, in characters.
    pub cursor: usize,
    /// Index of the highlighted message, if any.
    pub selected: Option<usize>,
}

impl App {
    pub fn new(directory: UserDirectory) -> Self {
        Self {
            should_quit: false,
            conversation: Conversation::new(directory),
            cursor: 0,
            selected: None,
        }
    }

    fn draft(&self) -> &str {
        &self.conversation.state().draft
    }

    fn draft_chars(&self) -> usize {
        self.draft().chars().count()
    }

    fn set_draft(&mut self, text: String) {
        self.conversation.dispatch(Action::SetDraft { text });
    }

    // Draft editing

    pub fn insert_char(&mut self, c: char) {
        let mut text = self.draft().to_string();
        let byte_pos = char_to_byte_index(&text, self.cursor);
        text.insert(byte_pos, c);
        self.set_draft(text);
        self.cursor += 1;
    }

    pub fn delete_back(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let mut text = self.draft().to_string();
            let byte_pos = char_to_byte_index(&text, self.cursor);
            text.remove(byte_pos);
            self.set_draft(text);
        }
    }

    pub fn delete_forward(&mut self) {
        if self.cursor < self.draft_chars() {
            let mut text = self.draft().to_string();
            let byte_pos = char_to_byte_index(&text, self.cursor);
            text.remove(byte_pos);
            self.set_draft(text);
        }
    }

    pub fn cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.draft_chars());
    }

    pub fn cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn cursor_end(&mut self) {
        self.cursor = self.draft_chars();
    }

    /// Send the draft. Inert while the draft is empty.
    pub fn send(&mut self) {
        if self.draft().is_empty() {
            return;
        }
        self.conversation.dispatch(Action::Send);
        self.cursor = 0;
    }

    // Message selection

    pub fn select_up(&mut self) {
        let len = self.conversation.state().messages.len();
        if len == 0 {
            return;
        }
        self.selected = Some(match self.selected {
            Some(i) => i.saturating_sub(1),
            // Start from the newest message.
            None => len - 1,
        });
    }

    pub fn select_down(&mut self) {
        let len = self.conversation.state().messages.len();
        if len == 0 {
            return;
        }
        self.selected = Some(match self.selected {
            Some(i) => (i + 1).min(len - 1),
            None => len - 1,
        });
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn selected_message(&self) -> Option<&Message> {
        self.selected
            .and_then(|i| self.conversation.state().messages.get(i))
    }

    /// Whether the highlighted message carries the delete affordance.
    pub fn selection_is_deletable(&self) -> bool {
        self.selected_message()
            .map(|message| message.is_authored_by(self.conversation.directory().self_id()))
            .unwrap_or(false)
    }

    /// Delete the highlighted message. Non-self messages are left alone by
    /// the reducer; the selection is clamped if the list shrank.
    pub fn delete_selected(&mut self) {
        let Some(index) = self.selected else {
            return;
        };
        let Some(message) = self.conversation.state().messages.get(index) else {
            return;
        };
        let message_id = message.id;
        self.conversation.dispatch(Action::Delete { message_id });

        let len = self.conversation.state().messages.len();
        if len == 0 {
            self.selected = None;
        } else if index >= len {
            self.selected = Some(len - 1);
        }
    }
}
