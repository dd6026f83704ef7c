use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::App;
use crate::tui::AppEvent;

pub fn handle_event(app: &mut App, event: AppEvent) {
    match event {
        AppEvent::Key(key) => handle_key(app, key),
        AppEvent::Resize(_, _) => {}
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    // Control chords first, before plain chars reach the draft.
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') => app.should_quit = true,
            KeyCode::Char('d') => app.delete_selected(),
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Enter => app.send(),
        KeyCode::Esc => app.clear_selection(),

        KeyCode::Up => app.select_up(),
        KeyCode::Down => app.select_down(),

        KeyCode::Backspace => app.delete_back(),
        KeyCode::Delete => app.delete_forward(),
        KeyCode::Left => app.cursor_left(),
        KeyCode::Right => app.cursor_right(),
        KeyCode::Home => app.cursor_home(),
        KeyCode::End => app.cursor_end(),
        KeyCode::Char(c) => app.insert_char(c),

        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parley_core::UserDirectory;

    fn press(code: KeyCode) -> AppEvent {
        AppEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn ctrl(c: char) -> AppEvent {
        AppEvent::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
    }

    #[test]
    fn test_typing_and_enter_send() {
        let mut app = App::new(UserDirectory::default());
        handle_event(&mut app, press(KeyCode::Char('h')));
        handle_event(&mut app, press(KeyCode::Char('i')));
        handle_event(&mut app, press(KeyCode::Enter));

        assert_eq!(app.conversation.state().messages.len(), 2);
        assert_eq!(app.conversation.state().messages[1].text, "hi");
    }

    #[test]
    fn test_enter_with_empty_draft_does_nothing() {
        let mut app = App::new(UserDirectory::default());
        handle_event(&mut app, press(KeyCode::Enter));
        assert_eq!(app.conversation.state().messages.len(), 1);
    }

    #[test]
    fn test_ctrl_c_quits() {
        let mut app = App::new(UserDirectory::default());
        handle_event(&mut app, ctrl('c'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_ctrl_d_deletes_selected_self_message() {
        let mut app = App::new(UserDirectory::default());
        handle_event(&mut app, press(KeyCode::Char('x')));
        handle_event(&mut app, press(KeyCode::Enter));
        handle_event(&mut app, press(KeyCode::Up));
        handle_event(&mut app, ctrl('d'));

        assert_eq!(app.conversation.state().messages.len(), 1);
    }

    #[test]
    fn test_ctrl_d_does_not_type_a_character() {
        let mut app = App::new(UserDirectory::default());
        handle_event(&mut app, ctrl('d'));
        assert_eq!(app.conversation.state().draft, "");
    }

    #[test]
    fn test_esc_clears_selection() {
        let mut app = App::new(UserDirectory::default());
        handle_event(&mut app, press(KeyCode::Up));
        assert!(app.selected.is_some());
        handle_event(&mut app, press(KeyCode::Esc));
        assert!(app.selected.is_none());
    }
}
