//! Tests for the stateful conversation wrapper

use parley_core::UserDirectory;
use parley_state::{Action, Conversation, SequenceStamper};
use uuid::Uuid;

#[test]
fn test_conversation_starts_seeded() {
    let conversation = Conversation::with_stamper(UserDirectory::default(), SequenceStamper::new());

    assert_eq!(conversation.state().messages.len(), 1);
    assert_eq!(conversation.state().messages[0].text, "Hello, how are you?");
    assert_eq!(
        conversation.state().messages[0].author,
        *conversation.directory().system_id()
    );
    assert_eq!(conversation.state().draft, "");
}

#[test]
fn test_dispatch_send_round() {
    let mut conversation =
        Conversation::with_stamper(UserDirectory::default(), SequenceStamper::new());

    conversation.dispatch(Action::SetDraft {
        text: "hello".to_string(),
    });
    let sent = conversation.dispatch(Action::Send);

    assert!(sent.applied);
    assert_eq!(conversation.state().messages.len(), 2);
    assert_eq!(conversation.state().messages[1].text, "hello");
    assert_eq!(conversation.state().draft, "");
}

#[test]
fn test_dispatch_records_refusals() {
    let mut conversation =
        Conversation::with_stamper(UserDirectory::default(), SequenceStamper::new());

    let seeded_id = conversation.state().messages[0].id;
    let refused = conversation.dispatch(Action::Delete {
        message_id: seeded_id,
    });
    let missing = conversation.dispatch(Action::Delete {
        message_id: Uuid::nil(),
    });

    assert!(!refused.applied);
    assert!(!missing.applied);
    assert_eq!(conversation.state().messages.len(), 1);

    let history = conversation.history();
    assert_eq!(history.len(), 2);
    assert!(history.iter().all(|entry| !entry.applied));
}

#[test]
fn test_delete_own_message_through_wrapper() {
    let mut conversation =
        Conversation::with_stamper(UserDirectory::default(), SequenceStamper::new());

    conversation.dispatch(Action::SetDraft {
        text: "disposable".to_string(),
    });
    conversation.dispatch(Action::Send);
    let sent_id = conversation.state().messages[1].id;

    let removed = conversation.dispatch(Action::Delete {
        message_id: sent_id,
    });

    assert!(removed.applied);
    assert_eq!(conversation.state().messages.len(), 1);
}

#[test]
fn test_default_conversation_uses_seed_directory() {
    let conversation = Conversation::default();

    let directory = conversation.directory();
    assert_eq!(directory.display_name(directory.self_id()), Some("Justin"));
    assert_eq!(directory.display_name(directory.system_id()), Some("System"));
    assert_eq!(conversation.state().messages.len(), 1);
}

#[test]
fn test_system_stamper_mints_distinct_message_ids() {
    let mut conversation = Conversation::new(UserDirectory::default());

    conversation.dispatch(Action::SetDraft {
        text: "first".to_string(),
    });
    conversation.dispatch(Action::Send);
    conversation.dispatch(Action::SetDraft {
        text: "second".to_string(),
    });
    conversation.dispatch(Action::Send);

    let ids: Vec<Uuid> = conversation
        .state()
        .messages
        .iter()
        .map(|message| message.id)
        .collect();
    assert_eq!(ids.len(), 3);
    assert!(ids.iter().all(|id| ids.iter().filter(|i| *i == id).count() == 1));
}
