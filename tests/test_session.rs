use taylorbot::application::session::SessionStore;
use taylorbot::domain::entities::conversation::{ChatTurn, ConversationHistory};

#[test]
fn test_history_keeps_chronological_order() {
    let mut history = ConversationHistory::with_cap(20);
    history.push(ChatTurn::user("first question"));
    history.push(ChatTurn::assistant("first answer"));
    history.push(ChatTurn::user("second question"));
    history.push(ChatTurn::assistant("second answer"));

    let contents: Vec<&str> = history.turns().map(|t| t.content.as_str()).collect();
    assert_eq!(
        contents,
        ["first question", "first answer", "second question", "second answer"]
    );
}

#[test]
fn test_history_evicts_oldest_past_cap() {
    let mut history = ConversationHistory::with_cap(4);
    for i in 1..=6 {
        history.push(ChatTurn::user(format!("turn {i}")));
    }
    assert_eq!(history.len(), 4);
    let contents: Vec<&str> = history.turns().map(|t| t.content.as_str()).collect();
    assert_eq!(contents, ["turn 3", "turn 4", "turn 5", "turn 6"]);
}

#[tokio::test]
async fn test_sessions_persist_per_chat() {
    let store = SessionStore::new(20);

    {
        let session = store.session(42).unwrap();
        let mut history = session.lock().await;
        history.push(ChatTurn::user("hola"));
        history.push(ChatTurn::assistant("¡Hola!"));
    }

    let session = store.session(42).unwrap();
    assert_eq!(session.lock().await.len(), 2);
}

#[tokio::test]
async fn test_sessions_are_isolated_between_chats() {
    let store = SessionStore::new(20);

    {
        let session = store.session(1).unwrap();
        session.lock().await.push(ChatTurn::user("only in chat 1"));
    }

    let other = store.session(2).unwrap();
    assert!(other.lock().await.is_empty());
}
