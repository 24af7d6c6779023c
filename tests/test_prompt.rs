use taylorbot::application::prompt::{self, Injection, InjectionPrecedence, PERSONA_PROMPT};
use taylorbot::domain::entities::conversation::{ChatTurn, ConversationHistory, Role};

fn history_of_two() -> ConversationHistory {
    let mut history = ConversationHistory::with_cap(20);
    history.push(ChatTurn::user("hola"));
    history.push(ChatTurn::assistant("¡Hola! Soy Taylor."));
    history
}

#[test]
fn test_message_order_with_relevance_injection() {
    let messages = prompt::assemble(
        &history_of_two(),
        Some(Injection::Relevance("Puedes retirar en 24 horas.".into())),
        "¿cómo retiro?",
    );

    assert_eq!(messages.len(), 5);
    assert_eq!(messages[0].role, Role::System);
    assert_eq!(messages[0].content, PERSONA_PROMPT);
    assert_eq!(messages[1], ChatTurn::user("hola"));
    assert_eq!(messages[2], ChatTurn::assistant("¡Hola! Soy Taylor."));
    assert_eq!(messages[3].role, Role::Assistant);
    assert_eq!(
        messages[3].content,
        "Aquí tienes información relevante sobre Taylor: Puedes retirar en 24 horas."
    );
    assert_eq!(messages[4], ChatTurn::user("¿cómo retiro?"));
}

#[test]
fn test_market_injection_passes_through_verbatim() {
    let line = "The ROI of BTC-USD from 2024-01-01 to 2024-12-31 is 50.00%. \
                Starting price: $100.00, Final price: $150.00.";
    let messages = prompt::assemble(
        &ConversationHistory::with_cap(20),
        Some(Injection::Market(line.into())),
        "how did bitcoin do",
    );

    assert_eq!(messages.len(), 3);
    assert_eq!(messages[1], ChatTurn::assistant(line));
}

#[test]
fn test_no_injection_is_just_persona_history_user() {
    let messages = prompt::assemble(&history_of_two(), None, "¿qué es Taylor?");
    assert_eq!(messages.len(), 4);
    assert_eq!(messages[0].role, Role::System);
    assert_eq!(messages[3], ChatTurn::user("¿qué es Taylor?"));
}

#[test]
fn test_precedence_parses_from_config_strings() {
    assert_eq!(
        "relevance".parse::<InjectionPrecedence>().unwrap(),
        InjectionPrecedence::Relevance
    );
    assert_eq!(
        "Market".parse::<InjectionPrecedence>().unwrap(),
        InjectionPrecedence::Market
    );
    assert!("both".parse::<InjectionPrecedence>().is_err());
    assert_eq!(InjectionPrecedence::default(), InjectionPrecedence::Relevance);
}
