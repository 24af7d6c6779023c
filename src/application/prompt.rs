use crate::domain::entities::conversation::{ChatTurn, ConversationHistory};
use std::fmt;
use std::str::FromStr;

/// System persona sent as the first message of every completion call.
pub const PERSONA_PROMPT: &str = "Eres Taylor, un asistente de Quant4x especializado en responder sobre Taylor, \
     un servicio de inteligencia artificial para inversiones en apuestas deportivas. \
     Siempre responde en el contexto de Taylor y evita respuestas genéricas sobre inversión. \
     Si el usuario pregunta sobre cómo empezar, depósitos o retiros, proporciona detalles específicos sobre Taylor. \
     Si el usuario pregunta cuánto puede ganar, usa datos reales y calcula la proyección de manera clara.";

/// Which augmentation wins when both an FAQ match and a market figure
/// could apply to the same message. Surfaced as configuration because the
/// product has not fixed a precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InjectionPrecedence {
    #[default]
    Relevance,
    Market,
}

impl fmt::Display for InjectionPrecedence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InjectionPrecedence::Relevance => write!(f, "relevance"),
            InjectionPrecedence::Market => write!(f, "market"),
        }
    }
}

impl FromStr for InjectionPrecedence {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "relevance" => Ok(InjectionPrecedence::Relevance),
            "market" => Ok(InjectionPrecedence::Market),
            _ => Err(format!("Unknown injection precedence: {s}")),
        }
    }
}

/// Context injected ahead of the user turn. At most one per call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Injection {
    /// Matched FAQ answer text.
    Relevance(String),
    /// Formatted market performance line.
    Market(String),
}

impl Injection {
    fn into_turn(self) -> ChatTurn {
        match self {
            Injection::Relevance(text) => ChatTurn::assistant(format!(
                "Aquí tienes información relevante sobre Taylor: {text}"
            )),
            Injection::Market(text) => ChatTurn::assistant(text),
        }
    }
}

/// Build the ordered message list: persona, prior turns oldest first, the
/// optional injection, then the current user prompt.
pub fn assemble(
    history: &ConversationHistory,
    injection: Option<Injection>,
    user_prompt: &str,
) -> Vec<ChatTurn> {
    let mut messages = Vec::with_capacity(history.len() + 3);
    messages.push(ChatTurn::system(PERSONA_PROMPT));
    messages.extend(history.turns().cloned());
    if let Some(injection) = injection {
        messages.push(injection.into_turn());
    }
    messages.push(ChatTurn::user(user_prompt));
    messages
}
