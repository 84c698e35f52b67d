//! Message heuristics: greeting and question detection.

/// Phrases that mark a message as a greeting when found anywhere in the
/// lowercased text. Plain substring containment, so "this" counts as "hi".
pub const GREETING_PHRASES: &[&str] = &[
    "hello",
    "hi",
    "hey",
    "greetings",
    "good morning",
    "good afternoon",
    "good evening",
];

/// Shape of an incoming message, used to pick a sub-template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Greeting,
    Question,
    Statement,
}

impl MessageKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageKind::Greeting => "greeting",
            MessageKind::Question => "question",
            MessageKind::Statement => "statement",
        }
    }
}

pub fn is_greeting(message: &str) -> bool {
    let lowered = message.to_lowercase();
    GREETING_PHRASES.iter().any(|phrase| lowered.contains(phrase))
}

pub fn is_question(message: &str) -> bool {
    message.contains('?')
}

/// Classify a message. Greeting takes precedence over question.
pub fn classify_message(message: &str) -> MessageKind {
    if is_greeting(message) {
        MessageKind::Greeting
    } else if is_question(message) {
        MessageKind::Question
    } else {
        MessageKind::Statement
    }
}
