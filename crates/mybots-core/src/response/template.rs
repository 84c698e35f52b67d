//! Reply templates, one per (persona, message kind) pair.

use super::classify::MessageKind;
use super::persona::Persona;

/// Prompt prefix length used by greeting templates.
const GREETING_PROMPT_CHARS: usize = 100;
/// Prompt prefix length used by question and statement templates.
const REPLY_PROMPT_CHARS: usize = 150;
/// Prompt prefix length used by the neutral statement template.
const NEUTRAL_STATEMENT_PROMPT_CHARS: usize = 200;

/// First `max_chars` characters of `prompt`, or `fallback` when the prompt
/// is empty.
fn prompt_or<'a>(prompt: &'a str, max_chars: usize, fallback: &'a str) -> &'a str {
    if prompt.is_empty() {
        return fallback;
    }
    match prompt.char_indices().nth(max_chars) {
        Some((end, _)) => &prompt[..end],
        None => prompt,
    }
}

/// Render the reply for a persona and message kind.
pub fn render(persona: Persona, kind: MessageKind, name: &str, message: &str, prompt: &str) -> String {
    use MessageKind::{Greeting, Question, Statement};

    let greet = |fallback| prompt_or(prompt, GREETING_PROMPT_CHARS, fallback);
    let reply = |fallback| prompt_or(prompt, REPLY_PROMPT_CHARS, fallback);

    match (persona, kind) {
        (Persona::Friendly, Greeting) => format!(
            "Hey there! 😊 I'm {name}! It's great to meet you! How can I help you today?"
        ),
        (Persona::Friendly, Question) => format!(
            "That's a great question! {message}\n\nAs {name}, I'd love to help you with that! {}",
            reply("Let me share what I know about this topic.")
        ),
        (Persona::Friendly, Statement) => format!(
            "Thanks for sharing that! I'm {name}, and I'm really excited to chat with you! {}",
            reply("Feel free to ask me anything!")
        ),

        (Persona::Professional, Greeting) => format!(
            "Good day. I am {name}. {}",
            greet("How may I assist you today?")
        ),
        (Persona::Professional, Question) => format!(
            "Regarding your inquiry: \"{message}\"\n\nI will provide you with a comprehensive response. {}",
            reply("Please allow me to address this matter thoroughly.")
        ),
        (Persona::Professional, Statement) => format!(
            "I acknowledge your message. As {name}, {}",
            reply("I am here to provide professional assistance.")
        ),

        (Persona::Humorous, Greeting) => format!(
            "Well hello there! 😄 I'm {name}, the bot with jokes! Why did the bot cross the road? \
             To process data on the other side! But seriously, how can I help?"
        ),
        (Persona::Humorous, Question) => format!(
            "Ooh, a question! {message}\n\nLet me think... *pretends to think really hard* 🤔 As {name}, I'd say: {}",
            reply("The answer is probably 42, but let me give you a better one!")
        ),
        (Persona::Humorous, Statement) => format!(
            "Haha, nice! {message}? I love it! I'm {name}, and I'm here to bring some fun to our chat! {}",
            reply("😄")
        ),

        (Persona::Analytical, Greeting) => format!(
            "Greetings. I am {name}. {}",
            greet("I am prepared to engage in focused, analytical discussion.")
        ),
        (Persona::Analytical, Question) => format!(
            "Your question requires careful consideration: \"{message}\"\n\nLet me provide a thorough analysis. {}",
            reply("I will examine this matter systematically and provide detailed insights.")
        ),
        (Persona::Analytical, Statement) => format!(
            "I have received your input. As {name}, I approach this with careful consideration. {}",
            reply("I am prepared to provide detailed, analytical responses.")
        ),

        (Persona::Helpful, Greeting) => format!(
            "Hello! I'm {name}, your helpful assistant. {}",
            greet("How can I help you today?")
        ),
        (Persona::Helpful, Question) => format!(
            "I'd be happy to help with that question!\n\n\"{message}\"\n\n{}",
            reply("Let me assist you with finding the answer.")
        ),
        (Persona::Helpful, Statement) => format!(
            "Thank you for your message! I'm {name}. {}",
            reply("I am here to help you with whatever you need!")
        ),

        (Persona::Neutral, Greeting) => format!(
            "Hello! I'm {name}. {}",
            greet("Nice to meet you!")
        ),
        (Persona::Neutral, Question) => format!(
            "You asked: \"{message}\"\n\nI'm {name}. {}",
            reply("I will do my best to answer your question.")
        ),
        (Persona::Neutral, Statement) => format!(
            "I'm {name}. {}",
            prompt_or(prompt, NEUTRAL_STATEMENT_PROMPT_CHARS, "How can I assist you today?")
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_or_truncates_by_chars() {
        let prompt = "é".repeat(300);
        let cut = prompt_or(&prompt, 150, "fallback");
        assert_eq!(cut.chars().count(), 150);
    }

    #[test]
    fn test_prompt_or_short_prompt_untouched() {
        assert_eq!(prompt_or("short", 150, "fallback"), "short");
    }

    #[test]
    fn test_prompt_or_empty_uses_fallback() {
        assert_eq!(prompt_or("", 150, "fallback"), "fallback");
    }

    #[test]
    fn test_greeting_templates_use_100_chars() {
        let prompt = "p".repeat(500);
        let out = render(Persona::Professional, MessageKind::Greeting, "Lex", "hi", &prompt);
        assert_eq!(out, format!("Good day. I am Lex. {}", "p".repeat(100)));
    }

    #[test]
    fn test_neutral_statement_uses_200_chars() {
        let prompt = "p".repeat(500);
        let out = render(Persona::Neutral, MessageKind::Statement, "Bo", "ok", &prompt);
        assert_eq!(out, format!("I'm Bo. {}", "p".repeat(200)));
    }

    #[test]
    fn test_question_templates_use_150_chars() {
        let prompt = "p".repeat(500);
        let out = render(Persona::Helpful, MessageKind::Question, "Hal", "why?", &prompt);
        assert!(out.ends_with(&format!("\n\n{}", "p".repeat(150))));
        assert!(!out.contains(&"p".repeat(151)));
    }

    #[test]
    fn test_every_template_renders_exact_text() {
        use MessageKind::{Greeting, Question, Statement};

        // (persona, kind, without prompt, with prompt "Ask me.")
        let cases = [
            (
                Persona::Friendly,
                Greeting,
                "Hey there! 😊 I'm Max! It's great to meet you! How can I help you today?",
                "Hey there! 😊 I'm Max! It's great to meet you! How can I help you today?",
            ),
            (
                Persona::Friendly,
                Question,
                "That's a great question! why?\n\nAs Max, I'd love to help you with that! Let me share what I know about this topic.",
                "That's a great question! why?\n\nAs Max, I'd love to help you with that! Ask me.",
            ),
            (
                Persona::Friendly,
                Statement,
                "Thanks for sharing that! I'm Max, and I'm really excited to chat with you! Feel free to ask me anything!",
                "Thanks for sharing that! I'm Max, and I'm really excited to chat with you! Ask me.",
            ),
            (
                Persona::Professional,
                Greeting,
                "Good day. I am Max. How may I assist you today?",
                "Good day. I am Max. Ask me.",
            ),
            (
                Persona::Professional,
                Question,
                "Regarding your inquiry: \"why?\"\n\nI will provide you with a comprehensive response. Please allow me to address this matter thoroughly.",
                "Regarding your inquiry: \"why?\"\n\nI will provide you with a comprehensive response. Ask me.",
            ),
            (
                Persona::Professional,
                Statement,
                "I acknowledge your message. As Max, I am here to provide professional assistance.",
                "I acknowledge your message. As Max, Ask me.",
            ),
            (
                Persona::Humorous,
                Greeting,
                "Well hello there! 😄 I'm Max, the bot with jokes! Why did the bot cross the road? To process data on the other side! But seriously, how can I help?",
                "Well hello there! 😄 I'm Max, the bot with jokes! Why did the bot cross the road? To process data on the other side! But seriously, how can I help?",
            ),
            (
                Persona::Humorous,
                Question,
                "Ooh, a question! why?\n\nLet me think... *pretends to think really hard* 🤔 As Max, I'd say: The answer is probably 42, but let me give you a better one!",
                "Ooh, a question! why?\n\nLet me think... *pretends to think really hard* 🤔 As Max, I'd say: Ask me.",
            ),
            (
                Persona::Humorous,
                Statement,
                "Haha, nice! why?? I love it! I'm Max, and I'm here to bring some fun to our chat! 😄",
                "Haha, nice! why?? I love it! I'm Max, and I'm here to bring some fun to our chat! Ask me.",
            ),
            (
                Persona::Analytical,
                Greeting,
                "Greetings. I am Max. I am prepared to engage in focused, analytical discussion.",
                "Greetings. I am Max. Ask me.",
            ),
            (
                Persona::Analytical,
                Question,
                "Your question requires careful consideration: \"why?\"\n\nLet me provide a thorough analysis. I will examine this matter systematically and provide detailed insights.",
                "Your question requires careful consideration: \"why?\"\n\nLet me provide a thorough analysis. Ask me.",
            ),
            (
                Persona::Analytical,
                Statement,
                "I have received your input. As Max, I approach this with careful consideration. I am prepared to provide detailed, analytical responses.",
                "I have received your input. As Max, I approach this with careful consideration. Ask me.",
            ),
            (
                Persona::Helpful,
                Greeting,
                "Hello! I'm Max, your helpful assistant. How can I help you today?",
                "Hello! I'm Max, your helpful assistant. Ask me.",
            ),
            (
                Persona::Helpful,
                Question,
                "I'd be happy to help with that question!\n\n\"why?\"\n\nLet me assist you with finding the answer.",
                "I'd be happy to help with that question!\n\n\"why?\"\n\nAsk me.",
            ),
            (
                Persona::Helpful,
                Statement,
                "Thank you for your message! I'm Max. I am here to help you with whatever you need!",
                "Thank you for your message! I'm Max. Ask me.",
            ),
            (
                Persona::Neutral,
                Greeting,
                "Hello! I'm Max. Nice to meet you!",
                "Hello! I'm Max. Ask me.",
            ),
            (
                Persona::Neutral,
                Question,
                "You asked: \"why?\"\n\nI'm Max. I will do my best to answer your question.",
                "You asked: \"why?\"\n\nI'm Max. Ask me.",
            ),
            (
                Persona::Neutral,
                Statement,
                "I'm Max. How can I assist you today?",
                "I'm Max. Ask me.",
            ),
        ];
        assert_eq!(cases.len(), 18);

        for (persona, kind, bare, prompted) in cases {
            assert_eq!(render(persona, kind, "Max", "why?", ""), bare, "{persona:?}/{kind:?}");
            assert_eq!(
                render(persona, kind, "Max", "why?", "Ask me."),
                prompted,
                "{persona:?}/{kind:?} with prompt"
            );
        }
    }

    #[test]
    fn test_humorous_greeting_ignores_prompt() {
        let out = render(Persona::Humorous, MessageKind::Greeting, "Jest", "hello", "secret");
        assert!(out.starts_with("Well hello there! 😄 I'm Jest"));
        assert!(!out.contains("secret"));
    }
}
