//! Personality dispatch.
//!
//! A bot's personality text is matched against an ordered table of trigger
//! sets. The first set with any keyword contained in the lowercased text
//! decides the persona; later sets are not consulted. Keyword position and
//! count play no part, so "professional yet friendly" is still `Friendly`.

/// Response branch selected from a bot's personality text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Persona {
    Friendly,
    Professional,
    Humorous,
    Analytical,
    Helpful,
    /// No trigger keyword matched.
    Neutral,
}

/// Trigger sets in priority order.
pub const PERSONA_TRIGGERS: &[(Persona, &[&str])] = &[
    (Persona::Friendly, &["friendly", "enthusiastic"]),
    (Persona::Professional, &["professional", "formal"]),
    (Persona::Humorous, &["humor", "funny", "witty"]),
    (Persona::Analytical, &["serious", "analytical", "thorough"]),
    (Persona::Helpful, &["helpful", "assistant"]),
];

impl Persona {
    /// Select the persona for a personality description.
    pub fn detect(personality: &str) -> Persona {
        let lowered = personality.to_lowercase();
        PERSONA_TRIGGERS
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|k| lowered.contains(k)))
            .map(|(persona, _)| *persona)
            .unwrap_or(Persona::Neutral)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Persona::Friendly => "friendly",
            Persona::Professional => "professional",
            Persona::Humorous => "humorous",
            Persona::Analytical => "analytical",
            Persona::Helpful => "helpful",
            Persona::Neutral => "neutral",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_keyword_selects_its_set() {
        for (persona, keywords) in PERSONA_TRIGGERS {
            for keyword in *keywords {
                let text = format!("a very {keyword} bot");
                assert_eq!(Persona::detect(&text), *persona, "keyword {keyword}");
            }
        }
    }

    #[test]
    fn test_earlier_set_wins_regardless_of_position() {
        assert_eq!(
            Persona::detect("formal, but also enthusiastic"),
            Persona::Friendly
        );
        assert_eq!(Persona::detect("a witty assistant"), Persona::Humorous);
        assert_eq!(
            Persona::detect("helpful and thorough"),
            Persona::Analytical
        );
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(Persona::detect("PROFESSIONAL"), Persona::Professional);
    }

    #[test]
    fn test_no_keyword_is_neutral() {
        assert_eq!(Persona::detect("calm and quiet"), Persona::Neutral);
        assert_eq!(Persona::detect(""), Persona::Neutral);
    }

    #[test]
    fn test_trigger_sets_are_disjoint() {
        let mut seen = std::collections::HashSet::new();
        for (_, keywords) in PERSONA_TRIGGERS {
            for keyword in *keywords {
                assert!(seen.insert(*keyword), "duplicate trigger {keyword}");
            }
        }
    }
}
