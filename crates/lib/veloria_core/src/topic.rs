// @awa-component: CORE-TopicGate
//
//! Topic gate — decides whether a message is in scope.
//!
//! A message is a [`Topic::Greeting`] when it is exactly one of the known
//! greeting phrases, [`Topic::HealthRelated`] when it contains any health or
//! emergency keyword as a whole word, and [`Topic::Unrelated`] otherwise.

use std::sync::LazyLock;

use regex::Regex;

/// Phrases answered with the fixed greeting. Compared after trim + lowercase.
pub const GREETINGS: &[&str] = &[
    "hi",
    "hello",
    "hey",
    "good morning",
    "good evening",
    "hii",
    "helo",
];

pub const EMERGENCY_KEYWORDS: &[&str] = &[
    "unconscious",
    "emergency",
    "first aid",
    "choking",
    "bleeding",
    "seizure",
    "burn",
    "faint",
    "resuscitation",
    "cpr",
];

pub const HEALTH_KEYWORDS: &[&str] = &[
    "pain", "surgery", "medicine", "medication", "therapy", "treatment", "injury",
    "headache", "fever", "wound", "illness", "recovery", "diagnosis", "prescription",
    "health", "doctor", "nurse", "hospital", "symptoms", "infection", "disease",
    "cough", "cold", "fracture", "allergy", "vomit", "nausea", "bleeding",
    "appointment", "physiotherapy", "nutrition", "sleep", "mental", "anxiety",
    "depression", "diabetes", "asthma", "hypertension", "heart", "lungs", "sugar",
    "bp", "covid", "corona", "malaria", "dengue", "flu", "virus", "bacteria",
    "cancer", "tumor", "radiation", "chemotherapy", "oncology",
];

/// One alternation over both keyword sets, anchored on word boundaries.
static KEYWORD_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let alternation = HEALTH_KEYWORDS
        .iter()
        .chain(EMERGENCY_KEYWORDS)
        .map(|kw| regex::escape(kw))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"\b(?:{alternation})\b")).expect("keyword pattern is valid")
});

/// Outcome of the topic gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    Greeting,
    HealthRelated,
    Unrelated,
}

impl Topic {
    pub fn as_str(&self) -> &'static str {
        match self {
            Topic::Greeting => "greeting",
            Topic::HealthRelated => "health_related",
            Topic::Unrelated => "unrelated",
        }
    }
}

impl std::fmt::Display for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// True when the trimmed, lowercased text is exactly a greeting phrase.
pub fn is_greeting(text: &str) -> bool {
    let lowered = text.trim().to_lowercase();
    GREETINGS.contains(&lowered.as_str())
}

/// True when any health or emergency keyword appears as a whole word.
pub fn is_health_related(text: &str) -> bool {
    KEYWORD_PATTERN.is_match(&text.to_lowercase())
}

/// Classify a normalized message.
pub fn classify(text: &str) -> Topic {
    if is_greeting(text) {
        Topic::Greeting
    } else if is_health_related(text) {
        Topic::HealthRelated
    } else {
        Topic::Unrelated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greetings_match_regardless_of_case_and_padding() {
        assert_eq!(classify("hello"), Topic::Greeting);
        assert_eq!(classify("  Good Morning  "), Topic::Greeting);
        assert_eq!(classify("HII"), Topic::Greeting);
    }

    #[test]
    fn greeting_must_be_the_whole_message() {
        // Extra words make it a regular message.
        assert_eq!(classify("hello there"), Topic::Unrelated);
        assert_eq!(classify("hello, I have a fever"), Topic::HealthRelated);
    }

    #[test]
    fn health_keywords_are_detected() {
        assert_eq!(classify("I have a headache"), Topic::HealthRelated);
        assert_eq!(classify("My BP is high"), Topic::HealthRelated);
        assert_eq!(classify("where is the nearest hospital?"), Topic::HealthRelated);
    }

    #[test]
    fn multi_word_emergency_keyword_is_detected() {
        assert_eq!(classify("how do I give first aid"), Topic::HealthRelated);
    }

    #[test]
    fn keywords_inside_longer_words_do_not_match() {
        assert_eq!(classify("I love painting"), Topic::Unrelated);
        assert_eq!(classify("the flute recital"), Topic::Unrelated);
        assert_eq!(classify("sleepy bpm counter"), Topic::Unrelated);
        assert_eq!(classify("burnt toast"), Topic::Unrelated);
    }

    #[test]
    fn keywords_next_to_punctuation_match() {
        assert_eq!(classify("fever?"), Topic::HealthRelated);
        assert_eq!(classify("(cough)"), Topic::HealthRelated);
    }

    #[test]
    fn unrelated_messages_are_rejected() {
        assert_eq!(classify("what is the capital of France"), Topic::Unrelated);
        assert_eq!(classify(""), Topic::Unrelated);
    }

    #[test]
    fn topic_labels() {
        assert_eq!(Topic::HealthRelated.to_string(), "health_related");
        assert_eq!(Topic::Greeting.as_str(), "greeting");
    }
}
