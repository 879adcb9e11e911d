// @awa-component: CORE-CannedAnswers
//
//! Canned medication answers.
//!
//! A small ordered rule table for the most common "what should I take for X"
//! questions. Matching is plain substring search on the lowercased message;
//! the first rule with a trigger and a qualifier present wins.
//!
//! The qualifier `medicin` is a stem on purpose: it also catches the
//! uncorrected spelling "medicin", so do not widen it back to "medicine".

/// A fixed answer that bypasses the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CannedRule {
    /// Short identifier used in logs.
    pub name: &'static str,
    /// Symptom terms; at least one must be present.
    pub triggers: &'static [&'static str],
    /// Request-type terms; at least one must be present.
    pub qualifiers: &'static [&'static str],
    pub response: &'static str,
}

impl CannedRule {
    /// Whether this rule fires for an already-lowercased message.
    pub fn matches(&self, lowered: &str) -> bool {
        self.triggers.iter().any(|t| lowered.contains(t))
            && self.qualifiers.iter().any(|q| lowered.contains(q))
    }
}

/// Request-type qualifiers shared by every rule.
const MEDICATION_QUALIFIERS: &[&str] = &["tablet", "medicin", "medication"];

/// Evaluated top to bottom.
pub const RULES: &[CannedRule] = &[
    CannedRule {
        name: "headache",
        triggers: &["headache"],
        qualifiers: MEDICATION_QUALIFIERS,
        response: "For mild headache, you may take paracetamol (Crocin, Tylenol) or ibuprofen (Brufen, Advil) as per dosage guidelines. \
                   Avoid overuse and consult a doctor if symptoms persist.",
    },
    CannedRule {
        name: "fever",
        triggers: &["fever"],
        qualifiers: MEDICATION_QUALIFIERS,
        response: "Paracetamol (e.g., Calpol, Crocin) is typically used for fever. Stay hydrated and rest. \
                   Seek medical help if fever continues beyond 48 hours.",
    },
    CannedRule {
        name: "cold",
        triggers: &["cold"],
        qualifiers: MEDICATION_QUALIFIERS,
        response: "For cold symptoms, OTC medications like cetirizine or paracetamol may help. \
                   Use steam inhalation and stay warm. Avoid cold drinks.",
    },
    CannedRule {
        name: "pain",
        triggers: &["pain"],
        qualifiers: MEDICATION_QUALIFIERS,
        response: "For general pain, paracetamol or ibuprofen may be taken after food. \
                   Avoid ibuprofen if you have ulcers or kidney issues.",
    },
];

/// First rule that fires for `text`, if any.
pub fn match_rule(text: &str) -> Option<&'static CannedRule> {
    let lowered = text.to_lowercase();
    RULES.iter().find(|rule| rule.matches(&lowered))
}

/// Canned response for `text`, if any rule fires.
pub fn match_canned(text: &str) -> Option<&'static str> {
    match_rule(text).map(|rule| rule.response)
}
