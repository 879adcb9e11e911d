//! Prompt construction for the completion fallback.

/// Marker that opens a user turn.
pub const USER_MARKER: &str = "User:";
/// Marker that opens an assistant turn.
pub const ASSISTANT_MARKER: &str = "Veloria AI:";

/// Persona and scope instruction prepended to every prompt.
pub const SYSTEM_INSTRUCTION: &str = "You are Veloria AI 🤖, a certified digital healthcare assistant. \
    You ONLY provide concise medical advice, post-surgery recovery tips, safe medication guidance, or therapy recommendations. \
    Your responses must be short, medically factual, and directly related to health conditions, medications, symptoms, or recovery guidance. \
    DO NOT explain exercise steps, routines, lifestyle suggestions, motivational content, or conversational fluff. \
    If the question is not health-related, politely redirect the user to focus only on medical topics.";

/// Build the single-turn prompt for a normalized user message.
///
/// The prompt ends with the assistant marker so the model continues as the
/// assistant.
pub fn build_prompt(message: &str) -> String {
    format!("{SYSTEM_INSTRUCTION}\n\n{USER_MARKER} {message}\n{ASSISTANT_MARKER}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_wraps_message_in_turn_markers() {
        let prompt = build_prompt("my knee hurts after surgery");
        assert!(prompt.starts_with(SYSTEM_INSTRUCTION));
        assert!(prompt.ends_with("\n\nUser: my knee hurts after surgery\nVeloria AI:"));
    }
}
