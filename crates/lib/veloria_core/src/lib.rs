//! # veloria_core
//!
//! Message classification and reply generation for the Veloria health
//! assistant: misspelling normalization, the topic gate, canned medication
//! answers and the remote completion fallback.

pub mod canned;
pub mod completion;
pub mod normalize;
pub mod prompt;
pub mod responder;
pub mod topic;

pub use completion::{Completion, CompletionConfig, CompletionError, CompletionProvider};
pub use responder::{Reply, ReplySource, Responder};
pub use topic::Topic;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_is_not_empty() {
        assert!(!version().is_empty());
    }
}
