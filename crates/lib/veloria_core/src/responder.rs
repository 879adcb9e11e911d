// @awa-component: CORE-Responder
//
//! Message classifier & responder pipeline.
//!
//! Every message is normalized first, then offered to the local stages in
//! order. The first stage that produces a reply ends the request; messages
//! nobody answers go to the completion provider exactly once.

use std::sync::Arc;

use tracing::{debug, info};

use crate::canned;
use crate::completion::{CompletionError, CompletionProvider};
use crate::normalize::normalize;
use crate::prompt::build_prompt;
use crate::topic::{self, Topic};

/// Reply to a bare greeting.
pub const GREETING_REPLY: &str = "Hello! How may I assist you today?";
/// Reply to anything outside the health domain.
pub const REDIRECT_REPLY: &str = "I'm here to assist with medical or healthcare-related questions only. \
                                  Please ask a health-related query.";

/// Which stage produced a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplySource {
    Greeting,
    Redirect,
    Canned,
    Model,
}

impl ReplySource {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReplySource::Greeting => "greeting",
            ReplySource::Redirect => "redirect",
            ReplySource::Canned => "canned",
            ReplySource::Model => "model",
        }
    }
}

/// Final reply for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub source: ReplySource,
}

impl Reply {
    fn fixed(text: &str, source: ReplySource) -> Self {
        Self {
            text: text.to_string(),
            source,
        }
    }
}

/// A local stage: looks at the normalized message and may answer it.
pub type LocalStage = fn(&str) -> Option<Reply>;

/// Local stages in evaluation order.
pub const LOCAL_STAGES: &[LocalStage] = &[topic_stage, canned_stage];

/// Answers greetings and turns away unrelated messages.
pub fn topic_stage(text: &str) -> Option<Reply> {
    match topic::classify(text) {
        Topic::Greeting => Some(Reply::fixed(GREETING_REPLY, ReplySource::Greeting)),
        Topic::Unrelated => Some(Reply::fixed(REDIRECT_REPLY, ReplySource::Redirect)),
        Topic::HealthRelated => None,
    }
}

/// Answers common medication questions from the rule table.
pub fn canned_stage(text: &str) -> Option<Reply> {
    let rule = canned::match_rule(text)?;
    debug!(rule = rule.name, "canned rule matched");
    Some(Reply::fixed(rule.response, ReplySource::Canned))
}

/// Run the local stages only. `None` means the message needs the model.
pub fn answer_locally(normalized: &str) -> Option<Reply> {
    LOCAL_STAGES.iter().find_map(|stage| stage(normalized))
}

/// Stateless request pipeline; cheap to clone and share across requests.
#[derive(Clone)]
pub struct Responder {
    provider: Arc<dyn CompletionProvider>,
}

impl Responder {
    pub fn new(provider: Arc<dyn CompletionProvider>) -> Self {
        Self { provider }
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Produce the reply for one raw user message.
    ///
    /// Only the provider call can fail; every local outcome is `Ok`.
    pub async fn respond(&self, message: &str) -> Result<Reply, CompletionError> {
        let normalized = normalize(message);

        if let Some(reply) = answer_locally(&normalized) {
            info!(source = reply.source.as_str(), "answered locally");
            return Ok(reply);
        }

        let prompt = build_prompt(&normalized);
        let completion = self.provider.complete(&prompt).await?;
        info!(
            source = ReplySource::Model.as_str(),
            provider = self.provider.name(),
            "answered by completion provider"
        );
        Ok(Reply {
            text: completion.into_reply(),
            source: ReplySource::Model,
        })
    }
}

impl std::fmt::Debug for Responder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Responder")
            .field("provider", &self.provider.name())
            .finish()
    }
}
