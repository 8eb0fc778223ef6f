use chrono::{Duration, Utc};
use serde::Serialize;

use crate::flow::FlowOutcome;
use crate::models::{Assessment, ChatMessage, Role};

pub const GREETING: &str = "Hello! I'm your SHL assessment recommendation assistant. How can I help you find the right assessment solutions today?";
pub const RESULTS_INTRO: &str = "Based on your request, here are some recommended assessments:";
pub const NO_MATCHES_REPLY: &str = "I couldn't find any assessments matching that request. Try describing the role or skills differently.";
pub const ERROR_REPLY: &str = "I apologize, but I encountered an error while fetching recommendations. Please try again.";

/// Messages of one chat session, greeting first.
///
/// `generation` changes on every `clear`, so a reply that was requested
/// before the clear can be recognised and dropped.
#[derive(Debug, Clone)]
pub struct ChatTranscript {
    messages: Vec<ChatMessage>,
    next_id: u64,
    generation: u64,
}

#[derive(Serialize)]
struct TranscriptExport<'a> {
    exported_at: String,
    messages: &'a [ChatMessage],
}

impl ChatTranscript {
    pub fn new() -> Self {
        let mut transcript = Self { messages: Vec::new(), next_id: 1, generation: 0 };
        transcript.push_greeting();
        transcript
    }

    fn push_greeting(&mut self) {
        let greeting = ChatMessage {
            id: self.take_id(),
            role: Role::System,
            content: GREETING.to_string(),
            timestamp: Utc::now() - Duration::minutes(5),
            recommendations: None,
        };
        self.messages.push(greeting);
    }

    fn take_id(&mut self) -> String {
        let id = self.next_id;
        self.next_id += 1;
        id.to_string()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn push_user(&mut self, content: &str) {
        let id = self.take_id();
        self.messages.push(ChatMessage {
            id,
            role: Role::User,
            content: content.to_string(),
            timestamp: Utc::now(),
            recommendations: None,
        });
    }

    pub fn push_system(&mut self, content: &str, recommendations: Option<Vec<Assessment>>) {
        let id = self.take_id();
        self.messages.push(ChatMessage {
            id,
            role: Role::System,
            content: content.to_string(),
            timestamp: Utc::now(),
            recommendations,
        });
    }

    /// Append the assistant's reply for `outcome` if the transcript has not
    /// been cleared since `generation`. Returns whether anything was added.
    pub fn apply_outcome(&mut self, generation: u64, outcome: &FlowOutcome) -> bool {
        if generation != self.generation {
            return false;
        }
        match outcome {
            FlowOutcome::Results(r) => {
                self.push_system(RESULTS_INTRO, Some(r.recommended_assessments.clone()));
            }
            FlowOutcome::NoMatches(r) => {
                let text = if r.message.trim().is_empty() { NO_MATCHES_REPLY } else { r.message.as_str() };
                self.push_system(text, Some(Vec::new()));
            }
            FlowOutcome::Failed(_) => self.push_system(ERROR_REPLY, None),
            FlowOutcome::Cancelled | FlowOutcome::Rejected(_) => return false,
        }
        true
    }

    /// Back to just the greeting.
    pub fn clear(&mut self) {
        self.messages.clear();
        self.generation += 1;
        self.push_greeting();
    }

    pub fn export_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&TranscriptExport {
            exported_at: Utc::now().to_rfc3339(),
            messages: &self.messages,
        })
    }
}

impl Default for ChatTranscript {
    fn default() -> Self {
        Self::new()
    }
}
