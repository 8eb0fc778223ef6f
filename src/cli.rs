//! Terminal-side behaviour of the `recommend` and `chat` commands, kept out of
//! the binary so it can be driven without a console.

use std::future::Future;
use std::sync::Arc;
use thiserror::Error;
use tokio_util::sync::CancellationToken;

use crate::chat::ChatTranscript;
use crate::flow::{FlowOutcome, QueryFlow, Recommender, Rejection};

pub const DEFAULT_EXPORT_FILE: &str = "assessaid-chat.json";

/// Exit status reported by the `recommend` command.
pub fn exit_code(outcome: &FlowOutcome) -> i32 {
    match outcome {
        FlowOutcome::Results(_) | FlowOutcome::NoMatches(_) => 0,
        FlowOutcome::Failed(_) | FlowOutcome::Rejected(Rejection::Busy) => 1,
        FlowOutcome::Rejected(Rejection::Empty) => 2,
        FlowOutcome::Cancelled => 130,
    }
}

/// One run of the query flow. Resolving `interrupt` first aborts the request.
pub async fn recommend_once<F>(recommender: Arc<dyn Recommender>, query: &str, interrupt: F) -> FlowOutcome
where
    F: Future,
{
    let root = CancellationToken::new();
    let flow = QueryFlow::new("cli", recommender, root.clone());
    let run = flow.submit(query);
    tokio::pin!(run);
    tokio::select! {
        outcome = &mut run => outcome,
        _ = interrupt => {
            root.cancel();
            run.await
        }
    }
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Failed to encode transcript: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Failed to write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// A line typed at the chat prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatCommand {
    Skip,
    Quit,
    Help,
    Clear,
    Export(String),
    Ask(String),
}

impl ChatCommand {
    pub fn parse(line: &str) -> Self {
        let input = line.trim();
        match input {
            "" => ChatCommand::Skip,
            "/quit" | "/exit" => ChatCommand::Quit,
            "/help" => ChatCommand::Help,
            "/clear" => ChatCommand::Clear,
            cmd if cmd == "/export" || cmd.starts_with("/export ") => {
                let path = cmd.trim_start_matches("/export").trim();
                let path = if path.is_empty() { DEFAULT_EXPORT_FILE } else { path };
                ChatCommand::Export(path.to_string())
            }
            question => ChatCommand::Ask(question.to_string()),
        }
    }

    pub fn is_question(&self) -> bool {
        matches!(self, ChatCommand::Ask(_))
    }
}

/// What handling a prompt line did.
#[derive(Debug)]
pub enum ReplEvent {
    Skipped,
    Quit,
    Help,
    Cleared,
    Exported(String),
    /// The flow finished; `appended` is false when the reply was dropped.
    Answered { outcome: FlowOutcome, appended: bool },
}

/// The terminal chat: one flow plus its transcript.
pub struct ChatRepl {
    flow: QueryFlow,
    transcript: ChatTranscript,
}

impl ChatRepl {
    pub fn new(recommender: Arc<dyn Recommender>, parent: CancellationToken) -> Self {
        Self {
            flow: QueryFlow::new("chat", recommender, parent),
            transcript: ChatTranscript::new(),
        }
    }

    pub fn transcript(&self) -> &ChatTranscript {
        &self.transcript
    }

    /// Run one command. A question waits for the reply unless `interrupt`
    /// resolves first, which cancels it.
    pub async fn handle<F>(&mut self, command: ChatCommand, interrupt: F) -> Result<ReplEvent, CliError>
    where
        F: Future,
    {
        match command {
            ChatCommand::Skip => Ok(ReplEvent::Skipped),
            ChatCommand::Quit => Ok(ReplEvent::Quit),
            ChatCommand::Help => Ok(ReplEvent::Help),
            ChatCommand::Clear => {
                self.flow.cancel();
                self.transcript.clear();
                Ok(ReplEvent::Cleared)
            }
            ChatCommand::Export(path) => {
                let body = self.transcript.export_json()?;
                tokio::fs::write(&path, body)
                    .await
                    .map_err(|source| CliError::Write { path: path.clone(), source })?;
                Ok(ReplEvent::Exported(path))
            }
            ChatCommand::Ask(question) => Ok(self.ask(&question, interrupt).await),
        }
    }

    async fn ask<F>(&mut self, question: &str, interrupt: F) -> ReplEvent
    where
        F: Future,
    {
        let ticket = match self.flow.begin(question) {
            Ok(t) => t,
            Err(rejection) => {
                return ReplEvent::Answered { outcome: FlowOutcome::Rejected(rejection), appended: false };
            }
        };
        self.transcript.push_user(ticket.query());
        let generation = self.transcript.generation();

        let flow = &self.flow;
        let run = ticket.run();
        tokio::pin!(run);
        let outcome = tokio::select! {
            outcome = &mut run => outcome,
            _ = interrupt => {
                flow.cancel();
                run.await
            }
        };

        let appended = self.transcript.apply_outcome(generation, &outcome);
        ReplEvent::Answered { outcome, appended }
    }
}
