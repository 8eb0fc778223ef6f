//! The recommendation query flow shared by the landing search and the chat
//! assistant.

pub mod recommender;
pub mod query_flow;

pub use recommender::Recommender;
pub use query_flow::{normalize_query, FlowOutcome, QueryFlow, Rejection, Ticket};
