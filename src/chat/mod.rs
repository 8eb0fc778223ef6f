pub mod transcript;

pub use transcript::{ChatTranscript, ERROR_REPLY, GREETING, NO_MATCHES_REPLY, RESULTS_INTRO};
