pub mod api;
pub mod cli;
pub mod config;
pub mod logging;
mod requester;
mod store;

pub use requester::AnalysisRequester;
pub use store::{ProfileStore, SubmitOutcome};
