// In-memory session state: the documents and scores of the current batch,
// the activity log, derived stats and pending flash notices.

pub mod activity;
pub mod flash;
pub mod models;
pub mod stats;
pub mod store;
