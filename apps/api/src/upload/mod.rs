// Batch upload: filename sanitization, uploads-directory storage and the
// orchestration state machine that turns a submission into session state.

pub mod filename;
pub mod orchestrator;
pub mod storage;
