// Skill scoring: text normalization, vocabulary matching, per-document scoring
// and ranking. Everything here is pure and synchronous; callers own the state.

pub mod normalize;
pub mod ranking;
pub mod scorer;
pub mod vocabulary;
