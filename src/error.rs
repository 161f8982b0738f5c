/// Engine-level errors
///
/// The taxonomy is deliberately narrow: the engine performs no I/O, so the
/// only failures are unusable per-call options or an activity payload that is
/// not even an object. Everything else degrades instead of failing (skipped
/// entries, empty results, or the fallback ranking).
#[derive(thiserror::Error, Debug)]
pub enum EngineError {
    #[error("Invalid options: {0}")]
    InvalidOptions(String),

    #[error("Invalid activity payload: {0}")]
    InvalidActivity(String),
}

pub type EngineResult<T> = Result<T, EngineError>;
