use thiserror::Error;

#[derive(Error, Debug)]
pub enum EnvError {
    #[error("invalid action {action}: maps to symbol id {id}, outside the alphabet")]
    InvalidAction { action: i64, id: i64 },

    #[error("episode already finished at length {length}; call reset")]
    EpisodeFinished { length: usize },

    #[error("unknown symbol id {0}")]
    UnknownSymbol(u8),

    #[error("unknown symbol name {0:?}")]
    UnknownSymbolName(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("no environment registered under {0:?}")]
    UnknownEnvId(String),

    #[error("invalid environment options: {0}")]
    InvalidOptions(#[from] serde_json::Error),

    #[error("action count {got} doesn't match environment count {expected}")]
    ActionCountMismatch { expected: usize, got: usize },
}
