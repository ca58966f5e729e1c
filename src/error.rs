use thiserror::Error;

/// Top-level error type for the spliner engine.
#[derive(Debug, Error)]
pub enum SplinerError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Evaluation(#[from] EvaluationError),

    #[error(transparent)]
    Session(#[from] SessionError),
}

/// Errors in startup configuration. These are fatal: the embedding
/// application should refuse to start a session from an invalid config.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(
        "unknown spline family `{name}` (expected one of Hermite, Bezier, BSpline, CatmullRom, MINVO)"
    )]
    UnknownFamily { name: String },
}

/// Contract violations inside segment evaluation. A correct grouper never
/// produces these; they indicate a bug in the caller, not bad user input.
#[derive(Debug, Error)]
pub enum EvaluationError {
    #[error("control-point window has {actual} points, expected {expected}")]
    ControlPointCount { expected: usize, actual: usize },
}

/// Recoverable per-event session errors. The interactive session must never
/// terminate from these; callers report them and carry on.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("nothing to undo: point history is empty")]
    EmptyHistory,
}

/// Convenience type alias for results using [`SplinerError`].
pub type Result<T> = std::result::Result<T, SplinerError>;
