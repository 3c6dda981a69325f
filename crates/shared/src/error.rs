#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Validate(#[from] validator::ValidationErrors),

    /// Transport-level catalog failure, distinct from "no match".
    /// Callers may retry; inside a batch it degrades a single item.
    #[error("catalog unavailable: {0}")]
    Catalog(String),

    #[error("{0}")]
    Store(String),

    #[error("{0}")]
    Unknown(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[macro_export]
macro_rules! bail {
    ($msg:literal $(,)?) => {
        return Err($crate::Error::Store(format!($msg)))
    };
    ($err:expr $(,)?) => {
        return Err($crate::Error::Store(format!($err)))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::Error::Store(format!($fmt, $($arg)*)))
    };
}
