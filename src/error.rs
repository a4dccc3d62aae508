use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppInfoError>;

#[derive(Debug, Error)]
pub enum AppInfoError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
