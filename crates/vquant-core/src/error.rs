use thiserror::Error;

pub type Result<T> = std::result::Result<T, VqError>;

#[derive(Debug, Error)]
pub enum VqError {
    #[error("invalid profile: {0}")]
    InvalidProfile(String),

    #[error("profile format error: {0}")]
    ProfileFormat(String),

    #[error("config error: {0}")]
    Config(String),
}
