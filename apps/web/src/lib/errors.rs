use bookstall_client::StoreError;
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppError {
    Config(String),
    Storage(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(message) => write!(formatter, "Config error: {message}"),
            AppError::Storage(message) => write!(formatter, "Storage error: {message}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        Self::Storage(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_kind() {
        assert_eq!(
            AppError::Config("bad base".to_string()).to_string(),
            "Config error: bad base"
        );
        let err = AppError::from(StoreError::Write("quota exceeded".to_string()));
        assert_eq!(
            err.to_string(),
            "Storage error: session storage write failed: quota exceeded"
        );
    }
}
