use thiserror::Error;
use crate::domain::error::DomainError;
use crate::infrastructure::error::InfrastructureError;

#[derive(Error, Debug)]
pub enum ApplicationError {
    // 設定ファイルや CLI 引数の値が不正
    #[error("Invalid augmentation config: {0}")]
    ConfigurationError(String),

    #[error("Cannot augment sample: {0}")]
    DomainError(#[from] DomainError),

    #[error("Failed to read or write sample data: {0}")]
    InfrastructureError(#[from] InfrastructureError),
}
