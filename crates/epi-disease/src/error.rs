use thiserror::Error;

#[derive(Debug, Error)]
pub enum DiseaseError {
    #[error("disease parameter `{name}` = {value}: {reason}")]
    InvalidParameter {
        name:   &'static str,
        value:  f64,
        reason: &'static str,
    },
}

pub type DiseaseResult<T> = Result<T, DiseaseError>;
