use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RecordError {
    #[error("expected {expected} person records, got {actual}")]
    WrongRecordCount { expected: usize, actual: usize },

    #[error("two person records share the birth year {year}")]
    DuplicateYear { year: i32 },

    #[error("identifier '{id}' was generated twice")]
    DuplicateIdentifier { id: Uuid },

    #[error("person not found with id '{id}'")]
    NotFound { id: Uuid },

    #[error("cannot pick the oldest person from an empty collection")]
    EmptyCollection,
}

pub type Result<T> = std::result::Result<T, RecordError>;
