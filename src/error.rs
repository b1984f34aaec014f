use thiserror::Error;

/// Errors surfaced by the semantic core.
///
/// These cover operations that are reachable in principle but outside the
/// supported fragment, and ill-kinded inputs detected during substitution or
/// concept expansion. A failed subsumption query is not an error; `subsumes`
/// reports it as `Ok(false)`.
#[derive(Debug, Error)]
pub enum Error {
    #[error("unsupported operation '{operation}' on {term}")]
    Unsupported {
        operation: &'static str,
        term: String,
    },

    #[error("kind mismatch: expected {expected}, found {found}")]
    KindMismatch {
        expected: &'static str,
        found: String,
    },

    #[error("concept '{concept}' has no expression definition")]
    MissingDefinition { concept: String },
}

pub type Result<T> = std::result::Result<T, Error>;
