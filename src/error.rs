//! Closed error type shared by all services
//!
//! The services never report state as free-form strings; every failure is one
//! of these variants and the gateway derives the HTTP status from the variant.

use std::future::Future;
use std::time::Duration;

/// Outcome classification for a service operation
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// Malformed or incomplete input, detected before any side effect
    #[error("{0}")]
    Validation(String),

    /// A uniqueness rule was violated (e.g. brand title already taken)
    #[error("{0}")]
    Duplicate(String),

    /// A referenced entity does not exist
    #[error("{0}")]
    NotFound(String),

    /// Storage or infrastructure failure, including timeouts
    #[error("{0}")]
    System(String),
}

impl ServiceError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn duplicate(msg: impl Into<String>) -> Self {
        Self::Duplicate(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn system(msg: impl Into<String>) -> Self {
        Self::System(msg.into())
    }
}

impl From<sqlx::Error> for ServiceError {
    fn from(err: sqlx::Error) -> Self {
        ServiceError::System(err.to_string())
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Run a service operation under a fixed deadline.
///
/// Expiry aborts the operation and is reported as a system error; no retry
/// is attempted.
pub async fn bounded<T, F>(limit: Duration, op: F) -> ServiceResult<T>
where
    F: Future<Output = ServiceResult<T>>,
{
    match tokio::time::timeout(limit, op).await {
        Ok(result) => result,
        Err(_) => Err(ServiceError::System(format!(
            "operation timed out after {}ms",
            limit.as_millis()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_bounded_passes_through_result() {
        let ok: ServiceResult<i32> = bounded(Duration::from_secs(1), async { Ok(7) }).await;
        assert_eq!(ok.unwrap(), 7);

        let err: ServiceResult<i32> = bounded(Duration::from_secs(1), async {
            Err(ServiceError::not_found("missing"))
        })
        .await;
        assert!(matches!(err, Err(ServiceError::NotFound(_))));
    }

    #[tokio::test(start_paused = true)]
    async fn test_bounded_expiry_is_system_error() {
        let result: ServiceResult<()> = bounded(Duration::from_millis(100), async {
            tokio::time::sleep(Duration::from_secs(10)).await;
            Ok(())
        })
        .await;

        match result {
            Err(ServiceError::System(msg)) => assert!(msg.contains("timed out")),
            other => panic!("expected system error, got {:?}", other),
        }
    }

    #[test]
    fn test_sqlx_error_maps_to_system() {
        let err: ServiceError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, ServiceError::System(_)));
    }
}
