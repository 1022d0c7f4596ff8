use thiserror::Error;

/// Failure raised by a user-registered trigger.
///
/// The scheduler logs these and treats the trigger as not firing; they
/// never propagate out of [`update`](crate::NotificationScheduler::update).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TriggerError {
    #[error("trigger input unavailable: {0}")]
    Unavailable(String),

    #[error("trigger failed: {0}")]
    Failed(String),
}

pub type TriggerResult<T> = Result<T, TriggerError>;
