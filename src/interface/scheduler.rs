/// A trait for redirecting result delivery onto a designated execution context.
///
/// The façade awaits [DeliveryScheduler::reschedule] after the terminal result
/// of an operation (value or error) has been computed and before it is
/// returned, so callers observe delivery on the scheduler's context.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait DeliveryScheduler: Sync + Send {
    /// Moves the continuation of the awaiting caller onto the scheduler's context.
    async fn reschedule(&self);
}
