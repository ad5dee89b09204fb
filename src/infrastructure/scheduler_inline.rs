use crate::DeliveryScheduler;

/// A scheduler that delivers results on the calling context, without any hop.
///
/// Suitable for servers and tests, where no execution context is privileged.
#[derive(Debug, Default)]
pub struct InlineScheduler;

#[async_trait::async_trait]
impl DeliveryScheduler for InlineScheduler {
    async fn reschedule(&self) {}
}
