use tokio::runtime::Handle;

use crate::DeliveryScheduler;

/// A scheduler that orders delivery after a designated runtime has observed it.
///
/// The hop completes only once the target runtime has run a task, so a caller
/// awaiting an operation resumes after that context has been scheduled.
pub struct RuntimeScheduler {
    /// The handle of the runtime delivery is ordered on.
    handle: Handle,
}

impl RuntimeScheduler {
    /// Creates a new `RuntimeScheduler` instance with the given runtime handle.
    pub fn new(handle: Handle) -> Self {
        Self { handle }
    }
}

#[async_trait::async_trait]
impl DeliveryScheduler for RuntimeScheduler {
    async fn reschedule(&self) {
        // A completed spawn guarantees the target runtime ran between the
        // terminal event being computed and it being delivered.
        let _ = self.handle.spawn(async {}).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn reschedule_completes_on_the_current_runtime() {
        let scheduler = RuntimeScheduler::new(Handle::current());

        scheduler.reschedule().await;
    }

    #[tokio::test]
    async fn reschedule_completes_on_a_dedicated_runtime() {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
            .unwrap();
        let scheduler = RuntimeScheduler::new(runtime.handle().clone());

        scheduler.reschedule().await;

        runtime.shutdown_background();
    }
}
