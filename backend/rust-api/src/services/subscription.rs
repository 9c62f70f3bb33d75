use tokio::task::JoinHandle;

/// Handle to a live subscription. The callback stops firing once the handle
/// is dropped or [`Subscription::unsubscribe`] is called.
#[must_use = "dropping a Subscription cancels it immediately"]
pub struct Subscription {
    task: JoinHandle<()>,
}

impl Subscription {
    pub(crate) fn new(task: JoinHandle<()>) -> Self {
        Self { task }
    }

    pub fn unsubscribe(self) {
        drop(self);
    }

    /// False once the store has closed or the subscription was cancelled.
    pub fn is_active(&self) -> bool {
        !self.task.is_finished()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.task.abort();
    }
}
