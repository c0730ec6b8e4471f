use async_trait::async_trait;

/// Delivers a formatted price message somewhere a person will see it.
#[async_trait]
pub trait NotifierTrait: Send + Sync {
    /// Short identifier used in logs.
    fn name(&self) -> &str;

    /// Send `text`. Returns whether delivery was accepted; never panics and
    /// never raises, since notification is best-effort.
    async fn send(&self, text: &str) -> bool;
}
