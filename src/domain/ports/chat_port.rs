use crate::domain::entities::conversation::ChatTurn;

#[async_trait::async_trait]
pub trait ChatProvider: Send + Sync {
    /// Send the ordered message list and return the model's top reply
    /// verbatim.
    async fn complete(&self, messages: &[ChatTurn]) -> Result<String, String>;
}
