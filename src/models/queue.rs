use serde::Deserialize;

/// One delivery unit from the queue: an ordered set of independent
/// messages. The envelope mirrors the queue-event JSON the trigger
/// delivers; ordering within a batch carries no semantics.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QueueBatch {
    #[serde(rename = "Records", default)]
    pub records: Vec<QueueMessage>,
}

/// One raw queue message. Only the id (for log correlation) and the body
/// matter to the relay; other envelope attributes are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct QueueMessage {
    #[serde(rename = "messageId", default)]
    pub message_id: String,
    #[serde(default)]
    pub body: String,
}
