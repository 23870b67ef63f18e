//! JSON frames exchanged with the chat server.

use serde::{Deserialize, Serialize};

use super::types::ChatMessage;

/// Frame client gửi lên server.
#[derive(Debug, Clone, Serialize)]
pub struct OutboundEnvelope<'a> {
    pub username: &'a str,
    pub content: &'a str,
}

impl OutboundEnvelope<'_> {
    pub fn encode(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Frame server gửi xuống, phân biệt bằng trường `type`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ServerEnvelope {
    History { items: Vec<ChatMessage> },
    Message { item: ChatMessage },
}

/// A decoded inbound frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InboundFrame {
    History(Vec<ChatMessage>),
    Message(ChatMessage),
    /// Raw frame text that is not a chat envelope. Malformed data and server
    /// status lines both land here; the protocol gives no way to tell them apart.
    /// This includes valid JSON of another shape (unknown `type`, bare scalars),
    /// which the browser client used to drop silently.
    Notice(String),
}

pub fn decode_frame(text: &str) -> InboundFrame {
    match serde_json::from_str::<ServerEnvelope>(text) {
        Ok(ServerEnvelope::History { items }) => InboundFrame::History(items),
        Ok(ServerEnvelope::Message { item }) => InboundFrame::Message(item),
        Err(err) => {
            log::debug!("Frame is not a chat envelope ({err}); showing as notice");
            InboundFrame::Notice(text.to_string())
        }
    }
}
