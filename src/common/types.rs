use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Domain model đại diện một tin nhắn chat do server gửi xuống.
///
/// `created_at` is kept as the text the server sent. Servers emit either an
/// ISO-8601 string or epoch milliseconds; a bare JSON number is folded into
/// its decimal string so formatting has a single input type. A missing, null
/// or otherwise unusable value becomes an empty string so one bad timestamp
/// never drops the message it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub username: String,
    pub content: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub created_at: String,
}

/// Trạng thái kết nối WebSocket mà UI quan sát được.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionState {
    #[default]
    Connecting,
    Open,
    Closed,
}

impl ConnectionState {
    pub fn is_open(self) -> bool {
        self == Self::Open
    }
}

impl fmt::Display for ConnectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Connecting => "connecting",
            Self::Open => "connected",
            Self::Closed => "disconnected",
        };
        f.write_str(label)
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
        Other(serde_json::Value),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(text) => text,
        Raw::Number(number) => number.to_string(),
        Raw::Other(_) => String::new(),
    })
}
