use chrono::{DateTime, Local, NaiveDateTime, Utc};

use crate::common::ChatMessage;

/// Hiển thị khi `created_at` không đọc được.
pub const UNKNOWN_TIME: &str = "--:--";

/// Which side of the conversation a message is drawn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Own,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageBlock {
    pub username: String,
    pub content: String,
    /// Giờ:phút theo múi giờ máy.
    pub time: String,
    pub side: Side,
}

/// Một mục trong danh sách tin nhắn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Message(MessageBlock),
    /// Dòng hệ thống, hiển thị mờ.
    Notice(String),
}

/// Where rendered blocks and user-facing alerts go.
pub trait RenderSink {
    fn append(&mut self, block: Block);

    /// Pin the view to the newest block.
    fn scroll_to_bottom(&mut self);

    /// Blocking notice the user has to acknowledge.
    fn alert(&mut self, text: String);
}

/// Display heuristic only: the server does not verify usernames.
pub fn is_own_message(msg: &ChatMessage, local_display_name: &str) -> bool {
    msg.username == local_display_name
}

pub fn render_message(msg: &ChatMessage, local_display_name: &str) -> MessageBlock {
    let side = if is_own_message(msg, local_display_name) {
        Side::Own
    } else {
        Side::Other
    };

    MessageBlock {
        username: msg.username.clone(),
        content: msg.content.clone(),
        time: format_time(&msg.created_at),
        side,
    }
}

pub fn format_time(created_at: &str) -> String {
    match parse_timestamp(created_at) {
        Some(at) => at.with_timezone(&Local).format("%H:%M").to_string(),
        None => UNKNOWN_TIME.to_string(),
    }
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(at) = DateTime::parse_from_rfc3339(raw) {
        return Some(at.with_timezone(&Utc));
    }

    // isoformat() không kèm múi giờ: coi như UTC
    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, pattern) {
            return Some(naive.and_utc());
        }
    }

    // epoch milliseconds
    if let Ok(millis) = raw.parse::<i64>() {
        return DateTime::from_timestamp_millis(millis);
    }
    match raw.parse::<f64>() {
        Ok(millis) if millis.is_finite() => DateTime::from_timestamp_millis(millis as i64),
        _ => None,
    }
}
