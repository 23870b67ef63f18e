/// Lệnh UI gửi xuống tầng mạng.
#[derive(Debug, Clone)]
pub enum NetworkCommand {
    /// Một frame văn bản đã được mã hóa JSON, gửi nguyên vẹn lên server.
    SendText(String),
}
