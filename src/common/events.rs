/// Sự kiện từ tầng mạng gửi lên UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NetworkEvent {
    /// Handshake WebSocket hoàn tất.
    Opened,
    /// Một frame văn bản từ server, theo đúng thứ tự nhận.
    FrameReceived(String),
}
