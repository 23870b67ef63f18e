use thiserror::Error;
use tokio_tungstenite::tungstenite;

use crate::common::wire::{InboundFrame, OutboundEnvelope, decode_frame};
use crate::network::Transport;

use super::render::{Block, RenderSink, render_message};

pub const SEND_REJECTED_NOTICE: &str =
    "The connection to the chat was lost. Restart the client to reconnect.";

#[derive(Debug, Error)]
pub enum ClientError {
    /// Gửi khi socket chưa mở (hoặc đã đóng). Tin nhắn bị bỏ, không xếp hàng.
    #[error("{}", SEND_REJECTED_NOTICE)]
    SendRejected,
    #[error("Failed to encode outbound frame: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("Failed to connect: {0}")]
    Connect(#[source] tungstenite::Error),
    #[error("Socket error: {0}")]
    Socket(#[source] tungstenite::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendOutcome {
    /// Ô nhập rỗng hoặc chỉ có khoảng trắng.
    Skipped,
    Sent,
    Rejected,
}

/// Wires one socket session to one message view.
pub struct ChatClient<T> {
    transport: T,
    display_name: String,
}

impl<T: Transport> ChatClient<T> {
    pub fn new(transport: T, display_name: impl Into<String>) -> Self {
        Self {
            transport,
            display_name: display_name.into(),
        }
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn handle_open(&self) {
        log::info!("Connected to chat WebSocket as {}", self.display_name);
    }

    /// Sends the input as one frame and clears it. The input is left as-is
    /// unless the frame was handed to the socket.
    pub fn send(&self, input: &mut String) -> Result<SendOutcome, ClientError> {
        if input.trim().is_empty() {
            return Ok(SendOutcome::Skipped);
        }
        if !self.transport.state().is_open() {
            return Err(ClientError::SendRejected);
        }

        let frame = OutboundEnvelope {
            username: &self.display_name,
            content: input.as_str(),
        }
        .encode()?;

        self.transport.send(frame)?;
        input.clear();
        Ok(SendOutcome::Sent)
    }

    /// Entry point for the send button and the Enter key.
    pub fn submit<S: RenderSink>(&self, input: &mut String, sink: &mut S) -> SendOutcome {
        match self.send(input) {
            Ok(outcome) => outcome,
            Err(err) => {
                log::warn!("Message not sent: {err}");
                sink.alert(err.to_string());
                SendOutcome::Rejected
            }
        }
    }

    pub fn handle_frame<S: RenderSink>(&self, text: &str, sink: &mut S) {
        match decode_frame(text) {
            InboundFrame::History(items) => {
                log::debug!("History batch with {} messages", items.len());
                for item in &items {
                    sink.append(Block::Message(render_message(item, &self.display_name)));
                }
            }
            InboundFrame::Message(item) => {
                sink.append(Block::Message(render_message(&item, &self.display_name)));
            }
            InboundFrame::Notice(raw) => sink.append(Block::Notice(raw)),
        }
        sink.scroll_to_bottom();
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use super::*;
    use crate::chat::render::{Side, UNKNOWN_TIME};
    use crate::common::ConnectionState;

    struct FakeTransport {
        state: Cell<ConnectionState>,
        sent: RefCell<Vec<String>>,
    }

    impl FakeTransport {
        fn new(state: ConnectionState) -> Self {
            Self {
                state: Cell::new(state),
                sent: RefCell::new(Vec::new()),
            }
        }
    }

    impl Transport for FakeTransport {
        fn state(&self) -> ConnectionState {
            self.state.get()
        }

        fn send(&self, text: String) -> Result<(), ClientError> {
            if !self.state.get().is_open() {
                return Err(ClientError::SendRejected);
            }
            self.sent.borrow_mut().push(text);
            Ok(())
        }
    }

    #[derive(Default)]
    struct FakeSink {
        blocks: Vec<Block>,
        scrolls: usize,
        alerts: Vec<String>,
    }

    impl RenderSink for FakeSink {
        fn append(&mut self, block: Block) {
            self.blocks.push(block);
        }

        fn scroll_to_bottom(&mut self) {
            self.scrolls += 1;
        }

        fn alert(&mut self, text: String) {
            self.alerts.push(text);
        }
    }

    fn client(state: ConnectionState) -> ChatClient<FakeTransport> {
        ChatClient::new(FakeTransport::new(state), "You")
    }

    fn sent_json(client: &ChatClient<FakeTransport>) -> Vec<serde_json::Value> {
        client
            .transport()
            .sent
            .borrow()
            .iter()
            .map(|text| serde_json::from_str(text).unwrap())
            .collect()
    }

    #[test]
    fn send_while_open_emits_one_frame_and_clears() {
        let client = client(ConnectionState::Open);
        for text in ["hello", "  padded  ", "multi word message", "ã ç 🙂"] {
            let mut input = text.to_string();
            assert_eq!(client.send(&mut input).unwrap(), SendOutcome::Sent);
            assert!(input.is_empty());
        }

        let frames = sent_json(&client);
        assert_eq!(frames.len(), 4);
        assert_eq!(frames[1]["content"], "  padded  ");
        assert!(frames.iter().all(|f| f["username"] == "You"));
    }

    #[test]
    fn blank_input_is_noop() {
        let client = client(ConnectionState::Open);
        let mut sink = FakeSink::default();
        for text in ["", " ", "\t\n  "] {
            let mut input = text.to_string();
            assert_eq!(client.submit(&mut input, &mut sink), SendOutcome::Skipped);
            assert_eq!(input, text);
        }
        assert!(client.transport().sent.borrow().is_empty());
        assert!(sink.alerts.is_empty());
    }

    #[test]
    fn blank_input_is_noop_even_when_closed() {
        let client = client(ConnectionState::Closed);
        let mut sink = FakeSink::default();
        let mut input = "   ".to_string();
        assert_eq!(client.submit(&mut input, &mut sink), SendOutcome::Skipped);
        assert!(sink.alerts.is_empty());
    }

    #[test]
    fn send_while_not_open_alerts_and_keeps_input() {
        for state in [ConnectionState::Connecting, ConnectionState::Closed] {
            let client = client(state);
            let mut sink = FakeSink::default();
            let mut input = "hello".to_string();

            assert_eq!(client.submit(&mut input, &mut sink), SendOutcome::Rejected);
            assert_eq!(input, "hello");
            assert_eq!(sink.alerts, [SEND_REJECTED_NOTICE]);
            assert!(sink.blocks.is_empty());
            assert!(client.transport().sent.borrow().is_empty());
        }
    }

    #[test]
    fn socket_closing_later_makes_sends_fail() {
        let client = client(ConnectionState::Open);
        let mut sink = FakeSink::default();

        let mut input = "first".to_string();
        assert_eq!(client.submit(&mut input, &mut sink), SendOutcome::Sent);

        client.transport().state.set(ConnectionState::Closed);
        let mut input = "second".to_string();
        assert_eq!(client.submit(&mut input, &mut sink), SendOutcome::Rejected);
        assert_eq!(input, "second");
        assert_eq!(client.transport().sent.borrow().len(), 1);
    }

    #[test]
    fn history_appends_in_order() {
        let client = client(ConnectionState::Open);
        let mut sink = FakeSink::default();
        client.handle_frame(
            r#"{"type":"history","items":[
                {"username":"ana","content":"1","created_at":"2024-05-01T10:00:00Z"},
                {"username":"You","content":"2","created_at":"2024-05-01T10:01:00Z"},
                {"username":"bia","content":"3","created_at":"2024-05-01T10:02:00Z"}
            ]}"#,
            &mut sink,
        );

        let rendered: Vec<_> = sink
            .blocks
            .iter()
            .map(|block| match block {
                Block::Message(m) => (m.content.as_str(), m.side),
                Block::Notice(text) => panic!("unexpected notice {text}"),
            })
            .collect();
        assert_eq!(
            rendered,
            [("1", Side::Other), ("2", Side::Own), ("3", Side::Other)]
        );
        assert_eq!(sink.scrolls, 1);
    }

    #[test]
    fn null_timestamp_does_not_drop_history() {
        let client = client(ConnectionState::Open);
        let mut sink = FakeSink::default();
        client.handle_frame(
            r#"{"type":"history","items":[
                {"username":"ana","content":"1","created_at":"2024-05-01T10:00:00Z"},
                {"username":"bia","content":"2","created_at":null},
                {"username":"You","content":"3","created_at":"2024-05-01T10:02:00Z"}
            ]}"#,
            &mut sink,
        );

        assert_eq!(sink.blocks.len(), 3);
        match &sink.blocks[1] {
            Block::Message(m) => {
                assert_eq!(m.content, "2");
                assert_eq!(m.time, UNKNOWN_TIME);
            }
            Block::Notice(text) => panic!("unexpected notice {text}"),
        }
    }

    #[test]
    fn live_message_appends_one_block() {
        let client = client(ConnectionState::Open);
        let mut sink = FakeSink::default();
        client.handle_frame(
            r#"{"type":"message","item":{"username":"You","content":"oi","created_at":"2024-05-01T10:00:00Z"}}"#,
            &mut sink,
        );

        assert_eq!(sink.blocks.len(), 1);
        assert!(matches!(&sink.blocks[0], Block::Message(m) if m.side == Side::Own));
        assert_eq!(sink.scrolls, 1);
    }

    #[test]
    fn non_json_frame_is_one_notice() {
        let client = client(ConnectionState::Open);
        let mut sink = FakeSink::default();
        client.handle_frame("server restarting", &mut sink);

        assert_eq!(sink.blocks, [Block::Notice("server restarting".to_string())]);
        assert_eq!(sink.scrolls, 1);
    }

    #[test]
    fn frames_render_in_arrival_order() {
        let client = client(ConnectionState::Open);
        let mut sink = FakeSink::default();
        client.handle_frame("welcome", &mut sink);
        client.handle_frame(
            r#"{"type":"message","item":{"username":"ana","content":"oi","created_at":"2024-05-01T10:00:00Z"}}"#,
            &mut sink,
        );
        client.handle_frame("bye", &mut sink);

        assert!(matches!(&sink.blocks[0], Block::Notice(t) if t == "welcome"));
        assert!(matches!(&sink.blocks[1], Block::Message(m) if m.content == "oi"));
        assert!(matches!(&sink.blocks[2], Block::Notice(t) if t == "bye"));
        assert_eq!(sink.scrolls, 3);
    }
}
