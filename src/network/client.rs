use futures::{SinkExt, StreamExt};
use tokio::sync::{mpsc, watch};
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::Message;

use crate::chat::ClientError;
use crate::common::{ConnectionState, NetworkCommand, NetworkEvent};

/// Socket task: một kết nối WebSocket, không tự kết nối lại.
pub struct WsClient {
    url: String,
    event_sender: mpsc::Sender<NetworkEvent>,
    command_receiver: mpsc::Receiver<NetworkCommand>,
    state: watch::Sender<ConnectionState>,
}

impl WsClient {
    pub fn new(
        url: String,
        event_sender: mpsc::Sender<NetworkEvent>,
        command_receiver: mpsc::Receiver<NetworkCommand>,
        state: watch::Sender<ConnectionState>,
    ) -> Self {
        Self {
            url,
            event_sender,
            command_receiver,
            state,
        }
    }

    pub async fn run(mut self) -> Result<(), ClientError> {
        log::info!("Connecting to {}", self.url);
        self.state.send_replace(ConnectionState::Connecting);

        let (ws_stream, _) = match connect_async(self.url.as_str()).await {
            Ok(connected) => connected,
            Err(err) => {
                self.state.send_replace(ConnectionState::Closed);
                return Err(ClientError::Connect(err));
            }
        };

        self.state.send_replace(ConnectionState::Open);
        if let Err(err) = self.event_sender.send(NetworkEvent::Opened).await {
            log::warn!("Failed to notify UI about open socket: {err:?}");
        }

        let (mut write, mut read) = ws_stream.split();
        let result = loop {
            tokio::select! {
                command = self.command_receiver.recv() => {
                    match command {
                        Some(NetworkCommand::SendText(text)) => {
                            log::debug!("Sending frame ({} bytes)", text.len());
                            if let Err(err) = write.send(Message::text(text)).await {
                                break Err(ClientError::Socket(err));
                            }
                        }
                        None => {
                            // UI đã đóng
                            log::info!("Command channel closed; closing socket");
                            if let Err(err) = write.close().await {
                                log::debug!("Close handshake failed: {err}");
                            }
                            break Ok(());
                        }
                    }
                }
                frame = read.next() => {
                    match frame {
                        Some(Ok(Message::Text(text))) => {
                            self.forward(text.as_str().to_owned()).await;
                        }
                        Some(Ok(Message::Binary(bytes))) => {
                            self.forward(String::from_utf8_lossy(&bytes).into_owned()).await;
                        }
                        Some(Ok(Message::Close(close))) => {
                            log::info!("Server closed the connection: {close:?}");
                            break Ok(());
                        }
                        Some(Ok(_)) => {}
                        Some(Err(err)) => break Err(ClientError::Socket(err)),
                        None => {
                            log::info!("Socket stream ended");
                            break Ok(());
                        }
                    }
                }
            }
        };

        self.state.send_replace(ConnectionState::Closed);
        result
    }

    async fn forward(&self, text: String) {
        log::debug!("Received frame ({} bytes)", text.len());
        if let Err(err) = self
            .event_sender
            .send(NetworkEvent::FrameReceived(text))
            .await
        {
            log::warn!("Failed to deliver frame to UI: {err:?}");
        }
    }
}
