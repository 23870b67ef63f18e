use tokio::sync::{mpsc, watch};

use crate::chat::ClientError;
use crate::common::{ConnectionState, NetworkCommand};

/// The part of a socket the chat logic needs: its state and a way to queue a
/// text frame. Inbound traffic arrives separately as `NetworkEvent`s.
pub trait Transport {
    fn state(&self) -> ConnectionState;

    /// Queue one text frame. Fails fast when the socket is not open.
    fn send(&self, text: String) -> Result<(), ClientError>;
}

/// UI-side handle to the socket task.
#[derive(Clone)]
pub struct SocketHandle {
    command_sender: mpsc::Sender<NetworkCommand>,
    state: watch::Receiver<ConnectionState>,
}

impl SocketHandle {
    pub fn new(
        command_sender: mpsc::Sender<NetworkCommand>,
        state: watch::Receiver<ConnectionState>,
    ) -> Self {
        Self {
            command_sender,
            state,
        }
    }
}

impl Transport for SocketHandle {
    fn state(&self) -> ConnectionState {
        *self.state.borrow()
    }

    fn send(&self, text: String) -> Result<(), ClientError> {
        if !self.state().is_open() {
            return Err(ClientError::SendRejected);
        }

        self.command_sender
            .try_send(NetworkCommand::SendText(text))
            .map_err(|err| {
                log::warn!("Failed to send command to network: {err}");
                ClientError::SendRejected
            })
    }
}
