pub mod client;
pub mod transport;

pub use client::WsClient;
pub use transport::{SocketHandle, Transport};
