pub mod client;
pub mod render;

pub use client::{ChatClient, ClientError, SendOutcome};
pub use render::{Block, MessageBlock, RenderSink, Side};
