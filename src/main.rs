mod chat;
mod common;
mod config;
mod network;
mod ui;

use chat::ChatClient;
use clap::Parser;
use common::ConnectionState;
use config::ClientConfig;
use dotenvy::dotenv;
use network::{SocketHandle, WsClient};
use tokio::sync::{mpsc, watch};
use ui::ChatApp;

#[derive(Parser)]
#[command(
    name = "room_chat",
    version,
    about = "WebSocket chat client for a single room"
)]
struct Cli {
    /// Path to JSON config file
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH, value_name = "FILE")]
    config: String,
    /// Server base URL, e.g. ws://localhost:8000
    #[arg(long, env = "CHAT_ENDPOINT")]
    endpoint: Option<String>,
    /// Room to join
    #[arg(long, env = "CHAT_ROOM")]
    room: Option<String>,
    /// Display name sent with every message
    #[arg(long, env = "CHAT_NAME")]
    name: Option<String>,
    /// Write the effective config back to the config file
    #[arg(long)]
    save_config: bool,
}

#[tokio::main]
async fn main() -> Result<(), eframe::Error> {
    dotenv().ok();
    // Khởi tạo Logger để debug
    env_logger::init();

    let cli = Cli::parse();
    let client_config =
        config::load_config(&cli.config).with_overrides(cli.endpoint, cli.room, cli.name);

    if cli.save_config {
        match config::save_config(&cli.config, &client_config) {
            Ok(()) => log::info!("Saved config to {}", cli.config),
            Err(err) => log::error!("Failed to write config {}: {err}", cli.config),
        }
    }

    run_client(client_config).await
}

async fn run_client(client_config: ClientConfig) -> Result<(), eframe::Error> {
    // 1. Tạo các kênh giao tiếp (Channels)
    // UI -> Network
    let (cmd_tx, cmd_rx) = mpsc::channel(100);
    // Network -> UI
    let (event_tx, event_rx) = mpsc::channel(100);
    // Trạng thái kết nối, UI chỉ đọc
    let (state_tx, state_rx) = watch::channel(ConnectionState::Connecting);

    // 2. Khởi chạy Network Thread (Chạy ngầm)
    let url = client_config.endpoint_url();
    tokio::spawn(async move {
        let client = WsClient::new(url, event_tx, cmd_rx, state_tx);
        if let Err(err) = client.run().await {
            log::error!("Chat socket terminated: {err}");
        }
    });

    // 3. Khởi chạy UI (Chạy trên Main Thread)
    let options = eframe::NativeOptions::default();
    let mut event_rx = Some(event_rx);
    let socket = SocketHandle::new(cmd_tx, state_rx);

    eframe::run_native(
        "Room Chat",
        options,
        Box::new(move |cc| {
            let event_receiver = event_rx
                .take()
                .expect("ChatApp should only be initialized once");

            log::info!(
                "Client started for room {} as {}",
                client_config.room,
                client_config.display_name
            );

            let client = ChatClient::new(socket.clone(), client_config.display_name.clone());
            Ok(Box::new(ChatApp::new(
                cc,
                client,
                client_config.room.clone(),
                event_receiver,
            )))
        }),
    )
}
