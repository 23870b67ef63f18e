use eframe::egui;
use tokio::sync::mpsc;

use crate::chat::ChatClient;
use crate::common::{ConnectionState, NetworkEvent};
use crate::network::{SocketHandle, Transport};

use super::components::{alert, chat_area, input_bar};
use super::state::AppState;

pub struct ChatApp {
    state: AppState,
    client: ChatClient<SocketHandle>,
    room: String,
    event_receiver: mpsc::Receiver<NetworkEvent>,
}

impl ChatApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        client: ChatClient<SocketHandle>,
        room: String,
        event_receiver: mpsc::Receiver<NetworkEvent>,
    ) -> Self {
        Self {
            state: AppState::new(),
            client,
            room,
            event_receiver,
        }
    }

    fn handle_network_events(&mut self) {
        while let Ok(event) = self.event_receiver.try_recv() {
            match event {
                NetworkEvent::Opened => self.client.handle_open(),
                NetworkEvent::FrameReceived(text) => {
                    self.client.handle_frame(&text, &mut self.state)
                }
            }
        }
    }

    fn send_input(&mut self) {
        // Tách ô nhập ra khỏi state để client vừa sửa ô nhập vừa ghi vào sink
        let mut text = std::mem::take(&mut self.state.input_text);
        self.client.submit(&mut text, &mut self.state);
        self.state.input_text = text;
    }
}

impl eframe::App for ChatApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_network_events();

        egui::TopBottomPanel::top("room_status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(format!("#{}", self.room));
                let connection = self.client.transport().state();
                let color = match connection {
                    ConnectionState::Open => egui::Color32::GREEN,
                    ConnectionState::Connecting => egui::Color32::YELLOW,
                    ConnectionState::Closed => egui::Color32::RED,
                };
                ui.colored_label(color, "●");
                ui.label(connection.to_string());
                ui.label(egui::RichText::new(self.client.display_name()).weak());
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let scroll = self.state.take_scroll_request();
            chat_area::render(ui, &self.state.blocks, scroll);

            ui.separator();
            if input_bar::render(ui, &mut self.state.input_text) {
                self.send_input();
            }
        });

        if let Some(text) = self.state.alert.clone() {
            if alert::render(ctx, &text) {
                self.state.dismiss_alert();
            }
        }

        ctx.request_repaint();
    }
}
