use eframe::egui;

use crate::chat::{Block, MessageBlock, Side};

const OWN_COLOR: egui::Color32 = egui::Color32::from_rgb(0x4a, 0x90, 0xe2);

pub fn render(ui: &mut egui::Ui, blocks: &[Block], scroll_to_bottom: bool) {
    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .stick_to_bottom(true)
        .max_height((ui.available_height() - 40.0).max(0.0))
        .show(ui, |ui| {
            for block in blocks {
                match block {
                    Block::Message(message) => message_row(ui, message),
                    Block::Notice(text) => {
                        ui.label(egui::RichText::new(text).color(egui::Color32::GRAY).weak());
                    }
                }
            }

            if scroll_to_bottom {
                ui.scroll_to_cursor(Some(egui::Align::BOTTOM));
            }
        });
}

fn message_row(ui: &mut egui::Ui, message: &MessageBlock) {
    let layout = match message.side {
        Side::Own => egui::Layout::top_down(egui::Align::Max),
        Side::Other => egui::Layout::top_down(egui::Align::Min),
    };

    ui.with_layout(layout, |ui| {
        let name = egui::RichText::new(&message.username).strong();
        match message.side {
            Side::Own => ui.label(name.color(OWN_COLOR)),
            Side::Other => ui.label(name),
        };
        ui.label(&message.content);
        ui.label(egui::RichText::new(&message.time).small().weak());
    });
    ui.add_space(4.0);
}
