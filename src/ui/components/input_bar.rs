use eframe::egui;

/// Id của ô nhập tin nhắn.
pub const INPUT_ID: &str = "chat_input";

/// Returns true when the user clicked Send or pressed Enter in the field.
/// The text is left for the caller to send and clear.
pub fn render(ui: &mut egui::Ui, input_text: &mut String) -> bool {
    show(ui, input_text).inner
}

pub fn show(ui: &mut egui::Ui, input_text: &mut String) -> egui::InnerResponse<bool> {
    ui.horizontal(|ui| {
        let mut send = false;
        let response = ui.add(
            egui::TextEdit::singleline(input_text)
                .id(egui::Id::new(INPUT_ID))
                .hint_text("Type a message")
                .desired_width((ui.available_width() - 60.0).max(80.0)),
        );
        if ui.button("Send").clicked() {
            send = true;
        }

        if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            send = true;
            // Giữ focus để gõ tiếp
            response.request_focus();
        }

        send
    })
}
