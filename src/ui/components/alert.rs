use eframe::egui;

/// Modal notice; returns true once the user dismisses it.
pub fn render(ctx: &egui::Context, text: &str) -> bool {
    let mut dismissed = false;
    let response = egui::Modal::new(egui::Id::new("send_rejected_alert")).show(ctx, |ui| {
        ui.set_max_width(320.0);
        ui.label(text);
        ui.add_space(8.0);
        if ui.button("OK").clicked() {
            dismissed = true;
        }
    });

    dismissed || response.should_close()
}
