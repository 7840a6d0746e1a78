use egui::{Button, CentralPanel, Context, Frame, RichText, Ui};

use crate::QuizApp;

pub fn top_panel(app: &QuizApp, ctx: &Context) {
    egui::TopBottomPanel::top("header_panel").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.heading("⚡ Comparatifs Quest");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let total = if app.total() > 0 {
                    app.total()
                } else {
                    app.catalog.len()
                };
                ui.label(
                    RichText::new(format!("🏆 Score {}/{}", app.board.score, total)).strong(),
                );
                ui.label(RichText::new(format!("✨ XP {}", app.board.xp)).strong());
            });
        });
    });
}

/// Panel centrado tanto vertical como horizontalmente,
/// con un tamaño de contenido máximo y un bloque interior `inner`.
pub fn centered_panel(
    ctx: &Context,
    est_height: f32,
    max_width: f32,
    inner: impl FnOnce(&mut Ui),
) {
    CentralPanel::default().show(ctx, |ui| {
        let extra = ((ui.available_height() - est_height) / 2.0).max(0.0);
        ui.add_space(extra);
        Frame::default()
            .fill(ui.visuals().window_fill())
            .inner_margin(egui::Margin::symmetric(16, 16))
            .show(ui, |ui| {
                let w = ui.available_width().min(max_width);
                ui.set_width(w);
                inner(ui);
            });
        ui.add_space(extra);
    });
}

/// Dibuja dos botones del mismo tamaño en una fila, centrados en el ancho dado.
/// Devuelve (clic izquierdo, clic derecho).
pub fn two_button_row(
    ui: &mut Ui,
    panel_width: f32,
    left_label: &str,
    right_label: &str,
) -> (bool, bool) {
    let btn_w = (panel_width - 8.0) / 2.0;
    let mut clicked_left = false;
    let mut clicked_right = false;
    ui.horizontal(|ui| {
        ui.add_space((ui.available_width() - panel_width) / 2.0);
        clicked_left = ui
            .add_sized([btn_w, 36.0], Button::new(left_label))
            .clicked();
        clicked_right = ui
            .add_sized([btn_w, 36.0], Button::new(right_label))
            .clicked();
    });
    (clicked_left, clicked_right)
}

/// Botón ancho de lista (una opción de respuesta, una acción principal…).
pub fn wide_button(ui: &mut Ui, label: impl Into<egui::WidgetText>, width: f32) -> bool {
    ui.add_sized([width, 40.0], Button::new(label)).clicked()
}
