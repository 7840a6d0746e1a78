use egui::{Color32, Context, Grid, RichText, ScrollArea};

use crate::QuizApp;
use crate::ui::layout::{centered_panel, wide_button};
use crate::view_models::rule_cards;

pub fn ui_home(app: &mut QuizApp, ctx: &Context) {
    centered_panel(ctx, 520.0, 700.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading("📖 Tableau express des comparatifs");
            ui.label("Lis ce résumé, puis clique sur S’entraîner.");
            ui.add_space(12.0);

            let panel_width = ui.available_width().min(640.0);

            ScrollArea::vertical().max_height(360.0).show(ui, |ui| {
                Grid::new("rule_cards_grid")
                    .num_columns(2)
                    .spacing([16.0, 16.0])
                    .show(ui, |ui| {
                        for (i, card) in rule_cards().iter().enumerate() {
                            ui.vertical(|ui| {
                                let title_color = if card.is_exception {
                                    Color32::LIGHT_RED
                                } else {
                                    ui.visuals().strong_text_color()
                                };
                                ui.label(RichText::new(card.title).strong().color(title_color));
                                ui.label(RichText::new(card.subtitle).weak());
                                ui.add_space(4.0);
                                for line in card.lines {
                                    if card.is_exception {
                                        ui.label(
                                            RichText::new(format!("• {line}"))
                                                .color(Color32::LIGHT_RED),
                                        );
                                    } else {
                                        ui.label(format!("• {line}"));
                                    }
                                }
                            });
                            if i % 2 == 1 {
                                ui.end_row();
                            }
                        }
                    });
            });

            ui.add_space(16.0);
            let btn_w = (panel_width * 0.6).clamp(160.0, 400.0);
            if wide_button(ui, "➡ S’entraîner", btn_w) {
                app.start();
            }
            ui.add_space(5.0);
            if wide_button(ui, "🔄 Reset session", btn_w) {
                app.reset();
            }
        });
    });
}
