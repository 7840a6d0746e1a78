use egui::{Color32, Context, Frame, RichText, ScrollArea};

use crate::QuizApp;
use crate::ui::layout::{centered_panel, wide_button};

pub fn ui_end(app: &mut QuizApp, ctx: &Context) {
    let total = app.total();
    let rows = app.attempt_rows();

    centered_panel(ctx, 420.0, 640.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading("🎉 Bravo, exercice terminé !");
            ui.add_space(10.0);

            ui.horizontal(|ui| {
                ui.add_space((ui.available_width() - 320.0).max(0.0) / 2.0);
                ui.label(
                    RichText::new(format!("🏆 Score : {} / {}", app.board.score, total)).strong(),
                );
                ui.add_space(16.0);
                ui.label(RichText::new(format!("✨ XP : {}", app.board.xp)).strong());
            });
            ui.add_space(14.0);

            let btn_w = 320.0;
            let review_label = if app.review_open {
                "Fermer la révision"
            } else {
                "Revoir les réponses"
            };
            if wide_button(ui, review_label, btn_w) {
                app.toggle_review();
            }
            ui.add_space(5.0);
            if wide_button(ui, "Retour au tableau des règles", btn_w) {
                app.reset();
                return;
            }

            if app.review_open {
                ui.add_space(12.0);
                ui.label(RichText::new("Révision — réponses de l’étudiant").strong());
                ui.add_space(6.0);

                ScrollArea::vertical().max_height(320.0).show(ui, |ui| {
                    if rows.is_empty() {
                        ui.label("Aucune réponse enregistrée pour cette session.");
                        return;
                    }
                    for row in &rows {
                        Frame::group(ui.style()).show(ui, |ui| {
                            ui.set_width(ui.available_width().min(560.0));
                            ui.horizontal(|ui| {
                                ui.label(
                                    RichText::new(format!("{}. {}", row.index_1based, row.label))
                                        .weak(),
                                );
                                ui.with_layout(
                                    egui::Layout::right_to_left(egui::Align::Center),
                                    |ui| {
                                        let color = if row.is_correct {
                                            Color32::LIGHT_GREEN
                                        } else {
                                            Color32::LIGHT_RED
                                        };
                                        ui.label(
                                            RichText::new(row.verdict_icon()).color(color),
                                        );
                                    },
                                );
                            });
                            ui.label(RichText::new(&row.prompt).strong());
                            ui.label(format!("Réponse choisie : {}", row.chosen_display()));
                            match &row.accepted_alternates {
                                Some(alts) => ui.label(format!(
                                    "Bonne réponse : {} — accepté aussi : {}",
                                    row.correct, alts
                                )),
                                None => ui.label(format!("Bonne réponse : {}", row.correct)),
                            };
                        });
                        ui.add_space(6.0);
                    }
                });
            }
        });
    });
}
