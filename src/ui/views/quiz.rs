use egui::{CentralPanel, Color32, Context, Frame, RichText, ScrollArea, SelectableLabel};

use crate::QuizApp;
use crate::ui::layout::{two_button_row, wide_button};

pub fn ui_quiz(app: &mut QuizApp, ctx: &Context) {
    let question = match app.current_question() {
        Some(q) => q.clone(),
        None => return,
    };
    let index = app.current;
    let total = app.total();
    let feedback = app.current_feedback();

    CentralPanel::default().show(ctx, |ui| {
        let max_width = 650.0;
        let panel_width = (ui.available_width() * 0.97).min(max_width);

        ui.vertical_centered(|ui| {
            Frame::default()
                .fill(ui.visuals().window_fill())
                .inner_margin(egui::Margin::symmetric(24, 16))
                .show(ui, |ui| {
                    ui.set_width(panel_width);

                    ui.label(RichText::new(format!("Question {} / {}", index + 1, total)).weak());
                    ui.add_space(6.0);

                    ui.group(|ui| {
                        ui.set_width(panel_width - 16.0);
                        ui.label(RichText::new(&question.spec.label).strong());
                        ui.add_space(4.0);
                        ui.heading(&question.spec.prompt);
                    });
                    ui.add_space(10.0);

                    // Opciones: bloqueadas tras enviar
                    for option in &question.options {
                        let checked = app.selected.as_deref() == Some(option.id.as_str());
                        let row = SelectableLabel::new(
                            checked,
                            RichText::new(&option.text).size(17.0),
                        );
                        let resp = ui.add_enabled(!app.submitted, |ui: &mut egui::Ui| {
                            ui.add_sized([panel_width - 16.0, 34.0], row)
                        });
                        if resp.clicked() {
                            app.select(&option.id);
                        }
                    }
                    ui.add_space(10.0);

                    match feedback {
                        None => {
                            let can_submit = app.selected.is_some();
                            ui.add_enabled_ui(can_submit, |ui| {
                                if wide_button(ui, "Vérifier", panel_width / 2.0) {
                                    app.submit();
                                }
                            });
                        }
                        Some(fb) => {
                            let verdict_color = if fb.is_correct {
                                Color32::LIGHT_GREEN
                            } else {
                                Color32::LIGHT_RED
                            };
                            ui.group(|ui| {
                                ui.set_width(panel_width - 16.0);
                                ui.label(
                                    RichText::new(fb.headline()).strong().color(verdict_color),
                                );
                                ui.add_space(4.0);
                                ScrollArea::vertical().max_height(140.0).show(ui, |ui| {
                                    for line in &fb.lines {
                                        ui.label(line);
                                    }
                                    if let Some(note) = &fb.accept_note {
                                        ui.label(RichText::new(note).weak());
                                    }
                                });
                                ui.add_space(6.0);
                                if wide_button(ui, "Suivant", panel_width / 2.0) {
                                    app.advance();
                                }
                            });
                        }
                    }

                    ui.add_space(14.0);

                    let reminder_label = if app.reminder_open {
                        "🔼 Rappel"
                    } else {
                        "🔽 Rappel"
                    };
                    let (reminder, back) =
                        two_button_row(ui, panel_width, reminder_label, "Retour aux règles");
                    if reminder {
                        app.toggle_reminder();
                    }
                    if back {
                        app.return_home();
                    }

                    if app.reminder_open {
                        ui.add_space(8.0);
                        ui.group(|ui| {
                            ui.set_width(panel_width - 16.0);
                            ui.label("Adj/Adv : moins / aussi / plus … que");
                            ui.label("Verbe : verbe + moins / autant / plus que");
                            ui.label("Nom : moins de / autant de / plus de … que");
                            ui.label("Exceptions : meilleur / pire / mieux");
                        });
                    }
                });
        });
    });
}
