pub mod layout;
pub mod views;

use crate::app::QuizApp;
use crate::model::View;
use eframe::{App, Frame};
use egui::Context;
use layout::top_panel;

impl App for QuizApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // Cabecera XP / Score, visible en todas las pantallas
        top_panel(self, ctx);

        // Dispatch por vista a las funciones en views
        match self.view {
            View::Home => views::home::ui_home(self, ctx),
            View::Quiz => views::quiz::ui_quiz(self, ctx),
            View::End => views::end::ui_end(self, ctx),
        }
    }
}
