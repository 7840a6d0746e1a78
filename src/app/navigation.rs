use super::*;
use crate::builder::build_session;

impl QuizApp {
    /// Home → Quiz: materializa una nueva secuencia barajada y pone a cero
    /// todo el estado de sesión.
    pub fn start(&mut self) {
        let catalog = self.catalog.clone();
        self.questions = build_session(&catalog, self.rng_mut());
        self.current = 0;
        self.selected = None;
        self.submitted = false;
        self.board.clear();
        self.reminder_open = false;
        self.review_open = false;
        self.view = View::Quiz;
        log::debug!("sesión iniciada: {} preguntas", self.questions.len());
    }

    /// Quiz → Quiz | End: siguiente pregunta, o pantalla final tras la
    /// última. Cualquier selección en curso se abandona.
    pub fn advance(&mut self) {
        if self.view != View::Quiz {
            return;
        }
        self.selected = None;
        self.submitted = false;
        self.reminder_open = false;

        let next = self.current + 1;
        if next >= self.questions.len() {
            self.view = View::End;
            log::debug!(
                "sesión terminada: score {}/{}, xp {}",
                self.board.score,
                self.questions.len(),
                self.board.xp
            );
        } else {
            self.current = next;
        }
    }

    /// Quiz → Home, sin penalización. Los intentos ya registrados se quedan
    /// hasta el próximo `reset`.
    pub fn return_home(&mut self) {
        if self.view != View::Quiz {
            return;
        }
        self.selected = None;
        self.submitted = false;
        self.reminder_open = false;
        self.review_open = false;
        self.view = View::Home;
    }

    /// End → Home: descarta secuencia, score, XP y registro, y cierra los
    /// dos paneles desplegables.
    pub fn reset(&mut self) {
        self.questions.clear();
        self.current = 0;
        self.selected = None;
        self.submitted = false;
        self.board.clear();
        self.reminder_open = false;
        self.review_open = false;
        self.view = View::Home;
    }

    /// Panel « Rappel », visible solo durante el quiz.
    pub fn toggle_reminder(&mut self) {
        if self.view == View::Quiz {
            self.reminder_open = !self.reminder_open;
        }
    }

    /// Panel « Revoir les réponses », visible solo en la pantalla final.
    pub fn toggle_review(&mut self) {
        if self.view == View::End {
            self.review_open = !self.review_open;
        }
    }
}
