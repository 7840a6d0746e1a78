use super::*;

impl QuizApp {
    /// Selecciona una opción de la pregunta actual. Sin efecto una vez
    /// enviada la respuesta o si el id no corresponde a ninguna opción.
    pub fn select(&mut self, option_id: &str) {
        if self.view != View::Quiz || self.submitted {
            return;
        }
        let known = self
            .current_question()
            .map(|q| q.options.iter().any(|o| o.id == option_id))
            .unwrap_or(false);
        if known {
            self.selected = Some(option_id.to_string());
        }
    }

    /// Envía la respuesta seleccionada: registra el intento (como mucho uno
    /// por pregunta, gana el primero) y congela la pregunta. No avanza a la
    /// siguiente, ese es el papel de `advance`.
    pub fn submit(&mut self) {
        if self.view != View::Quiz || self.submitted {
            return;
        }
        let chosen = match self.selected.clone() {
            Some(id) => id,
            None => return,
        };
        let question = match self.questions.get(self.current) {
            Some(q) => q.clone(),
            None => return,
        };

        let attempt = self.board.record_attempt(&question, &chosen);
        log::debug!(
            "{}: respuesta « {} » {}",
            attempt.question_id,
            attempt.chosen,
            if attempt.is_correct { "correcta" } else { "incorrecta" }
        );
        self.submitted = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluator::{XP_CORRECT, XP_WRONG};

    fn started(seed: u64) -> QuizApp {
        let mut app = QuizApp::with_seed(seed);
        app.start();
        app
    }

    fn correct_id(app: &QuizApp) -> String {
        app.current_question().expect("pregunta actual").correct_id.clone()
    }

    fn distractor_id(app: &QuizApp) -> String {
        let q = app.current_question().expect("pregunta actual");
        q.options
            .iter()
            .find(|o| o.id != q.correct_id && !q.spec.accept_also.contains(&o.text))
            .expect("al menos un distractor no aceptado")
            .id
            .clone()
    }

    #[test]
    fn start_builds_a_fresh_session() {
        let app = started(3);
        assert_eq!(app.view, View::Quiz);
        assert_eq!(app.questions.len(), app.catalog.len());
        assert_eq!(app.current, 0);
        assert_eq!(app.board.attempts.len(), 0);
        assert_eq!(app.board.xp, 0);
    }

    #[test]
    fn select_is_ignored_after_submit() {
        let mut app = started(4);
        let good = correct_id(&app);
        let other = distractor_id(&app);

        app.select(&good);
        app.submit();
        assert!(app.submitted);

        app.select(&other);
        assert_eq!(app.selected.as_deref(), Some(good.as_str()));
        let q = app.current_question().unwrap();
        assert_eq!(app.selected_text(), q.option_text(&good));
    }

    #[test]
    fn submit_without_selection_is_a_no_op() {
        let mut app = started(5);
        app.submit();
        assert!(!app.submitted);
        assert!(app.board.attempts.is_empty());
    }

    #[test]
    fn unknown_option_ids_are_never_selected() {
        let mut app = started(6);
        app.select("q999_0");
        assert_eq!(app.selected, None);
    }

    #[test]
    fn double_submit_changes_nothing() {
        let mut app = started(7);
        let good = correct_id(&app);
        app.select(&good);
        app.submit();
        app.submit();
        assert_eq!(app.board.attempts.len(), 1);
        assert_eq!(app.board.score, 1);
        assert_eq!(app.board.xp, XP_CORRECT);
    }

    #[test]
    fn advance_clears_selection_and_reminder() {
        let mut app = started(8);
        let good = correct_id(&app);
        app.select(&good);
        app.submit();
        app.toggle_reminder();
        assert!(app.reminder_open);

        app.advance();
        assert_eq!(app.current, 1);
        assert_eq!(app.selected, None);
        assert!(!app.submitted);
        assert!(!app.reminder_open);
    }

    #[test]
    fn return_home_keeps_recorded_attempts() {
        let mut app = started(9);
        let good = correct_id(&app);
        app.select(&good);
        app.submit();

        app.return_home();
        assert_eq!(app.view, View::Home);
        assert_eq!(app.board.attempts.len(), 1);
        assert_eq!(app.board.score, 1);
        assert!(!app.review_open);
    }

    #[test]
    fn full_session_reaches_end_with_consistent_totals() {
        let mut app = started(10);
        let total = app.questions.len();

        // Alterna respuestas correctas y distractores.
        for i in 0..total {
            let id = if i % 2 == 0 { correct_id(&app) } else { distractor_id(&app) };
            app.select(&id);
            app.submit();
            app.advance();
        }

        assert_eq!(app.view, View::End);
        assert_eq!(app.board.attempts.len(), total);
        let score = app.board.score;
        assert_eq!(
            score,
            app.board.attempts.iter().filter(|a| a.is_correct).count()
        );
        assert_eq!(
            app.board.xp,
            XP_CORRECT * score as u32 + XP_WRONG * (total - score) as u32
        );
    }

    #[test]
    fn review_toggle_only_works_on_the_end_screen() {
        let mut app = started(11);
        app.toggle_review();
        assert!(!app.review_open);

        let total = app.questions.len();
        for _ in 0..total {
            let id = correct_id(&app);
            app.select(&id);
            app.submit();
            app.advance();
        }
        assert_eq!(app.view, View::End);

        app.toggle_review();
        assert!(app.review_open);
        app.toggle_review();
        assert!(!app.review_open);
    }

    #[test]
    fn reset_discards_the_whole_session() {
        let mut app = started(12);
        let good = correct_id(&app);
        app.select(&good);
        app.submit();
        app.advance();

        app.reset();
        assert_eq!(app.view, View::Home);
        assert!(app.questions.is_empty());
        assert_eq!(app.current, 0);
        assert_eq!(app.board.score, 0);
        assert_eq!(app.board.xp, 0);
        assert!(app.board.attempts.is_empty());
        assert!(!app.reminder_open && !app.review_open);
    }

    #[test]
    fn restarting_yields_a_reproducible_order_under_a_fixed_seed() {
        let order = |seed: u64| -> Vec<String> {
            let app = started(seed);
            app.questions.iter().map(|q| q.spec.id.clone()).collect()
        };
        assert_eq!(order(42), order(42));
        assert_ne!(order(42), order(43));
    }
}
