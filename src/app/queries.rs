use super::*;
use crate::feedback::{explain_correct_choice, explain_wrong_choice};
use crate::model::Attempt;
use crate::view_models::{AttemptRow, FeedbackView};

impl QuizApp {
    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn current_question(&self) -> Option<&BuiltQuestion> {
        self.questions.get(self.current)
    }

    /// Texto de la opción actualmente seleccionada, si la hay.
    pub fn selected_text(&self) -> Option<&str> {
        let q = self.current_question()?;
        q.option_text(self.selected.as_deref()?)
    }

    /// Intento registrado para la pregunta actual.
    pub fn current_attempt(&self) -> Option<&Attempt> {
        let q = self.current_question()?;
        self.board
            .attempts
            .iter()
            .find(|a| a.question_id == q.spec.id)
    }

    /// Bloque de feedback mostrado tras el envío: veredicto, explicación de
    /// la elección, forma correcta y regla del catálogo.
    pub fn current_feedback(&self) -> Option<FeedbackView> {
        if !self.submitted {
            return None;
        }
        let q = self.current_question()?;
        let attempt = self.current_attempt()?;
        let spec = &q.spec;

        let mut lines = Vec::new();
        if !attempt.is_correct {
            lines.push(explain_wrong_choice(
                spec.relation,
                spec.category,
                &attempt.chosen,
                &spec.correct,
            ));
        }
        lines.push(explain_correct_choice(spec.relation, spec.category, &spec.correct));
        lines.push(spec.explanation.clone());

        let accept_note = if spec.accept_also.is_empty() {
            None
        } else {
            Some(format!("On accepte aussi : {}", spec.accept_also.join(" / ")))
        };

        Some(FeedbackView {
            is_correct: attempt.is_correct,
            chosen: attempt.chosen.clone(),
            lines,
            accept_note,
        })
    }

    /// Filas de la revisión final, en orden de registro.
    pub fn attempt_rows(&self) -> Vec<AttemptRow> {
        self.board
            .attempts
            .iter()
            .enumerate()
            .map(|(i, a)| AttemptRow {
                index_1based: i + 1,
                label: a.label.clone(),
                prompt: a.prompt.clone(),
                chosen: a.chosen.clone(),
                correct: a.correct.clone(),
                is_correct: a.is_correct,
                accepted_alternates: if a.accept_also.is_empty() {
                    None
                } else {
                    Some(a.accept_also.join(" / "))
                },
            })
            .collect()
    }
}
