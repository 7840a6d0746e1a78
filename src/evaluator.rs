//! Evaluación de respuestas y registro de intentos, con el baremo score/XP
//! aplicado solo en el primer registro.

use crate::model::{Attempt, BuiltQuestion};

pub const XP_CORRECT: u32 = 25;
pub const XP_WRONG: u32 = 5;

/// Cierto si la opción elegida es la correcta, o si su texto figura entre
/// las alternativas aceptadas (comparación exacta, sensible a mayúsculas).
pub fn is_correct(question: &BuiltQuestion, chosen_id: &str) -> bool {
    if chosen_id == question.correct_id {
        return true;
    }
    question
        .option_text(chosen_id)
        .map(|text| question.spec.accept_also.iter().any(|alt| alt == text))
        .unwrap_or(false)
}

/// Score, XP y registro de intentos de una sesión.
#[derive(Debug, Clone, Default)]
pub struct Scoreboard {
    pub score: usize,
    pub xp: u32,
    pub attempts: Vec<Attempt>,
}

impl Scoreboard {
    /// Registra el intento para esta pregunta. Idempotente: si ya existe un
    /// intento para ese id, se devuelve tal cual y ni el score ni la XP se
    /// mueven.
    pub fn record_attempt(&mut self, question: &BuiltQuestion, chosen_id: &str) -> &Attempt {
        if let Some(i) = self
            .attempts
            .iter()
            .position(|a| a.question_id == question.spec.id)
        {
            return &self.attempts[i];
        }

        let ok = is_correct(question, chosen_id);
        let chosen = question.option_text(chosen_id).unwrap_or("").to_string();

        if ok {
            self.score += 1;
            self.xp += XP_CORRECT;
        } else {
            self.xp += XP_WRONG;
        }

        self.attempts.push(Attempt {
            question_id: question.spec.id.clone(),
            label: question.spec.label.clone(),
            prompt: question.spec.prompt.clone(),
            chosen,
            correct: question.spec.correct.clone(),
            is_correct: ok,
            accept_also: question.spec.accept_also.clone(),
        });
        self.attempts.last().expect("intento recién añadido")
    }

    pub fn clear(&mut self) {
        self.score = 0;
        self.xp = 0;
        self.attempts.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::read_questions_embedded;
    use crate::builder::build_session;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn built(id: &str) -> BuiltQuestion {
        let catalog = read_questions_embedded();
        let mut rng = StdRng::seed_from_u64(5);
        build_session(&catalog, &mut rng)
            .into_iter()
            .find(|q| q.spec.id == id)
            .expect("pregunta presente")
    }

    #[test]
    fn choosing_the_correct_option_is_correct() {
        let q = built("q1");
        assert!(is_correct(&q, &q.correct_id));
    }

    #[test]
    fn choosing_a_distractor_is_wrong() {
        let q = built("q1");
        let distractor = q
            .options
            .iter()
            .find(|o| o.id != q.correct_id)
            .expect("al menos un distractor");
        assert!(!is_correct(&q, &distractor.id));
    }

    #[test]
    fn accepted_alternate_counts_as_correct() {
        // q15: mal → pire, pero « plus mal » también se acepta.
        let q = built("q15");
        let alt = q
            .options
            .iter()
            .find(|o| o.text == "plus mal")
            .expect("« plus mal » entre las opciones");
        assert_ne!(alt.id, q.correct_id);
        assert!(is_correct(&q, &alt.id));
    }

    #[test]
    fn first_recording_applies_the_reward_policy() {
        let q = built("q8");
        let mut board = Scoreboard::default();

        let a = board.record_attempt(&q, &q.correct_id).clone();
        assert!(a.is_correct);
        assert_eq!(board.score, 1);
        assert_eq!(board.xp, XP_CORRECT);
        assert_eq!(board.attempts.len(), 1);
    }

    #[test]
    fn wrong_answer_still_earns_some_xp() {
        let q = built("q8");
        let distractor = q.options.iter().find(|o| o.id != q.correct_id).unwrap();
        let mut board = Scoreboard::default();

        let a = board.record_attempt(&q, &distractor.id).clone();
        assert!(!a.is_correct);
        assert_eq!(board.score, 0);
        assert_eq!(board.xp, XP_WRONG);
    }

    #[test]
    fn recording_is_idempotent_per_question() {
        let q = built("q3");
        let mut board = Scoreboard::default();

        let first = board.record_attempt(&q, &q.correct_id).clone();
        // Segundo envío con otra opción: todo queda congelado.
        let distractor = q.options.iter().find(|o| o.id != q.correct_id).unwrap().id.clone();
        let second = board.record_attempt(&q, &distractor).clone();

        assert_eq!(first.chosen, second.chosen);
        assert!(second.is_correct);
        assert_eq!(board.score, 1);
        assert_eq!(board.xp, XP_CORRECT);
        assert_eq!(board.attempts.len(), 1);
    }
}
