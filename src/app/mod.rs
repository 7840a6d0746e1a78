use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::data::read_questions_embedded;
use crate::evaluator::Scoreboard;
use crate::model::{BuiltQuestion, QuestionSpec, View};

// Submódulos
pub mod actions;
pub mod navigation;
pub mod queries;

/// Estado completo de una sesión de quiz. Mutado únicamente por las
/// transiciones de `actions`/`navigation`, una acción de usuario cada vez.
pub struct QuizApp {
    pub catalog: Vec<QuestionSpec>,
    pub view: View,
    /// Secuencia de la sesión en curso; vacía hasta que se empieza.
    pub questions: Vec<BuiltQuestion>,
    pub current: usize,
    pub selected: Option<String>,
    pub submitted: bool,
    pub board: Scoreboard,
    pub reminder_open: bool,
    pub review_open: bool,
    rng: StdRng,
}

impl QuizApp {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Generador determinista, para sesiones reproducibles en los tests.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            catalog: read_questions_embedded(),
            view: View::Home,
            questions: Vec::new(),
            current: 0,
            selected: None,
            submitted: false,
            board: Scoreboard::default(),
            reminder_open: false,
            review_open: false,
            rng,
        }
    }

    pub(crate) fn rng_mut(&mut self) -> &mut StdRng {
        &mut self.rng
    }
}

impl Default for QuizApp {
    fn default() -> Self {
        Self::new()
    }
}
