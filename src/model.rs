use serde::{Deserialize, Serialize};

use crate::feedback::{Category, Relation};

/// Entrada del catálogo: pregunta autorizada con su taxonomía gramatical.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct QuestionSpec {
    pub id: String,
    pub relation: Relation,
    pub category: Category,
    /// Etiqueta visible, p. ej. "infériorité (adverbe)".
    pub label: String,
    pub prompt: String,
    pub correct: String,
    pub distractors: Vec<String>,
    pub explanation: String,
    #[serde(default)]
    pub accept_also: Vec<String>,
}

/// Opción de respuesta efímera, recreada en cada sesión.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerOption {
    pub id: String,
    pub text: String,
}

/// Pregunta materializada para la sesión: spec + opciones barajadas.
#[derive(Debug, Clone)]
pub struct BuiltQuestion {
    pub spec: QuestionSpec,
    pub options: Vec<AnswerOption>,
    pub correct_id: String,
}

impl BuiltQuestion {
    pub fn option_text(&self, option_id: &str) -> Option<&str> {
        self.options
            .iter()
            .find(|o| o.id == option_id)
            .map(|o| o.text.as_str())
    }
}

/// Registro inmutable de una respuesta enviada. Como mucho uno por pregunta
/// y por sesión; la primera escritura gana.
#[derive(Debug, Clone)]
pub struct Attempt {
    pub question_id: String,
    pub label: String,
    pub prompt: String,
    pub chosen: String,
    pub correct: String,
    pub is_correct: bool,
    pub accept_also: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Home,
    Quiz,
    End,
}

impl Default for View {
    fn default() -> Self {
        View::Home
    }
}
