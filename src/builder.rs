//! Materialización de una sesión: opciones barajadas por pregunta y, después,
//! el propio orden de las preguntas.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::model::{AnswerOption, BuiltQuestion, QuestionSpec};

/// Construye la secuencia de preguntas de una sesión.
///
/// El generador se inyecta: un `StdRng::seed_from_u64` hace la salida
/// reproducible en los tests, `thread_rng` la deja naturalmente aleatoria
/// en uso normal.
pub fn build_session<R: Rng>(catalog: &[QuestionSpec], rng: &mut R) -> Vec<BuiltQuestion> {
    let mut built: Vec<BuiltQuestion> = catalog.iter().map(|q| build_question(q, rng)).collect();
    built.shuffle(rng);
    built
}

fn build_question<R: Rng>(spec: &QuestionSpec, rng: &mut R) -> BuiltQuestion {
    // Barajamos {correct} ∪ distractores para que la respuesta correcta no
    // quede siempre en la misma posición.
    let mut texts: Vec<String> = Vec::with_capacity(1 + spec.distractors.len());
    texts.push(spec.correct.clone());
    texts.extend(spec.distractors.iter().cloned());
    texts.shuffle(rng);

    let options: Vec<AnswerOption> = texts
        .into_iter()
        .enumerate()
        .map(|(i, text)| AnswerOption {
            id: format!("{}_{}", spec.id, i),
            text,
        })
        .collect();

    let correct_id = match options.iter().find(|o| o.text == spec.correct) {
        Some(o) => o.id.clone(),
        None => {
            // Invariante del catálogo violado: la respuesta correcta debe
            // figurar siempre entre las opciones. En release degradamos a la
            // primera opción; en debug fallamos en seco.
            debug_assert!(false, "{}: respuesta correcta ausente de las opciones", spec.id);
            log::warn!(
                "{}: respuesta correcta ausente de las opciones, usando la primera",
                spec.id
            );
            options[0].id.clone()
        }
    };

    BuiltQuestion {
        spec: spec.clone(),
        options,
        correct_id,
    }
}
