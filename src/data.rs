// src/data.rs

use crate::model::QuestionSpec;

/// Carga el banco de preguntas desde el YAML embebido
pub fn read_questions_embedded() -> Vec<QuestionSpec> {
    let file_content = include_str!("data/questions.yaml");
    serde_yaml::from_str(file_content).expect("No se pudo parsear el banco de preguntas YAML")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feedback::{Category, Relation};
    use std::collections::HashSet;

    #[test]
    fn catalog_has_twenty_questions_with_unique_ids() {
        let catalog = read_questions_embedded();
        assert_eq!(catalog.len(), 20);
        let ids: HashSet<&str> = catalog.iter().map(|q| q.id.as_str()).collect();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn correct_answer_never_appears_among_distractors() {
        for q in read_questions_embedded() {
            assert!(
                !q.distractors.contains(&q.correct),
                "{}: la respuesta correcta figura entre los distractores",
                q.id
            );
            let unique: HashSet<&str> = q.distractors.iter().map(String::as_str).collect();
            assert_eq!(unique.len(), q.distractors.len(), "{}: distractores duplicados", q.id);
        }
    }

    #[test]
    fn every_question_carries_an_explanation() {
        for q in read_questions_embedded() {
            assert!(!q.explanation.trim().is_empty(), "{}: explicación vacía", q.id);
        }
    }

    #[test]
    fn labels_round_trip_to_the_authored_taxonomy() {
        // Si la etiqueta visible deriva, se ve aquí en vez de producir una
        // clasificación silenciosamente errónea.
        for q in read_questions_embedded() {
            assert_eq!(Relation::from_label(&q.label), q.relation, "{}", q.id);
            assert_eq!(Category::from_label(&q.label), q.category, "{}", q.id);
        }
    }

    #[test]
    fn accepted_alternates_are_distinct_from_the_canonical_answer() {
        let catalog = read_questions_embedded();
        let q15 = catalog.iter().find(|q| q.id == "q15").expect("q15 presente");
        assert_eq!(q15.accept_also, vec!["plus mal".to_string()]);
        for q in &catalog {
            for alt in &q.accept_also {
                assert_ne!(alt, &q.correct, "{}", q.id);
            }
        }
    }
}
