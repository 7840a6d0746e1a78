//! Clasificación didáctica de las respuestas: taxonomía (relación × categoría)
//! y síntesis de explicaciones mediante una cascada de reglas.
//!
//! Todo es puro y determinista: mismos argumentos, mismo texto. Las mismas
//! funciones sirven para el renderizado y para los tests.

use serde::{Deserialize, Serialize};

/// Relación comparativa que expresa la construcción.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Relation {
    Inferiority,
    Equality,
    Superiority,
    Superlative,
    Other,
}

/// Categoría gramatical que modifica la construcción.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Noun,
    Verb,
    Adjective,
    Adverb,
    Other,
}

/// Formas irregulares reconocidas en una respuesta.
const IRREGULAR_FORMS: [&str; 6] = [
    "meilleur",
    "meilleure",
    "meilleurs",
    "meilleures",
    "mieux",
    "pire",
];

impl Relation {
    /// Detección por subcadena sobre la etiqueta visible, por prioridad:
    /// superlativo primero, después inferioridad, igualdad, superioridad.
    pub fn from_label(label: &str) -> Relation {
        let l = label.to_lowercase();
        if l.contains("superlatif") {
            Relation::Superlative
        } else if l.contains("infériorité") {
            Relation::Inferiority
        } else if l.contains("égalité") {
            Relation::Equality
        } else if l.contains("supériorité") {
            Relation::Superiority
        } else {
            Relation::Other
        }
    }

    /// "l’infériorité", "la supériorité"…; genérico para [`Relation::Other`].
    pub fn display(self) -> &'static str {
        match self {
            Relation::Inferiority => "l’infériorité",
            Relation::Equality => "l’égalité",
            Relation::Superiority => "la supériorité",
            Relation::Superlative => "le superlatif",
            Relation::Other => "la comparaison",
        }
    }
}

impl Category {
    /// Detección del marcador entre paréntesis en la etiqueta visible.
    pub fn from_label(label: &str) -> Category {
        let l = label.to_lowercase();
        if l.contains("(nom)") {
            Category::Noun
        } else if l.contains("(verbe)") {
            Category::Verb
        } else if l.contains("(adjectif)") {
            Category::Adjective
        } else if l.contains("(adverbe)") {
            Category::Adverb
        } else {
            Category::Other
        }
    }

    /// "avec un nom", "avec un verbe"…; vacío para [`Category::Other`].
    pub fn display(self) -> &'static str {
        match self {
            Category::Noun => "avec un nom",
            Category::Verb => "avec un verbe",
            Category::Adjective => "avec un adjectif",
            Category::Adverb => "avec un adverbe",
            Category::Other => "",
        }
    }
}

/// Relación que expresa realmente la palabra elegida (sin distinguir
/// mayúsculas, espacios exteriores ignorados).
pub fn relation_from_answer(text: &str) -> Relation {
    let t = text.trim().to_lowercase();
    if IRREGULAR_FORMS.contains(&t.as_str()) {
        Relation::Superlative
    } else if t.starts_with("moins") {
        Relation::Inferiority
    } else if t.starts_with("plus") {
        Relation::Superiority
    } else if t == "aussi" || t.starts_with("autant") {
        Relation::Equality
    } else {
        Relation::Other
    }
}

/// "exprimer <relación> <categoría>" sin espacio sobrante cuando la
/// categoría no tiene etiqueta.
fn relation_with_category(relation: Relation, category: Category) -> String {
    let cat = category.display();
    if cat.is_empty() {
        relation.display().to_string()
    } else {
        format!("{} {}", relation.display(), cat)
    }
}

/// Explica por qué la elección es errónea. Cascada ordenada: gana la primera
/// regla que encaja.
pub fn explain_wrong_choice(
    relation: Relation,
    category: Category,
    chosen: &str,
    correct: &str,
) -> String {
    let chosen_l = chosen.to_lowercase();
    let correct_l = correct.to_lowercase();

    // NOM: la forma partitiva con « de » es obligatoria…
    if category == Category::Noun {
        if !chosen_l.contains(" de") && correct_l.contains(" de") {
            return format!(
                "Tu as choisi « {chosen} ». Avec un nom, on utilise une forme avec « de » : \
                 on dit « {correct} » + nom (pour exprimer {}).",
                relation.display()
            );
        }
        // …o al contrario, hay que abandonarla aquí.
        if chosen_l.contains(" de") && !correct_l.contains(" de") {
            return format!(
                "Tu as choisi « {chosen} ». Ici, on n’utilise pas « de » : \
                 on choisit « {correct} » (pour exprimer {}).",
                relation.display()
            );
        }
    }

    // VERBO: nunca lleva « de »
    if category == Category::Verb && chosen_l.contains(" de") {
        return format!(
            "Tu as choisi « {chosen} ». Avec un verbe, on ne met pas « de » : \
             on dit « {correct} » + que."
        );
    }

    // ADJ/ADV: igualdad = aussi (no autant)
    if matches!(category, Category::Adjective | Category::Adverb)
        && relation == Relation::Equality
        && chosen_l == "autant"
    {
        return format!(
            "Tu as choisi « {chosen} ». Pour exprimer l’égalité {}, \
             on utilise « aussi » (pas « autant »).",
            category.display()
        );
    }

    // VERBO: igualdad = autant (no aussi)
    if category == Category::Verb && relation == Relation::Equality && chosen_l == "aussi" {
        return format!(
            "Tu as choisi « {chosen} ». Pour exprimer l’égalité avec un verbe, \
             on utilise « autant » (pas « aussi »)."
        );
    }

    // Superlativos irregulares
    if relation == Relation::Superlative {
        return format!(
            "Tu as choisi « {chosen} ». Ici, on utilise une forme irrégulière \
             (superlatif/comparatif irrégulier) : la bonne forme est « {correct} »."
        );
    }

    // Genérico: función real del distractor
    let chosen_rel = relation_from_answer(chosen);
    format!(
        "Tu as choisi « {chosen} ». « {chosen} » sert plutôt à exprimer {}.",
        relation_with_category(chosen_rel, category)
    )
}

/// Explica por qué la respuesta correcta es la correcta.
pub fn explain_correct_choice(relation: Relation, category: Category, correct: &str) -> String {
    if relation == Relation::Superlative {
        return format!(
            "Pour cette phrase, on utilise la forme irrégulière « {correct} » \
             (superlatif/comparatif irrégulier)."
        );
    }

    format!(
        "Pour exprimer {}, on utilise « {correct} ».",
        relation_with_category(relation, category)
    )
}
