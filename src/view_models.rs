// src/view_models.rs

/// Feedback mostrado bajo la pregunta tras el envío.
#[derive(Clone, Debug)]
pub struct FeedbackView {
    pub is_correct: bool,
    pub chosen: String,
    /// Explicación de la elección, forma correcta, regla del catálogo.
    pub lines: Vec<String>,
    pub accept_note: Option<String>,
}

impl FeedbackView {
    pub fn headline(&self) -> String {
        if self.is_correct {
            format!("Bravo ! Tu as choisi « {} ».", self.chosen)
        } else {
            format!("Attention ! Tu as choisi « {} ».", self.chosen)
        }
    }
}

/// Una fila de la revisión final.
#[derive(Clone, Debug)]
pub struct AttemptRow {
    pub index_1based: usize,
    pub label: String,
    pub prompt: String,
    pub chosen: String,
    pub correct: String,
    pub is_correct: bool,
    pub accepted_alternates: Option<String>,
}

impl AttemptRow {
    pub fn chosen_display(&self) -> &str {
        if self.chosen.is_empty() { "(aucune)" } else { &self.chosen }
    }

    pub fn verdict_icon(&self) -> &'static str {
        if self.is_correct { "✅" } else { "❌" }
    }
}

/// Tarjeta de reglas del tableau express de la pantalla de inicio.
#[derive(Clone, Debug)]
pub struct RuleCard {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub lines: &'static [&'static str],
    /// Las formas irregulares se destacan.
    pub is_exception: bool,
}

pub fn rule_cards() -> Vec<RuleCard> {
    vec![
        RuleCard {
            title: "Adverbe / Adjectif",
            subtitle: "moins / aussi / plus … que",
            lines: &[
                "Infériorité → moins … que",
                "Égalité → aussi … que",
                "Supériorité → plus … que",
            ],
            is_exception: false,
        },
        RuleCard {
            title: "Verbe",
            subtitle: "moins / autant / plus que",
            lines: &[
                "Infériorité → moins que",
                "Égalité → autant que",
                "Supériorité → plus que",
            ],
            is_exception: false,
        },
        RuleCard {
            title: "Nom",
            subtitle: "moins / autant / plus de … que",
            lines: &[
                "Infériorité → moins de … que",
                "Égalité → autant de … que",
                "Supériorité → plus de … que",
            ],
            is_exception: false,
        },
        RuleCard {
            title: "Exceptions",
            subtitle: "formes irrégulières",
            lines: &[
                "bon(ne) → meilleur(e)",
                "mauvais(e) → pire / plus mauvais(e)",
                "bien → mieux",
                "mal → pire / plus mal",
            ],
            is_exception: true,
        },
    ]
}
