// src/models/personalization.rs

/// Display-only names used to label the report.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Personalization {
    pub competitor: Option<String>,
    pub practice: Option<String>,
}

impl Personalization {
    /// Blank names are dropped so they never render as empty labels.
    #[must_use]
    pub fn new(competitor: Option<String>, practice: Option<String>) -> Self {
        Self {
            competitor: non_blank(competitor),
            practice: non_blank(practice),
        }
    }

    /// Names set on `other` replace the ones on `self`.
    #[must_use]
    pub fn overlay(self, other: Self) -> Self {
        Self {
            competitor: other.competitor.or(self.competitor),
            practice: other.practice.or(self.practice),
        }
    }

    #[must_use]
    pub fn competitor_title(&self) -> Option<String> {
        self.competitor.as_deref().map(title_case)
    }

    #[must_use]
    pub fn practice_possessive(&self) -> Option<String> {
        self.practice.as_deref().map(possessive)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_owned())
        .filter(|s| !s.is_empty())
}

/// "square payments" -> "Square Payments"
#[must_use]
pub fn title_case(name: &str) -> String {
    name.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// "Smith Dental" -> "Smith Dental's", "Jones Family Dentists" -> "Jones Family Dentists'"
#[must_use]
pub fn possessive(name: &str) -> String {
    let name = name.trim();
    if name.ends_with(['s', 'S']) {
        format!("{name}'")
    } else {
        format!("{name}'s")
    }
}
