// src/core/prefill.rs
use crate::core::form::FormFields;
use crate::models::Personalization;
use url::{Url, form_urlencoded};

/// Field values and names pre-filled from a link.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Prefill {
    pub fields: FormFields,
    pub personalization: Personalization,
}

/// Parses pre-fill parameters from either a full URL or a bare query string
/// (a leading `?` is optional).
///
/// Recognized keys are `volume`, `cc_percent`, `comp_rate`, `comp_cost`,
/// `di_cost`, `competitor` and `practice`. Unknown keys are ignored and a
/// repeated key keeps its last value.
#[must_use]
pub fn parse_prefill(query: &str) -> Prefill {
    let query = query.trim();
    let pairs: Vec<(String, String)> = match Url::parse(query) {
        Ok(url) => url.query_pairs().into_owned().collect(),
        Err(_) => form_urlencoded::parse(query.trim_start_matches('?').as_bytes())
            .into_owned()
            .collect(),
    };

    let mut fields = FormFields::default();
    let mut competitor = None;
    let mut practice = None;

    for (key, value) in pairs {
        match key.as_str() {
            "volume" => fields.volume = Some(value),
            "cc_percent" => fields.cc_percent = Some(value),
            "comp_rate" => fields.comp_rate = Some(value),
            "comp_cost" => fields.comp_cost = Some(value),
            "di_cost" => fields.own_cost = Some(value),
            "competitor" => competitor = Some(value),
            "practice" => practice = Some(value),
            other => tracing::debug!(key = other, "ignoring unknown prefill parameter"),
        }
    }

    Prefill {
        fields,
        personalization: Personalization::new(competitor, practice),
    }
}
