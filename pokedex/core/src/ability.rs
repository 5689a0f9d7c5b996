use crate::Resource;

use serde::Deserialize;

pub const NO_DESCRIPTION: &str = "No description available.";

const ENGLISH: &str = "en";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ability {
    pub name: String,
    pub effect: String,
}

impl Ability {
    /// Picks the English short effect out of the ability resource.
    ///
    /// Abilities without an English entry fall back to [`NO_DESCRIPTION`]
    /// even if other languages are available.
    pub fn resolve(name: impl Into<String>, details: &Details) -> Self {
        let effect = details
            .effect_entries
            .iter()
            .find(|entry| entry.language.name == ENGLISH)
            .map(|entry| entry.short_effect.clone())
            .unwrap_or_else(|| NO_DESCRIPTION.to_owned());

        Self {
            name: name.into(),
            effect,
        }
    }
}

/// The `ability/{id}` resource.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Details {
    #[serde(default)]
    pub effect_entries: Vec<Effect>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Effect {
    #[serde(default)]
    pub short_effect: String,
    pub language: Resource,
}
