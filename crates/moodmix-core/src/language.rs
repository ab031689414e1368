//! Display language of generated cocktails and UI text.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// The two languages a cocktail can be generated or translated into.
///
/// Serialized as the lowercase ISO code (`"en"`, `"zh"`), which is also the
/// format accepted by `FromStr`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Language {
    #[default]
    En,
    Zh,
}

impl Language {
    /// Returns the other language. Toggling always flips between exactly two values.
    pub fn other(self) -> Self {
        match self {
            Language::En => Language::Zh,
            Language::Zh => Language::En,
        }
    }

    /// Human readable name used in prompts.
    pub fn prompt_name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Zh => "Simplified Chinese",
        }
    }
}
