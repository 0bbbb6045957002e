use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Uz,
    En,
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Self::Uz => "uz",
            Self::En => "en",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// The `lang` selector of a translation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetLang {
    One(Language),
    All,
}

impl FromStr for TargetLang {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "uz" => Ok(Self::One(Language::Uz)),
            "en" => Ok(Self::One(Language::En)),
            "all" => Ok(Self::All),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for TargetLang {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::One(lang) => write!(f, "{}", lang),
            Self::All => write!(f, "all"),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TranslateRequest {
    #[serde(deserialize_with = "super::null_as_empty")]
    pub text: String,
    #[serde(deserialize_with = "super::null_as_empty")]
    pub lang: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TranslateResponse {
    pub original: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub translated: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub translations: BTreeMap<String, String>,
    pub lang: String,
}
