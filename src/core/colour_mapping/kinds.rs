use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ColourSchemeKinds {
    #[default]
    Default,
    Rainbow,
    Fire,
    Electric,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown colour scheme '{0}', expected one of: default, rainbow, fire, electric")]
pub struct UnknownColourScheme(pub String);

impl ColourSchemeKinds {
    pub const ALL: &'static [Self] = &[Self::Default, Self::Rainbow, Self::Fire, Self::Electric];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Default => "Default",
            Self::Rainbow => "Rainbow",
            Self::Fire => "Fire",
            Self::Electric => "Electric",
        }
    }

    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Rainbow => "rainbow",
            Self::Fire => "fire",
            Self::Electric => "electric",
        }
    }
}

impl fmt::Display for ColourSchemeKinds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str((*self).display_name())
    }
}

impl FromStr for ColourSchemeKinds {
    type Err = UnknownColourScheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.id().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownColourScheme(s.to_owned()))
    }
}
