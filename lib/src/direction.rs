use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::error::DirectionError;

/// Translation direction between the source and the target language.
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Source -> target, folding inflected source forms onto their lemma.
    #[default]
    Forward,

    /// Target -> source, exact case-folded lookup.
    Reverse,
}

impl Direction {
    #[inline]
    pub fn swap(self) -> Self {
        match self {
            Direction::Forward => Direction::Reverse,
            Direction::Reverse => Direction::Forward,
        }
    }

    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Forward => "forward",
            Direction::Reverse => "reverse",
        }
    }
}

impl FromStr for Direction {
    type Err = DirectionError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "forward" | "ru-to-lk" => Ok(Direction::Forward),
            "reverse" | "lk-to-ru" => Ok(Direction::Reverse),
            _ => Err(DirectionError(value.to_string())),
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
