//! Pipeline stage vocabulary.
//!
//! The closed list offered by the opportunity input surface. Storage keeps
//! stage as free text; rows written by other means may carry values outside
//! this list.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stage {
    Prospecting,
    Proposal,
    Negotiation,
    Won,
    Lost,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Prospecting => "Prospecting",
            Self::Proposal => "Proposal",
            Self::Negotiation => "Negotiation",
            Self::Won => "Won",
            Self::Lost => "Lost",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Prospecting" => Some(Self::Prospecting),
            "Proposal" => Some(Self::Proposal),
            "Negotiation" => Some(Self::Negotiation),
            "Won" => Some(Self::Won),
            "Lost" => Some(Self::Lost),
            _ => None,
        }
    }

    pub fn all() -> &'static [Self] {
        &[
            Self::Prospecting,
            Self::Proposal,
            Self::Negotiation,
            Self::Won,
            Self::Lost,
        ]
    }
}
