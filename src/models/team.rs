//! Team roster entries and their resolved display form inside a bracket.

use serde::{Deserialize, Serialize};

/// Unique identifier for a team (owned by the roster service).
pub type TeamId = i64;

/// Display name for a slot whose team is not determined yet.
pub const TBD_TEAM_NAME: &str = "TBD";

/// Display name for a slot referencing a team missing from the roster.
pub const UNKNOWN_TEAM_NAME: &str = "Unknown Team";

/// A registered team.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    #[serde(default)]
    pub logo_url: Option<String>,
}

impl Team {
    pub fn new(id: TeamId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            logo_url: None,
        }
    }

    pub fn with_logo(mut self, logo_url: impl Into<String>) -> Self {
        self.logo_url = Some(logo_url.into());
        self
    }
}

/// One side of a bracket match with the name/logo already looked up.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamSlot {
    /// None for a future-round slot.
    pub id: Option<TeamId>,
    pub name: String,
    #[serde(default)]
    pub logo_url: Option<String>,
}

impl TeamSlot {
    /// Slot not yet filled (the feeder match is undecided).
    pub fn to_be_determined() -> Self {
        Self {
            id: None,
            name: TBD_TEAM_NAME.to_string(),
            logo_url: None,
        }
    }

    /// Slot referencing an id the roster does not know.
    pub fn unknown(id: TeamId) -> Self {
        Self {
            id: Some(id),
            name: UNKNOWN_TEAM_NAME.to_string(),
            logo_url: None,
        }
    }

    pub fn from_team(team: &Team) -> Self {
        Self {
            id: Some(team.id),
            name: team.name.clone(),
            logo_url: team.logo_url.clone(),
        }
    }

    pub fn is_determined(&self) -> bool {
        self.id.is_some()
    }
}
