use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Guest {
    pub id: String,
    pub invitation_id: String,
    pub first_name: String,
    pub last_name: String,
    pub attending: Option<bool>, // None until the party has answered
    pub plus_one_allowed: bool,
    pub plus_one_attending: bool,
    pub plus_one_name: Option<String>,
    pub song_requests: Option<String>,
    pub notes: Option<String>,
    pub has_rsvpd: bool,
}

/// Every guest sharing one invitation. Derived from the guest rows on demand,
/// never stored on its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Party {
    pub invitation_id: String,
    pub guests: Vec<Guest>,
}

impl Party {
    pub fn new(invitation_id: impl Into<String>, guests: Vec<Guest>) -> Self {
        Self {
            invitation_id: invitation_id.into(),
            guests,
        }
    }

    pub fn guest_ids(&self) -> Vec<&str> {
        self.guests.iter().map(|g| g.id.as_str()).collect()
    }

    pub fn any_plus_one_allowed(&self) -> bool {
        self.guests.iter().any(|g| g.plus_one_allowed)
    }

    /// Free-text answers are shared by the whole party, so the first
    /// guest carrying one is representative.
    pub fn saved_plus_one_name(&self) -> Option<&str> {
        self.guests.iter().find_map(|g| g.plus_one_name.as_deref())
    }

    pub fn saved_song_requests(&self) -> Option<&str> {
        self.guests.iter().find_map(|g| g.song_requests.as_deref())
    }

    pub fn saved_notes(&self) -> Option<&str> {
        self.guests.iter().find_map(|g| g.notes.as_deref())
    }
}

#[cfg(test)]
pub(crate) fn test_guest(id: &str, invitation_id: &str, first_name: &str, last_name: &str) -> Guest {
    Guest {
        id: id.to_string(),
        invitation_id: invitation_id.to_string(),
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        attending: None,
        plus_one_allowed: false,
        plus_one_attending: false,
        plus_one_name: None,
        song_requests: None,
        notes: None,
        has_rsvpd: false,
    }
}
