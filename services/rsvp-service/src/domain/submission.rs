use serde::Serialize;
use thiserror::Error;

/// A bound RSVP form. Ids are trimmed and blank entries dropped when the
/// form is parsed; free text is trimmed and empty strings become `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Submission {
    pub guest_ids: Vec<String>,
    pub attending_ids: Vec<String>,
    pub plus_one_attending_ids: Vec<String>,
    pub plus_one_name: Option<String>,
    pub song_requests: Option<String>,
    pub notes: Option<String>,
}

impl Submission {
    pub fn is_attending(&self, guest_id: &str) -> bool {
        self.attending_ids.iter().any(|id| id == guest_id)
    }

    pub fn is_plus_one_attending(&self, guest_id: &str) -> bool {
        self.plus_one_attending_ids.iter().any(|id| id == guest_id)
    }
}

/// Business-rule violations caused by the submitted form.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    #[error("plus one cannot attend without their guest")]
    PlusOneWithoutPrincipal,

    #[error("plus one name is required")]
    MissingPlusOneName,
}

impl Rejection {
    pub fn user_message(&self) -> &'static str {
        match self {
            Rejection::PlusOneWithoutPrincipal => {
                "We're sure your plus one is great and all, but they can't come without you."
            }
            Rejection::MissingPlusOneName => "Please let us know your plus one's name.",
        }
    }
}

/// The values written to one guest row when a submission is committed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendanceUpdate {
    pub guest_id: String,
    pub attending: bool,
    pub plus_one_attending: bool,
    pub plus_one_name: Option<String>,
    pub song_requests: Option<String>,
    pub notes: Option<String>,
}

/// Attendance flags as the store actually wrote them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::FromRow)]
pub struct RecordedAttendance {
    pub attending: bool,
    pub plus_one_attending: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Confirmation {
    pub guest_attending: bool,
    pub plus_one_attending: bool,
}
