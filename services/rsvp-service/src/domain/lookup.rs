use super::guest::{Guest, Party};

/// A last-name query after trimming and case folding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LastNameQuery(String);

impl LastNameQuery {
    /// Returns `None` when nothing is left after normalization.
    pub fn parse(raw: &str) -> Option<Self> {
        let normalized = raw.trim().to_lowercase();
        if normalized.is_empty() {
            None
        } else {
            Some(Self(normalized))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LastNameLookup {
    /// The query was blank; the caller should render nothing.
    Empty,
    Unique(Party),
    /// Guests whose last name matched, spread over more than one invitation.
    Ambiguous(Vec<Guest>),
    NotFound,
}
