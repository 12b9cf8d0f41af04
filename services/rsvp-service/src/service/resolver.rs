use std::collections::BTreeSet;

use super::error::RsvpError;
use crate::domain::{LastNameLookup, LastNameQuery, Party};
use crate::repo::GuestStore;

/// Resolves the party of the guest with `guest_id`.
pub async fn resolve_by_id(store: &dyn GuestStore, guest_id: &str) -> Result<Party, RsvpError> {
    let guest_id = guest_id.trim();
    if guest_id.is_empty() {
        return Err(RsvpError::NotFound);
    }

    let mut matches = store.find_by_id(guest_id).await?;
    let guest = match matches.len() {
        0 => return Err(RsvpError::NotFound),
        1 => matches.remove(0),
        n => {
            return Err(RsvpError::Integrity(format!(
                "{} guests share id {}",
                n, guest_id
            )))
        }
    };

    let guests = store.find_by_invitation(&guest.invitation_id).await?;
    Ok(Party::new(guest.invitation_id, guests))
}

/// Resolves a free-form last name to a party, or to the list of matching
/// guests when the name spans several invitations.
///
/// A single matching invitation is always expanded to the full party so
/// members with a different surname are not dropped.
pub async fn resolve_by_last_name(
    store: &dyn GuestStore,
    raw_last_name: &str,
) -> Result<LastNameLookup, RsvpError> {
    let query = match LastNameQuery::parse(raw_last_name) {
        Some(query) => query,
        None => return Ok(LastNameLookup::Empty),
    };

    let matches = store.find_by_last_name(query.as_str()).await?;
    let invitation_ids: BTreeSet<&str> = matches.iter().map(|g| g.invitation_id.as_str()).collect();

    match invitation_ids.len() {
        0 => Ok(LastNameLookup::NotFound),
        1 => {
            let invitation_id = matches[0].invitation_id.clone();
            let guests = store.find_by_invitation(&invitation_id).await?;
            Ok(LastNameLookup::Unique(Party::new(invitation_id, guests)))
        }
        _ => Ok(LastNameLookup::Ambiguous(matches)),
    }
}
