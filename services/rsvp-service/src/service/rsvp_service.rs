use std::sync::Arc;

use super::error::RsvpError;
use super::{committer, resolver, validator};
use crate::domain::{Confirmation, LastNameLookup, Party, Submission};
use crate::repo::GuestStore;

#[derive(Clone)]
pub struct RsvpService {
    store: Arc<dyn GuestStore>,
}

impl RsvpService {
    pub fn new(store: Arc<dyn GuestStore>) -> Self {
        Self { store }
    }

    pub async fn find_by_id(&self, guest_id: &str) -> Result<Party, RsvpError> {
        let party = resolver::resolve_by_id(self.store.as_ref(), guest_id).await?;
        tracing::info!(
            "Resolved guest {} to invitation {} ({} guests)",
            guest_id.trim(),
            party.invitation_id,
            party.guests.len()
        );
        tracing::debug!("Party guests: {:?}", party.guest_ids());
        Ok(party)
    }

    pub async fn find_by_last_name(&self, last_name: &str) -> Result<LastNameLookup, RsvpError> {
        let lookup = resolver::resolve_by_last_name(self.store.as_ref(), last_name).await?;
        match &lookup {
            LastNameLookup::Empty => {}
            LastNameLookup::Unique(party) => {
                tracing::info!("Last name lookup matched invitation {}", party.invitation_id)
            }
            LastNameLookup::Ambiguous(guests) => {
                tracing::info!("Last name lookup matched {} guests on several invitations", guests.len())
            }
            LastNameLookup::NotFound => tracing::info!("Last name lookup matched no guests"),
        }
        Ok(lookup)
    }

    /// Validates the submission and, only if it passes, commits it.
    pub async fn submit(&self, submission: &Submission) -> Result<Confirmation, RsvpError> {
        if let Err(rejection) = validator::validate(submission) {
            tracing::info!("RSVP rejected: {}", rejection);
            return Err(rejection.into());
        }

        let confirmation = committer::commit(self.store.as_ref(), submission).await?;
        tracing::info!(
            "RSVP committed for {} guests (attending: {}, plus one: {})",
            submission.guest_ids.len(),
            confirmation.guest_attending,
            confirmation.plus_one_attending
        );
        Ok(confirmation)
    }
}
