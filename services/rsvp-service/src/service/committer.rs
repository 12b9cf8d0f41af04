use super::error::RsvpError;
use crate::domain::{AttendanceUpdate, Confirmation, RecordedAttendance, Submission};
use crate::repo::GuestStore;

/// Builds the row update for every guest in the submitted party.
///
/// Plus-one name, song requests and notes are written for declining guests
/// too; only the attendance flags depend on the guest's answer.
pub fn plan_updates(submission: &Submission) -> Vec<AttendanceUpdate> {
    submission
        .guest_ids
        .iter()
        .map(|guest_id| {
            let attending = submission.is_attending(guest_id);
            AttendanceUpdate {
                guest_id: guest_id.clone(),
                attending,
                plus_one_attending: attending && submission.is_plus_one_attending(guest_id),
                plus_one_name: submission.plus_one_name.clone(),
                song_requests: submission.song_requests.clone(),
                notes: submission.notes.clone(),
            }
        })
        .collect()
}

/// Summarizes what the store wrote, which can differ from what was asked
/// for when a guest isn't allowed a plus one.
pub fn summarize(recorded: &[RecordedAttendance]) -> Confirmation {
    Confirmation {
        guest_attending: recorded.iter().any(|r| r.attending),
        plus_one_attending: recorded.iter().any(|r| r.plus_one_attending),
    }
}

/// Writes a validated submission as one unit of work. Every party row is
/// updated or none is; an id matching no row aborts the whole submission.
pub async fn commit(store: &dyn GuestStore, submission: &Submission) -> Result<Confirmation, RsvpError> {
    let updates = plan_updates(submission);
    let mut unit = store.begin().await?;
    let mut recorded = Vec::with_capacity(updates.len());

    for update in &updates {
        let outcome = match unit.apply(update).await {
            Ok(rows) if rows.is_empty() => Err(RsvpError::NotFound),
            Ok(rows) => {
                recorded.extend(rows);
                Ok(())
            }
            Err(e) => Err(RsvpError::from(e)),
        };

        if let Err(e) = outcome {
            tracing::debug!("Rolling back RSVP at guest {}: {}", update.guest_id, e);
            if let Err(rollback_err) = unit.rollback().await {
                tracing::error!("Failed to roll back RSVP transaction: {}", rollback_err);
            }
            return Err(e);
        }
    }

    unit.commit().await?;
    Ok(summarize(&recorded))
}
