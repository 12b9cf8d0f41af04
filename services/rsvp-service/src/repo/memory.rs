//! In-process `GuestStore` used by the unit tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::{GuestStore, StoreError, UnitOfWork};
use crate::domain::{AttendanceUpdate, Guest, RecordedAttendance};

#[derive(Clone, Default)]
pub struct MemoryGuestStore {
    rows: Arc<Mutex<Vec<Guest>>>,
    calls: Arc<AtomicUsize>,
    fail_on_apply: Option<usize>,
    fail_on_commit: bool,
    fail_reads: bool,
}

impl MemoryGuestStore {
    pub fn new(guests: Vec<Guest>) -> Self {
        Self {
            rows: Arc::new(Mutex::new(guests)),
            ..Self::default()
        }
    }

    /// The `n`th `apply` (zero based) inside any unit of work fails.
    pub fn failing_on_apply(mut self, n: usize) -> Self {
        self.fail_on_apply = Some(n);
        self
    }

    pub fn failing_on_commit(mut self) -> Self {
        self.fail_on_commit = true;
        self
    }

    pub fn failing_reads(mut self) -> Self {
        self.fail_reads = true;
        self
    }

    /// Number of store operations issued so far, reads and `begin` alike.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn snapshot(&self) -> Vec<Guest> {
        self.rows.lock().unwrap().clone()
    }

    pub fn get(&self, guest_id: &str) -> Guest {
        self.snapshot()
            .into_iter()
            .find(|g| g.id == guest_id)
            .unwrap_or_else(|| panic!("no guest {}", guest_id))
    }

    fn read<F>(&self, filter: F) -> Result<Vec<Guest>, StoreError>
    where
        F: Fn(&Guest) -> bool,
    {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_reads {
            return Err(sqlx::Error::PoolTimedOut.into());
        }
        Ok(self.rows.lock().unwrap().iter().filter(|g| filter(g)).cloned().collect())
    }
}

#[async_trait]
impl GuestStore for MemoryGuestStore {
    async fn find_by_id(&self, guest_id: &str) -> Result<Vec<Guest>, StoreError> {
        self.read(|g| g.id == guest_id)
    }

    async fn find_by_last_name(&self, last_name: &str) -> Result<Vec<Guest>, StoreError> {
        let last_name = last_name.to_lowercase();
        let mut guests = self.read(|g| g.last_name.to_lowercase() == last_name)?;
        guests.sort_by(|a, b| a.first_name.cmp(&b.first_name));
        Ok(guests)
    }

    async fn find_by_invitation(&self, invitation_id: &str) -> Result<Vec<Guest>, StoreError> {
        let mut guests = self.read(|g| g.invitation_id == invitation_id)?;
        guests.sort_by(|a, b| a.first_name.cmp(&b.first_name).then_with(|| a.id.cmp(&b.id)));
        Ok(guests)
    }

    async fn begin(&self) -> Result<Box<dyn UnitOfWork>, StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(MemoryUnitOfWork {
            rows: Arc::clone(&self.rows),
            staged: Vec::new(),
            fail_on_apply: self.fail_on_apply,
            fail_on_commit: self.fail_on_commit,
        }))
    }
}

struct MemoryUnitOfWork {
    rows: Arc<Mutex<Vec<Guest>>>,
    staged: Vec<AttendanceUpdate>,
    fail_on_apply: Option<usize>,
    fail_on_commit: bool,
}

#[async_trait]
impl UnitOfWork for MemoryUnitOfWork {
    async fn apply(&mut self, update: &AttendanceUpdate) -> Result<Vec<RecordedAttendance>, StoreError> {
        if self.fail_on_apply == Some(self.staged.len()) {
            return Err(sqlx::Error::PoolClosed.into());
        }
        let recorded = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|g| g.id == update.guest_id)
            .map(|g| RecordedAttendance {
                attending: update.attending,
                plus_one_attending: update.plus_one_attending && g.plus_one_allowed,
            })
            .collect();
        self.staged.push(update.clone());
        Ok(recorded)
    }

    async fn commit(self: Box<Self>) -> Result<(), StoreError> {
        if self.fail_on_commit {
            return Err(sqlx::Error::WorkerCrashed.into());
        }
        let mut rows = self.rows.lock().unwrap();
        for update in &self.staged {
            for guest in rows.iter_mut().filter(|g| g.id == update.guest_id) {
                guest.has_rsvpd = true;
                guest.attending = Some(update.attending);
                guest.plus_one_attending = update.plus_one_attending && guest.plus_one_allowed;
                guest.plus_one_name = update.plus_one_name.clone();
                guest.song_requests = update.song_requests.clone();
                guest.notes = update.notes.clone();
            }
        }
        Ok(())
    }

    async fn rollback(self: Box<Self>) -> Result<(), StoreError> {
        Ok(())
    }
}
