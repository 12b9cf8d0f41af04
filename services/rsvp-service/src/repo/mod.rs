pub mod guest_repo;
#[cfg(test)]
pub mod memory;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{AttendanceUpdate, Guest, RecordedAttendance};

pub use guest_repo::PgGuestStore;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Read access to the guest table plus a way to open a unit of work for
/// attendance updates. Handed to the services explicitly.
#[async_trait]
pub trait GuestStore: Send + Sync {
    /// Every row carrying `guest_id`. More than one row means the table is
    /// corrupt; callers decide how to report it.
    async fn find_by_id(&self, guest_id: &str) -> Result<Vec<Guest>, StoreError>;

    /// Guests whose lowercased last name equals `last_name`, ordered by first name.
    async fn find_by_last_name(&self, last_name: &str) -> Result<Vec<Guest>, StoreError>;

    async fn find_by_invitation(&self, invitation_id: &str) -> Result<Vec<Guest>, StoreError>;

    async fn begin(&self) -> Result<Box<dyn UnitOfWork>, StoreError>;
}

/// A transactional scope. Nothing applied through it is visible until
/// `commit`; dropping it without committing discards every change.
#[async_trait]
pub trait UnitOfWork: Send {
    /// Returns the flags written to each row the update touched; empty when
    /// no row carries the guest id.
    async fn apply(&mut self, update: &AttendanceUpdate) -> Result<Vec<RecordedAttendance>, StoreError>;

    async fn commit(self: Box<Self>) -> Result<(), StoreError>;

    async fn rollback(self: Box<Self>) -> Result<(), StoreError>;
}
