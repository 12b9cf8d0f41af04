use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Transaction};

use super::{GuestStore, StoreError, UnitOfWork};
use crate::domain::{AttendanceUpdate, Guest, RecordedAttendance};

const GUEST_COLUMNS: &str = "id, invitation_id, first_name, last_name, attending, plus_one_allowed, \
     plus_one_attending, plus_one_name, song_requests, notes, has_rsvpd";

#[derive(Clone)]
pub struct PgGuestStore {
    pool: PgPool,
}

impl PgGuestStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GuestStore for PgGuestStore {
    async fn find_by_id(&self, guest_id: &str) -> Result<Vec<Guest>, StoreError> {
        let sql = format!("SELECT {} FROM guests WHERE id = $1", GUEST_COLUMNS);
        let guests = sqlx::query_as::<_, Guest>(&sql)
            .bind(guest_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(guests)
    }

    async fn find_by_last_name(&self, last_name: &str) -> Result<Vec<Guest>, StoreError> {
        let sql = format!(
            "SELECT {} FROM guests WHERE lower(last_name) = lower($1) ORDER BY first_name ASC",
            GUEST_COLUMNS
        );
        let guests = sqlx::query_as::<_, Guest>(&sql)
            .bind(last_name)
            .fetch_all(&self.pool)
            .await?;
        Ok(guests)
    }

    async fn find_by_invitation(&self, invitation_id: &str) -> Result<Vec<Guest>, StoreError> {
        let sql = format!(
            "SELECT {} FROM guests WHERE invitation_id = $1 ORDER BY first_name ASC, id ASC",
            GUEST_COLUMNS
        );
        let guests = sqlx::query_as::<_, Guest>(&sql)
            .bind(invitation_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(guests)
    }

    async fn begin(&self) -> Result<Box<dyn UnitOfWork>, StoreError> {
        let tx = self.pool.begin().await?;
        Ok(Box::new(PgUnitOfWork { tx }))
    }
}

pub struct PgUnitOfWork {
    tx: Transaction<'static, Postgres>,
}

#[async_trait]
impl UnitOfWork for PgUnitOfWork {
    async fn apply(&mut self, update: &AttendanceUpdate) -> Result<Vec<RecordedAttendance>, StoreError> {
        // plus_one_attending can never be set for a guest who isn't allowed one
        let recorded = sqlx::query_as::<_, RecordedAttendance>(
            r#"
            UPDATE guests
            SET has_rsvpd = TRUE,
                attending = $2,
                plus_one_attending = ($3 AND plus_one_allowed),
                plus_one_name = $4,
                song_requests = $5,
                notes = $6
            WHERE id = $1
            RETURNING attending, plus_one_attending
            "#,
        )
        .bind(&update.guest_id)
        .bind(update.attending)
        .bind(update.plus_one_attending)
        .bind(&update.plus_one_name)
        .bind(&update.song_requests)
        .bind(&update.notes)
        .fetch_all(&mut *self.tx)
        .await?;

        Ok(recorded)
    }

    async fn commit(self: Box<Self>) -> Result<(), StoreError> {
        self.tx.commit().await?;
        Ok(())
    }

    async fn rollback(self: Box<Self>) -> Result<(), StoreError> {
        self.tx.rollback().await?;
        Ok(())
    }
}
