use jiff::{SignedDuration, Timestamp};
use sea_orm::{DatabaseConnection, EntityTrait, Set, sea_query::OnConflict};
use tracing::{debug, info, warn};

use crate::{
    entities::storage_slot,
    error::{CatalogError, CatalogResult, StorageError},
    models::{MediaDraft, MediaId, MediaRecord},
    seed,
};

pub const DEFAULT_SLOT: &str = "media_tracker_items";

/// The whole media collection, kept as one JSON document in a named slot.
///
/// Every mutation is a read-modify-write of the full document followed by a
/// single upsert, so a failed write leaves the previous document in place.
/// The store is the only place identifiers and timestamps are minted.
#[derive(Clone)]
pub struct Store {
    db: DatabaseConnection,
    slot: String,
}

impl Store {
    pub fn new(db: DatabaseConnection) -> Self {
        Self::with_slot(db, DEFAULT_SLOT)
    }

    pub fn with_slot(db: DatabaseConnection, slot: impl Into<String>) -> Self {
        Self { db, slot: slot.into() }
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Seeds the slot if nothing usable is stored yet. Call once at startup.
    pub async fn initialize(&self) -> CatalogResult<usize> {
        let items = self.load_all().await?;
        info!(slot = %self.slot, count = items.len(), "media store ready");
        Ok(items.len())
    }

    pub async fn load_all(&self) -> CatalogResult<Vec<MediaRecord>> {
        match self.read_document().await {
            Ok(Some(items)) => Ok(items),
            Ok(None) => self.reseed().await,
            Err(err) => {
                warn!(slot = %self.slot, error = %err, "unreadable media document, reseeding");
                self.reseed().await
            },
        }
    }

    pub async fn append(&self, draft: MediaDraft) -> CatalogResult<MediaRecord> {
        let mut items = self.load_all().await?;
        let record = draft.into_record(fresh_id(&items), Timestamp::now());
        items.push(record.clone());

        self.write_document(&items).await?;
        debug!(id = %record.id, "appended media record");
        Ok(record)
    }

    /// Applies `mutator` to the record with `id`. Nothing is written if the
    /// mutator fails. `id` and `created_at` cannot be changed by the mutator.
    pub async fn replace<F>(&self, id: &MediaId, mutator: F) -> CatalogResult<MediaRecord>
    where
        F: FnOnce(&mut MediaRecord) -> CatalogResult<()>,
    {
        let mut items = self.load_all().await?;
        let Some(record) = items.iter_mut().find(|r| &r.id == id) else {
            return Err(CatalogError::NotFound(id.clone()));
        };

        let previous = record.clone();
        mutator(record)?;
        record.id = previous.id;
        record.created_at = previous.created_at;
        record.updated_at = later_than(previous.updated_at);
        let updated = record.clone();

        self.write_document(&items).await?;
        debug!(id = %updated.id, "replaced media record");
        Ok(updated)
    }

    /// Returns whether a record was actually removed.
    pub async fn remove(&self, id: &MediaId) -> CatalogResult<bool> {
        let mut items = self.load_all().await?;
        let before = items.len();
        items.retain(|r| &r.id != id);
        let removed = items.len() != before;

        self.write_document(&items).await?;
        debug!(id = %id, removed, "removed media record");
        Ok(removed)
    }

    async fn reseed(&self) -> CatalogResult<Vec<MediaRecord>> {
        let items = seed::seed_records(Timestamp::now());
        self.write_document(&items).await?;
        info!(slot = %self.slot, count = items.len(), "seeded media collection");
        Ok(items)
    }

    async fn read_document(&self) -> Result<Option<Vec<MediaRecord>>, StorageError> {
        let Some(row) = storage_slot::Entity::find_by_id(self.slot.clone()).one(&self.db).await?
        else {
            return Ok(None);
        };

        let items: Vec<MediaRecord> = serde_json::from_str(&row.document)?;
        debug!(slot = %self.slot, count = items.len(), "loaded media document");
        Ok(Some(items))
    }

    async fn write_document(&self, items: &[MediaRecord]) -> CatalogResult<()> {
        let document = serde_json::to_string(items).map_err(StorageError::from)?;

        let model = storage_slot::ActiveModel {
            name: Set(self.slot.clone()),
            document: Set(document),
            updated_at: Set(Timestamp::now().as_second()),
        };

        storage_slot::Entity::insert(model)
            .on_conflict(
                OnConflict::column(storage_slot::Column::Name)
                    .update_columns([storage_slot::Column::Document, storage_slot::Column::UpdatedAt])
                    .to_owned(),
            )
            .exec(&self.db)
            .await
            .inspect_err(|err| warn!(slot = %self.slot, error = %err, "failed to persist media document"))?;

        Ok(())
    }
}

fn fresh_id(items: &[MediaRecord]) -> MediaId {
    loop {
        let id = MediaId::generate();
        if items.iter().all(|r| r.id != id) {
            return id;
        }
    }
}

/// The current time, or one nanosecond past `previous` if the clock has not
/// moved beyond it.
fn later_than(previous: Timestamp) -> Timestamp {
    let now = Timestamp::now();
    if now > previous {
        now
    } else {
        previous.checked_add(SignedDuration::from_nanos(1)).unwrap_or(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_than_always_advances() {
        let future = Timestamp::now().checked_add(SignedDuration::from_hours(1)).unwrap();
        assert!(later_than(future) > future);

        let past = Timestamp::UNIX_EPOCH;
        assert!(later_than(past) > past);
    }

    #[test]
    fn fresh_id_avoids_existing_ids() {
        let items = seed::seed_records(Timestamp::UNIX_EPOCH);
        let id = fresh_id(&items);
        assert!(items.iter().all(|r| r.id != id));
    }
}
