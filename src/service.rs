use tracing::{debug, info};

use crate::{
    error::{CatalogError, CatalogResult},
    models::{CreateInput, MediaDraft, MediaId, MediaRecord, PatchInput, YearInput, platform_detail},
    store::Store,
    validation::{self, Candidate},
};

/// Validating front door to the [`Store`], holding the last loaded view of
/// the collection.
pub struct Catalog {
    store: Store,
    items: Option<Vec<MediaRecord>>,
}

impl Catalog {
    pub fn new(store: Store) -> Self {
        Self { store, items: None }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub async fn list_items(&mut self) -> CatalogResult<&[MediaRecord]> {
        if self.items.is_none() {
            return self.refresh().await;
        }
        Ok(self.items.as_deref().unwrap_or_default())
    }

    pub async fn refresh(&mut self) -> CatalogResult<&[MediaRecord]> {
        let items = self.store.load_all().await?;
        debug!(count = items.len(), "catalog refreshed");
        let items: &[MediaRecord] = self.items.insert(items);
        Ok(items)
    }

    pub async fn get_item(&mut self, id: &MediaId) -> CatalogResult<MediaRecord> {
        self.list_items()
            .await?
            .iter()
            .find(|r| &r.id == id)
            .cloned()
            .ok_or_else(|| CatalogError::NotFound(id.clone()))
    }

    pub async fn create_item(&mut self, input: CreateInput) -> CatalogResult<MediaRecord> {
        let year = validation::check(
            &Candidate {
                title: &input.title,
                year: input.year,
                platform: input.platform,
                platform_other: &input.platform_other,
                cover: &input.cover,
            },
            current_year(),
        )
        .map_err(CatalogError::Validation)?;

        let draft = MediaDraft {
            title: input.title,
            year,
            description: input.description,
            status: input.status,
            platform: input.platform,
            platform_other: platform_detail(input.platform, input.platform_other),
            cover: input.cover,
        };

        let record = self.store.append(draft).await?;
        if let Some(items) = self.items.as_mut() {
            items.push(record.clone());
        }
        info!(id = %record.id, title = %record.title, "media item created");
        Ok(record)
    }

    /// A patch that only changes `status` skips form validation. Any other
    /// patch is merged over the stored record and the result is validated.
    pub async fn update_item(&mut self, id: &MediaId, patch: PatchInput) -> CatalogResult<MediaRecord> {
        let year = current_year();
        let record = self.store.replace(id, |record| apply_patch(record, patch, year)).await?;

        if let Some(slot) = self.items.as_mut().and_then(|items| items.iter_mut().find(|r| r.id == record.id)) {
            *slot = record.clone();
        }
        info!(id = %record.id, status = record.status.as_str(), "media item updated");
        Ok(record)
    }

    /// Deleting an id that is not stored succeeds without changing anything.
    pub async fn delete_item(&mut self, id: &MediaId) -> CatalogResult<()> {
        let removed = self.store.remove(id).await?;
        if let Some(items) = self.items.as_mut() {
            items.retain(|r| &r.id != id);
        }
        info!(id = %id, removed, "media item deleted");
        Ok(())
    }
}

fn apply_patch(record: &mut MediaRecord, patch: PatchInput, current_year: i16) -> CatalogResult<()> {
    if let Some(status) = patch.status_only() {
        record.status = status;
        return Ok(());
    }

    let title = patch.title.unwrap_or_else(|| record.title.clone());
    let cover = patch.cover.unwrap_or_else(|| record.cover.clone());
    let platform = patch.platform.unwrap_or(record.platform);
    let platform_other = patch.platform_other.unwrap_or_else(|| record.platform_other.clone());

    let year = validation::check(
        &Candidate {
            title: &title,
            year: Some(patch.year.unwrap_or(YearInput::from(record.year))),
            platform,
            platform_other: &platform_other,
            cover: &cover,
        },
        current_year,
    )
    .map_err(CatalogError::Validation)?;

    record.title = title;
    record.year = year;
    record.cover = cover;
    record.platform = platform;
    record.platform_other = platform_detail(platform, platform_other);
    if let Some(description) = patch.description {
        record.description = description;
    }
    if let Some(status) = patch.status {
        record.status = status;
    }
    Ok(())
}

pub fn current_year() -> i16 {
    jiff::Zoned::now().year()
}
