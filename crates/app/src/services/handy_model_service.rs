//! Handy model service: access-gated use-cases for phone models.

use handyhub_domain::access::{AccessTier, Action};
use handyhub_domain::error::{HandyError, NotFoundError};
use handyhub_domain::handy_model::{HandyModel, HandyModelChanges};
use handyhub_domain::id::{BrandId, HandyModelId};

use crate::ports::HandyModelRepository;

const ENTITY: &str = "HandyModel";

fn not_found(id: HandyModelId) -> HandyError {
    NotFoundError {
        entity: ENTITY,
        id: id.to_string(),
    }
    .into()
}

/// Application service for phone model CRUD operations.
///
/// Every method checks the caller's [`AccessTier`] first and touches the
/// repository only once access is granted.
pub struct HandyModelService<R> {
    repo: R,
}

impl<R: HandyModelRepository> HandyModelService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    fn authorize(tier: AccessTier, action: Action) -> Result<(), HandyError> {
        tier.authorize(action).map_err(|err| {
            tracing::debug!(%err, "access denied");
            HandyError::from(err)
        })
    }

    /// List all models, optionally sorted by name.
    ///
    /// Sorting is stable and compares names by UTF-16 code units; without it
    /// the repository order is kept.
    ///
    /// # Errors
    ///
    /// Returns [`HandyError::Forbidden`] for guests, or a storage error
    /// propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn list(&self, tier: AccessTier, sort: bool) -> Result<Vec<HandyModel>, HandyError> {
        Self::authorize(tier, Action::List)?;
        let mut models = self.repo.get_all().await?;
        if sort {
            models.sort_by(|a, b| a.name.encode_utf16().cmp(b.name.encode_utf16()));
        }
        Ok(models)
    }

    /// Look up a model by id.
    ///
    /// # Errors
    ///
    /// Returns [`HandyError::Forbidden`] for guests, [`HandyError::NotFound`]
    /// when no model with `id` exists, or a storage error.
    #[tracing::instrument(skip(self))]
    pub async fn get(&self, tier: AccessTier, id: HandyModelId) -> Result<HandyModel, HandyError> {
        Self::authorize(tier, Action::Read)?;
        self.repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Create a new model under a freshly generated id.
    ///
    /// # Errors
    ///
    /// Returns [`HandyError::Forbidden`] unless the tier is elevated,
    /// [`HandyError::Validation`] if invariants fail, or a storage error.
    #[tracing::instrument(skip(self, changes), fields(name = %changes.name))]
    pub async fn create(
        &self,
        tier: AccessTier,
        changes: HandyModelChanges,
        brand_id: BrandId,
    ) -> Result<HandyModel, HandyError> {
        changes.validate()?;
        Self::authorize(tier, Action::Create)?;
        let model = HandyModel::builder()
            .id(HandyModelId::new())
            .changes(changes)
            .brand_id(brand_id)
            .build()?;
        let created = self.repo.create(model).await?;
        tracing::info!(id = %created.id, "handy model created");
        Ok(created)
    }

    /// Overwrite the mutable fields of an existing model, keeping its id.
    ///
    /// # Errors
    ///
    /// Returns [`HandyError::Forbidden`] unless the tier is elevated,
    /// [`HandyError::NotFound`] when no model with `id` exists (or it
    /// disappeared before the write), [`HandyError::Validation`] if
    /// invariants fail, or a storage error.
    #[tracing::instrument(skip(self, changes))]
    pub async fn update(
        &self,
        tier: AccessTier,
        id: HandyModelId,
        changes: HandyModelChanges,
        brand_id: BrandId,
    ) -> Result<HandyModel, HandyError> {
        changes.validate()?;
        Self::authorize(tier, Action::Update)?;
        let existing = self
            .repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))?;
        self.repo
            .update(existing.apply(changes, brand_id))
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Delete a model by id.
    ///
    /// # Errors
    ///
    /// Returns [`HandyError::Forbidden`] unless the tier is elevated,
    /// [`HandyError::NotFound`] when nothing was deleted, or a storage error.
    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, tier: AccessTier, id: HandyModelId) -> Result<(), HandyError> {
        Self::authorize(tier, Action::Delete)?;
        if self.repo.delete(id).await? {
            tracing::info!(%id, "handy model deleted");
            Ok(())
        } else {
            Err(not_found(id))
        }
    }
}
