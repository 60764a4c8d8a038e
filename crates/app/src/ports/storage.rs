//! Storage port: repository trait for persisting phone models.

use std::future::Future;

use handyhub_domain::error::HandyError;
use handyhub_domain::handy_model::HandyModel;
use handyhub_domain::id::HandyModelId;

/// Repository for persisting and querying [`HandyModel`]s.
///
/// Implementations must make every call atomic with respect to a single id.
/// Concurrent callers are not serialised by the application layer.
pub trait HandyModelRepository {
    /// Insert a new model.
    fn create(&self, model: HandyModel)
    -> impl Future<Output = Result<HandyModel, HandyError>> + Send;

    /// Get a model by its unique identifier.
    fn get_by_id(
        &self,
        id: HandyModelId,
    ) -> impl Future<Output = Result<Option<HandyModel>, HandyError>> + Send;

    /// Get all models in store iteration order.
    fn get_all(&self) -> impl Future<Output = Result<Vec<HandyModel>, HandyError>> + Send;

    /// Replace the stored model having the same id.
    ///
    /// Resolves to `None` when no such model exists.
    fn update(
        &self,
        model: HandyModel,
    ) -> impl Future<Output = Result<Option<HandyModel>, HandyError>> + Send;

    /// Delete a model by id, resolving to `false` when nothing was deleted.
    fn delete(&self, id: HandyModelId) -> impl Future<Output = Result<bool, HandyError>> + Send;
}
