use async_trait::async_trait;

use crate::kitten::errors::KittenError;
use crate::kitten::models::CreateKittenCommand;
use crate::kitten::models::Kitten;
use crate::kitten::models::KittenId;
use crate::kitten::models::NewKitten;
use crate::user::models::UserId;

/// Port for kitten domain service operations.
///
/// Every operation acts on behalf of an authenticated requester.
#[async_trait]
pub trait KittenServicePort: Send + Sync + 'static {
    /// Create a kitten owned by `owner`.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create_kitten(
        &self,
        owner: UserId,
        command: CreateKittenCommand,
    ) -> Result<Kitten, KittenError>;

    /// Retrieve a kitten owned by `requester`.
    ///
    /// # Errors
    /// * `NotFound` - No kitten with this id
    /// * `NotOwner` - Kitten exists but belongs to another user
    /// * `DatabaseError` - Database operation failed
    async fn get_kitten(&self, requester: UserId, id: KittenId) -> Result<Kitten, KittenError>;

    /// Delete a kitten owned by `requester`.
    ///
    /// # Errors
    /// * `NotFoundForOwner` - No kitten with this id belongs to the requester;
    ///   nothing is deleted
    /// * `DatabaseError` - Database operation failed
    async fn delete_kitten(&self, requester: UserId, id: KittenId) -> Result<(), KittenError>;
}

/// Persistence operations for kittens.
#[async_trait]
pub trait KittenRepository: Send + Sync + 'static {
    /// Persist a new kitten.
    ///
    /// # Returns
    /// Created kitten with the id assigned by the store
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, kitten: NewKitten) -> Result<Kitten, KittenError>;

    /// Retrieve kitten by identifier, regardless of owner.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_id(&self, id: KittenId) -> Result<Option<Kitten>, KittenError>;

    /// Retrieve kitten by identifier only if `owner` owns it.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_id_and_owner(
        &self,
        id: KittenId,
        owner: UserId,
    ) -> Result<Option<Kitten>, KittenError>;

    /// Remove kitten from storage.
    ///
    /// # Errors
    /// * `NotFound` - Kitten does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete(&self, id: KittenId) -> Result<(), KittenError>;
}
