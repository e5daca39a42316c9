use std::sync::Arc;

use async_trait::async_trait;

use crate::kitten::errors::KittenError;
use crate::kitten::models::CreateKittenCommand;
use crate::kitten::models::Kitten;
use crate::kitten::models::KittenId;
use crate::kitten::models::NewKitten;
use crate::kitten::ports::KittenRepository;
use crate::kitten::ports::KittenServicePort;
use crate::user::models::UserId;

/// Domain service implementation for kitten operations.
///
/// Enforces ownership: reads distinguish "missing" from "someone else's",
/// deletes only ever touch the requester's own kittens.
pub struct KittenService<KR>
where
    KR: KittenRepository,
{
    repository: Arc<KR>,
}

impl<KR> KittenService<KR>
where
    KR: KittenRepository,
{
    pub fn new(repository: Arc<KR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<KR> KittenServicePort for KittenService<KR>
where
    KR: KittenRepository,
{
    async fn create_kitten(
        &self,
        owner: UserId,
        command: CreateKittenCommand,
    ) -> Result<Kitten, KittenError> {
        let kitten = self
            .repository
            .create(NewKitten {
                name: command.name,
                age: command.age,
                color: command.color,
                owner_id: owner,
            })
            .await?;

        tracing::info!(kitten_id = %kitten.id, owner_id = %owner, "Kitten created");

        Ok(kitten)
    }

    async fn get_kitten(&self, requester: UserId, id: KittenId) -> Result<Kitten, KittenError> {
        let kitten = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(KittenError::NotFound(id))?;

        if !kitten.is_owned_by(requester) {
            tracing::warn!(
                kitten_id = %id,
                owner_id = %kitten.owner_id,
                requester_id = %requester,
                "Kitten read by non-owner refused"
            );
            return Err(KittenError::NotOwner {
                user_id: requester,
                kitten_id: id,
            });
        }

        Ok(kitten)
    }

    async fn delete_kitten(&self, requester: UserId, id: KittenId) -> Result<(), KittenError> {
        let not_found_for_owner = || KittenError::NotFoundForOwner {
            user_id: requester,
            kitten_id: id,
        };

        let kitten = self
            .repository
            .find_by_id_and_owner(id, requester)
            .await?
            .ok_or_else(not_found_for_owner)?;

        self.repository
            .delete(kitten.id)
            .await
            .map_err(|e| match e {
                KittenError::NotFound(_) => not_found_for_owner(),
                other => other,
            })?;

        tracing::info!(kitten_id = %id, owner_id = %requester, "Kitten deleted");

        Ok(())
    }
}
