//! In-process record stores.
//!
//! Used when no database is configured and by the test-suite. Ids are
//! assigned from a per-table counter starting at 1, like a `BIGSERIAL` column.

use std::collections::BTreeMap;
use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::kitten::errors::KittenError;
use crate::domain::kitten::models::Kitten;
use crate::domain::kitten::models::KittenId;
use crate::domain::kitten::models::NewKitten;
use crate::domain::kitten::ports::KittenRepository;
use crate::domain::user::errors::UserError;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;
use crate::domain::user::ports::UserRepository;

#[derive(Debug, Default)]
struct UserTable {
    last_id: i64,
    /// username -> user
    rows: HashMap<String, User>,
}

#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    table: RwLock<UserTable>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: NewUser) -> Result<User, UserError> {
        let mut table = self.table.write().await;

        if table.rows.contains_key(user.username.as_str()) {
            return Err(UserError::UsernameAlreadyExists(
                user.username.as_str().to_string(),
            ));
        }

        table.last_id += 1;
        let created = User {
            id: UserId(table.last_id),
            username: user.username,
            password_hash: user.password_hash,
        };
        table
            .rows
            .insert(created.username.as_str().to_string(), created.clone());

        Ok(created)
    }

    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError> {
        Ok(self.table.read().await.rows.get(username.as_str()).cloned())
    }
}

#[derive(Debug, Default)]
struct KittenTable {
    last_id: i64,
    rows: BTreeMap<KittenId, Kitten>,
}

#[derive(Debug, Default)]
pub struct InMemoryKittenRepository {
    table: RwLock<KittenTable>,
}

impl InMemoryKittenRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KittenRepository for InMemoryKittenRepository {
    async fn create(&self, kitten: NewKitten) -> Result<Kitten, KittenError> {
        let mut table = self.table.write().await;

        table.last_id += 1;
        let created = Kitten {
            id: KittenId(table.last_id),
            name: kitten.name,
            age: kitten.age,
            color: kitten.color,
            owner_id: kitten.owner_id,
        };
        table.rows.insert(created.id, created.clone());

        Ok(created)
    }

    async fn find_by_id(&self, id: KittenId) -> Result<Option<Kitten>, KittenError> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn find_by_id_and_owner(
        &self,
        id: KittenId,
        owner: UserId,
    ) -> Result<Option<Kitten>, KittenError> {
        Ok(self
            .table
            .read()
            .await
            .rows
            .get(&id)
            .filter(|kitten| kitten.is_owned_by(owner))
            .cloned())
    }

    async fn delete(&self, id: KittenId) -> Result<(), KittenError> {
        self.table
            .write()
            .await
            .rows
            .remove(&id)
            .map(|_| ())
            .ok_or(KittenError::NotFound(id))
    }
}
