use async_trait::async_trait;
use sqlx::FromRow;
use sqlx::PgPool;

use crate::domain::kitten::errors::KittenError;
use crate::domain::kitten::models::Kitten;
use crate::domain::kitten::models::KittenAge;
use crate::domain::kitten::models::KittenColor;
use crate::domain::kitten::models::KittenId;
use crate::domain::kitten::models::KittenName;
use crate::domain::kitten::models::NewKitten;
use crate::domain::kitten::ports::KittenRepository;
use crate::domain::user::models::UserId;

pub struct PostgresKittenRepository {
    pool: PgPool,
}

impl PostgresKittenRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct KittenRecord {
    id: i64,
    name: String,
    age: i32,
    color: String,
    owner_id: i64,
}

impl TryFrom<KittenRecord> for Kitten {
    type Error = KittenError;

    fn try_from(record: KittenRecord) -> Result<Self, Self::Error> {
        Ok(Kitten {
            id: KittenId(record.id),
            name: KittenName::new(record.name)?,
            age: KittenAge::new(record.age)?,
            color: KittenColor::new(record.color)?,
            owner_id: UserId(record.owner_id),
        })
    }
}

#[async_trait]
impl KittenRepository for PostgresKittenRepository {
    async fn create(&self, kitten: NewKitten) -> Result<Kitten, KittenError> {
        let record = sqlx::query_as::<_, KittenRecord>(
            r#"
            INSERT INTO kittens (name, age, color, owner_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, age, color, owner_id
            "#,
        )
        .bind(kitten.name.as_str())
        .bind(kitten.age.value())
        .bind(kitten.color.as_str())
        .bind(kitten.owner_id.0)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| KittenError::DatabaseError(e.to_string()))?;

        record.try_into()
    }

    async fn find_by_id(&self, id: KittenId) -> Result<Option<Kitten>, KittenError> {
        let record = sqlx::query_as::<_, KittenRecord>(
            r#"
            SELECT id, name, age, color, owner_id
            FROM kittens
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| KittenError::DatabaseError(e.to_string()))?;

        record.map(Kitten::try_from).transpose()
    }

    async fn find_by_id_and_owner(
        &self,
        id: KittenId,
        owner: UserId,
    ) -> Result<Option<Kitten>, KittenError> {
        let record = sqlx::query_as::<_, KittenRecord>(
            r#"
            SELECT id, name, age, color, owner_id
            FROM kittens
            WHERE id = $1 AND owner_id = $2
            "#,
        )
        .bind(id.0)
        .bind(owner.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| KittenError::DatabaseError(e.to_string()))?;

        record.map(Kitten::try_from).transpose()
    }

    async fn delete(&self, id: KittenId) -> Result<(), KittenError> {
        let result = sqlx::query(
            r#"
            DELETE FROM kittens
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| KittenError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(KittenError::NotFound(id));
        }

        Ok(())
    }
}
