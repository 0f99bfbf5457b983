use std::marker::PhantomData;
use async_trait::async_trait;
use mongodb::{bson::{doc, Bson}, options::IndexOptions, Collection, IndexModel};
use crate::db::Database;
use crate::domain::entities::resources::{CreditCard, Expense, OwnedEntity};
use crate::errors::AppError;
use crate::repositories::ResourceOwnerLookup;

/// 단건 조회만 제공하는 리소스 저장소
#[async_trait]
pub trait ResourceStore<T: OwnedEntity>: Send + Sync {
    /// 활성 리소스 조회. 없거나 소프트 삭제되었으면 None.
    async fn find_active(&self, id: i64) -> Result<Option<T>, AppError>;
}

/// `OwnedEntity` 컬렉션에 대한 MongoDB 리포지토리
pub struct ResourceRepository<T: OwnedEntity> {
    db: mongodb::Database,
    _entity: PhantomData<fn() -> T>,
}

pub type CreditCardRepository = ResourceRepository<CreditCard>;
pub type ExpenseRepository = ResourceRepository<Expense>;

impl<T: OwnedEntity> ResourceRepository<T> {
    pub fn new(database: &Database) -> Self {
        Self {
            db: database.get_database(),
            _entity: PhantomData,
        }
    }

    fn collection(&self) -> Collection<T> {
        self.db.collection::<T>(T::COLLECTION)
    }

    /// 소유자별 조회를 위한 `user_id` 인덱스 생성
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let owner_index = IndexModel::builder()
            .keys(doc! { "user_id": 1 })
            .options(IndexOptions::builder()
                .name("user_id".to_string())
                .build())
            .build();

        self.collection()
            .create_index(owner_index)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        log::info!("✅ {} 컬렉션 인덱스 확인 완료", T::COLLECTION);
        Ok(())
    }
}

#[async_trait]
impl<T: OwnedEntity> ResourceStore<T> for ResourceRepository<T> {
    async fn find_active(&self, id: i64) -> Result<Option<T>, AppError> {
        self.collection()
            .find_one(doc! { "_id": id, "deleted_at": Bson::Null })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }
}

#[async_trait]
impl<T: OwnedEntity> ResourceOwnerLookup for ResourceRepository<T> {
    async fn find_owner_of(&self, resource_id: i64) -> Result<Option<i64>, AppError> {
        Ok(self.find_active(resource_id).await?.map(|resource| resource.owner_id()))
    }
}
