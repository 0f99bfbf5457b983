//! # 사용자 리포지토리 구현
//!
//! 사용자 엔티티의 데이터 액세스 계층을 담당하는 리포지토리입니다.
//!
//! ## 특징
//!
//! - **소프트 삭제**: 삭제는 `deleted_at`을 기록할 뿐 문서를 지우지 않습니다.
//! - **활성 레코드 우선**: 인증 경로는 항상 `deleted_at: null` 조건으로 조회합니다.
//! - **정수 ID**: `counters` 컬렉션에서 `users` 시퀀스를 발급합니다.
//! - **데이터 무결성**: `(email, deleted_at)` 유니크 인덱스로 활성 계정 이메일 중복을 막습니다.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, Bson, DateTime},
    error::{ErrorKind, WriteFailure},
    options::IndexOptions,
    Collection, IndexModel,
};
use crate::db::Database;
use crate::domain::entities::users::{NewUser, User};
use crate::errors::AppError;
use crate::repositories::counters::next_sequence;
use crate::repositories::ResourceOwnerLookup;

/// MongoDB duplicate key 에러 코드
const DUPLICATE_KEY_CODE: i32 = 11000;

/// 자격 증명 레코드 저장소
///
/// `include_deleted`가 false이면 소프트 삭제된 레코드는 없는 것으로 취급합니다.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// 이메일로 조회. 삭제된 레코드를 포함하면 가장 최근 레코드를 반환합니다.
    async fn find_by_email(&self, email: &str, include_deleted: bool) -> Result<Option<User>, AppError>;

    async fn find_by_id(&self, id: i64, include_deleted: bool) -> Result<Option<User>, AppError>;

    /// 새 레코드 생성. 같은 이메일의 활성 레코드가 있으면 `UserAlreadyExists`.
    async fn create(&self, new_user: NewUser) -> Result<User, AppError>;

    /// 소프트 삭제. 활성 레코드가 없었으면 false.
    async fn soft_delete(&self, id: i64) -> Result<bool, AppError>;

    async fn find_all_active(&self) -> Result<Vec<User>, AppError>;
}

/// 사용자 데이터 액세스 리포지토리
///
/// - **컬렉션명**: `users`
/// - **인덱스**: `(email, deleted_at)` unique, `created_at` desc
///
/// ## 사용 예제
///
/// ```rust,ignore
/// let repo = UserRepository::new(&database);
/// repo.create_indexes().await?;
///
/// let found = repo.find_by_email("john@example.com", false).await?;
/// ```
#[derive(Clone)]
pub struct UserRepository {
    db: mongodb::Database,
}

impl UserRepository {
    pub const COLLECTION: &'static str = "users";

    pub fn new(database: &Database) -> Self {
        Self {
            db: database.get_database(),
        }
    }

    fn collection(&self) -> Collection<User> {
        self.db.collection::<User>(Self::COLLECTION)
    }

    /// 컬렉션 인덱스 생성
    ///
    /// 애플리케이션 기동 시 한 번 호출합니다. 이미 존재하면 아무 일도 하지 않습니다.
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        // 활성 계정 사이에서만 이메일 유니크 (deleted_at이 null인 문서끼리 충돌)
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1, "deleted_at": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("email_deleted_at_unique".to_string())
                .build())
            .build();

        let created_at_index = IndexModel::builder()
            .keys(doc! { "created_at": -1 })
            .options(IndexOptions::builder()
                .name("created_at_desc".to_string())
                .build())
            .build();

        self.collection()
            .create_indexes([email_index, created_at_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        log::info!("✅ users 컬렉션 인덱스 확인 완료");
        Ok(())
    }
}

fn is_duplicate_key(error: &mongodb::error::Error) -> bool {
    matches!(
        error.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(write_error)) if write_error.code == DUPLICATE_KEY_CODE
    )
}

#[async_trait]
impl UserStore for UserRepository {
    async fn find_by_email(&self, email: &str, include_deleted: bool) -> Result<Option<User>, AppError> {
        let mut filter = doc! { "email": email };
        if !include_deleted {
            filter.insert("deleted_at", Bson::Null);
        }

        self.collection()
            .find_one(filter)
            .sort(doc! { "created_at": -1 })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_by_id(&self, id: i64, include_deleted: bool) -> Result<Option<User>, AppError> {
        let mut filter = doc! { "_id": id };
        if !include_deleted {
            filter.insert("deleted_at", Bson::Null);
        }

        self.collection()
            .find_one(filter)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn create(&self, new_user: NewUser) -> Result<User, AppError> {
        let id = next_sequence(&self.db, Self::COLLECTION).await?;
        let user = User::new_local(id, new_user);

        self.collection()
            .insert_one(&user)
            .await
            .map_err(|e| {
                if is_duplicate_key(&e) {
                    AppError::UserAlreadyExists
                } else {
                    AppError::DatabaseError(e.to_string())
                }
            })?;

        log::debug!("사용자 생성 완료: ID {}", user.id);
        Ok(user)
    }

    async fn soft_delete(&self, id: i64) -> Result<bool, AppError> {
        let now = DateTime::now();

        let result = self.collection()
            .update_one(
                doc! { "_id": id, "deleted_at": Bson::Null },
                doc! { "$set": { "deleted_at": now, "updated_at": now } },
            )
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.modified_count > 0)
    }

    async fn find_all_active(&self) -> Result<Vec<User>, AppError> {
        let cursor = self.collection()
            .find(doc! { "deleted_at": Bson::Null })
            .sort(doc! { "_id": 1 })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }
}

/// 사용자 리소스의 소유자는 사용자 자신입니다.
#[async_trait]
impl ResourceOwnerLookup for UserRepository {
    async fn find_owner_of(&self, resource_id: i64) -> Result<Option<i64>, AppError> {
        Ok(self.find_by_id(resource_id, false).await?.map(|user| user.id))
    }
}
