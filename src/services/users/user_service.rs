//! 사용자 관리 서비스 구현
//!
//! 관리자용 목록 조회, 단건 조회, 소프트 삭제를 담당합니다.
//! 접근 제어(관리자 전용, 본인 또는 관리자)는 라우트의 게이트와 소유권 가드가
//! 이미 처리한 뒤 호출된다고 가정합니다.

use std::sync::Arc;
use crate::domain::dto::users::response::UserResponse;
use crate::errors::AppError;
use crate::repositories::users::UserStore;

/// 사용자 관리 서비스
pub struct UserService {
    users: Arc<dyn UserStore>,
}

impl UserService {
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self { users }
    }

    /// 활성 사용자 단건 조회
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 없거나 소프트 삭제된 사용자
    pub async fn get_user_by_id(&self, id: i64) -> Result<UserResponse, AppError> {
        let user = self.users
            .find_by_id(id, false)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("user {} not found", id)))?;

        Ok(UserResponse::from(user))
    }

    /// 활성 사용자 전체 목록 (ID 오름차순)
    pub async fn list_active_users(&self) -> Result<Vec<UserResponse>, AppError> {
        let users = self.users.find_all_active().await?;
        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    /// 사용자 소프트 삭제
    ///
    /// 레코드는 남고 `deleted_at`만 기록됩니다. 이후 로그인과 토큰 갱신이 거부되며,
    /// 같은 이메일로 새 계정을 만들 수 있습니다.
    pub async fn delete_user(&self, id: i64) -> Result<(), AppError> {
        if !self.users.soft_delete(id).await? {
            return Err(AppError::NotFound(format!("user {} not found", id)));
        }

        log::info!("사용자 소프트 삭제 완료: ID {}", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::users::{NewUser, Role};
    use crate::repositories::memory::InMemoryUserStore;

    async fn seeded() -> (UserService, i64) {
        let store = Arc::new(InMemoryUserStore::new());
        let user = store
            .create(NewUser {
                name: "A".to_string(),
                email: "a@x.com".to_string(),
                password_hash: "hash".to_string(),
                role: Role::User,
            })
            .await
            .unwrap();
        (UserService::new(store), user.id)
    }

    #[actix_web::test]
    async fn test_get_and_list_users() {
        let (service, id) = seeded().await;

        let user = service.get_user_by_id(id).await.unwrap();
        assert_eq!(user.email, "a@x.com");
        assert_eq!(service.list_active_users().await.unwrap().len(), 1);
        assert!(matches!(service.get_user_by_id(999).await, Err(AppError::NotFound(_))));
    }

    #[actix_web::test]
    async fn test_delete_hides_user() {
        let (service, id) = seeded().await;

        service.delete_user(id).await.unwrap();
        assert!(matches!(service.get_user_by_id(id).await, Err(AppError::NotFound(_))));
        assert!(service.list_active_users().await.unwrap().is_empty());
        assert!(matches!(service.delete_user(id).await, Err(AppError::NotFound(_))));
    }
}
