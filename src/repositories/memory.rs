//! 테스트용 인메모리 저장소
//!
//! MongoDB 구현과 같은 규칙(활성 레코드 조회, 활성 이메일 유니크, 소프트 삭제)을
//! 따르며 서비스와 HTTP 테스트에서 주입됩니다.

use std::collections::HashMap;
use std::sync::Mutex;
use async_trait::async_trait;
use mongodb::bson::DateTime;
use crate::domain::entities::resources::OwnedEntity;
use crate::domain::entities::users::{NewUser, User};
use crate::errors::AppError;
use crate::repositories::resources::ResourceStore;
use crate::repositories::users::UserStore;
use crate::repositories::ResourceOwnerLookup;

#[derive(Default)]
pub struct InMemoryUserStore {
    users: Mutex<Vec<User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 이미 완성된 레코드를 그대로 넣습니다. (관리자 계정 등 픽스처용)
    pub fn insert(&self, user: User) {
        self.users.lock().unwrap().push(user);
    }

    /// 저장된 레코드를 직접 고칩니다. (관리자에 의한 역할/이름 변경 흉내)
    pub fn update(&self, id: i64, change: impl FnOnce(&mut User)) {
        let mut users = self.users.lock().unwrap();
        if let Some(user) = users.iter_mut().find(|u| u.id == id) {
            change(user);
            user.updated_at = DateTime::now();
        }
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_by_email(&self, email: &str, include_deleted: bool) -> Result<Option<User>, AppError> {
        let users = self.users.lock().unwrap();
        Ok(users
            .iter()
            .rev()
            .find(|u| u.email == email && (include_deleted || !u.is_deleted()))
            .cloned())
    }

    async fn find_by_id(&self, id: i64, include_deleted: bool) -> Result<Option<User>, AppError> {
        let users = self.users.lock().unwrap();
        Ok(users
            .iter()
            .find(|u| u.id == id && (include_deleted || !u.is_deleted()))
            .cloned())
    }

    async fn create(&self, new_user: NewUser) -> Result<User, AppError> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email == new_user.email && !u.is_deleted()) {
            return Err(AppError::UserAlreadyExists);
        }

        let id = users.iter().map(|u| u.id).max().unwrap_or(0) + 1;
        let user = User::new_local(id, new_user);
        users.push(user.clone());
        Ok(user)
    }

    async fn soft_delete(&self, id: i64) -> Result<bool, AppError> {
        let mut users = self.users.lock().unwrap();
        match users.iter_mut().find(|u| u.id == id && !u.is_deleted()) {
            Some(user) => {
                let now = DateTime::now();
                user.deleted_at = Some(now);
                user.updated_at = now;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn find_all_active(&self) -> Result<Vec<User>, AppError> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().filter(|u| !u.is_deleted()).cloned().collect())
    }
}

#[async_trait]
impl ResourceOwnerLookup for InMemoryUserStore {
    async fn find_owner_of(&self, resource_id: i64) -> Result<Option<i64>, AppError> {
        Ok(self.find_by_id(resource_id, false).await?.map(|u| u.id))
    }
}

pub struct InMemoryResourceStore<T: OwnedEntity> {
    items: Mutex<HashMap<i64, T>>,
}

impl<T: OwnedEntity> InMemoryResourceStore<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items: Mutex::new(items.into_iter().map(|item| (item.id(), item)).collect()),
        }
    }
}

#[async_trait]
impl<T: OwnedEntity> ResourceStore<T> for InMemoryResourceStore<T> {
    async fn find_active(&self, id: i64) -> Result<Option<T>, AppError> {
        let items = self.items.lock().unwrap();
        Ok(items.get(&id).filter(|item| !item.is_deleted()).cloned())
    }
}

#[async_trait]
impl<T: OwnedEntity> ResourceOwnerLookup for InMemoryResourceStore<T> {
    async fn find_owner_of(&self, resource_id: i64) -> Result<Option<i64>, AppError> {
        Ok(self.find_active(resource_id).await?.map(|item| item.owner_id()))
    }
}

/// 저장소 장애를 흉내내는 조회기
pub struct FailingOwnerLookup;

#[async_trait]
impl ResourceOwnerLookup for FailingOwnerLookup {
    async fn find_owner_of(&self, _resource_id: i64) -> Result<Option<i64>, AppError> {
        Err(AppError::DatabaseError("connection reset".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::users::Role;

    fn new_user(email: &str) -> NewUser {
        NewUser {
            name: "A".to_string(),
            email: email.to_string(),
            password_hash: "hash".to_string(),
            role: Role::User,
        }
    }

    #[actix_web::test]
    async fn test_soft_deleted_email_can_be_reused() {
        let store = InMemoryUserStore::new();
        let first = store.create(new_user("a@x.com")).await.unwrap();

        assert!(matches!(
            store.create(new_user("a@x.com")).await,
            Err(AppError::UserAlreadyExists)
        ));

        assert!(store.soft_delete(first.id).await.unwrap());
        assert!(!store.soft_delete(first.id).await.unwrap());
        assert!(store.find_by_email("a@x.com", false).await.unwrap().is_none());
        assert!(store.find_by_email("a@x.com", true).await.unwrap().is_some());

        let second = store.create(new_user("a@x.com")).await.unwrap();
        assert_ne!(first.id, second.id);
        assert_eq!(store.find_all_active().await.unwrap().len(), 1);
    }
}
