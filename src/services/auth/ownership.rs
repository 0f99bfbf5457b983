//! 리소스 소유권 인가
//!
//! 모든 소유 리소스에 같은 알고리즘을 적용합니다.
//!
//! 1. 관리자 → 허용
//! 2. 경로의 사용자 ID가 호출자와 다르거나 없음 → `Forbidden`
//! 3. 경로에 리소스 ID 없음 → 허용
//! 4. 소유자 조회: 리소스 없음 → `NotFound`, 다른 소유자 → `Forbidden`
//!
//! 리소스마다 다른 것은 경로 파라미터 추출 함수와 소유자 조회기뿐입니다.

use std::collections::HashMap;
use std::sync::Arc;
use crate::domain::models::auth::Identity;
use crate::errors::AppError;
use crate::repositories::ResourceOwnerLookup;

/// 매칭된 경로 파라미터
#[derive(Debug, Clone, Default)]
pub struct RouteParams {
    params: HashMap<String, String>,
}

impl RouteParams {
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            params: pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    /// 정수로 해석되지 않는 값은 없는 것으로 취급합니다.
    pub fn get_i64(&self, name: &str) -> Option<i64> {
        self.get(name).and_then(|value| value.parse().ok())
    }
}

/// 경로 파라미터에서 ID를 꺼내는 함수
pub type ParamExtractor = fn(&RouteParams) -> Option<i64>;

fn user_id_param(params: &RouteParams) -> Option<i64> {
    params.get_i64("userId")
}

fn credit_card_id_param(params: &RouteParams) -> Option<i64> {
    params.get_i64("creditCardId")
}

fn expense_id_param(params: &RouteParams) -> Option<i64> {
    params.get_i64("expenseId")
}

/// 소유권 가드가 보호하는 리소스 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OwnedResource {
    User,
    CreditCard,
    Expense,
}

/// 관리자-또는-소유자 가드
pub struct OwnershipGuard {
    resource: &'static str,
    resource_id: ParamExtractor,
    user_id: ParamExtractor,
    owners: Arc<dyn ResourceOwnerLookup>,
}

impl OwnershipGuard {
    pub fn new(
        resource: &'static str,
        resource_id: ParamExtractor,
        user_id: ParamExtractor,
        owners: Arc<dyn ResourceOwnerLookup>,
    ) -> Self {
        Self {
            resource,
            resource_id,
            user_id,
            owners,
        }
    }

    /// `/users/{userId}`: 사용자 ID가 곧 리소스 ID
    pub fn user_self(owners: Arc<dyn ResourceOwnerLookup>) -> Self {
        Self::new("user", user_id_param, user_id_param, owners)
    }

    pub fn credit_cards(owners: Arc<dyn ResourceOwnerLookup>) -> Self {
        Self::new("credit card", credit_card_id_param, user_id_param, owners)
    }

    pub fn expenses(owners: Arc<dyn ResourceOwnerLookup>) -> Self {
        Self::new("expense", expense_id_param, user_id_param, owners)
    }

    pub fn resource(&self) -> &'static str {
        self.resource
    }

    pub async fn authorize(&self, identity: &Identity, params: &RouteParams) -> Result<(), AppError> {
        if identity.is_admin() {
            return Ok(());
        }

        let claimed_user = (self.user_id)(params);
        if claimed_user != Some(identity.id) {
            log::warn!(
                "소유권 거부: 사용자 ID {}가 다른 사용자({:?})의 {} 경로에 접근",
                identity.id,
                claimed_user,
                self.resource
            );
            return Err(AppError::Forbidden("own resources only".to_string()));
        }

        let Some(resource_id) = (self.resource_id)(params) else {
            return Ok(());
        };

        if self.validate_ownership(identity.id, resource_id).await? {
            Ok(())
        } else {
            log::warn!(
                "소유권 거부: 사용자 ID {}는 {} {}의 소유자가 아님",
                identity.id,
                self.resource,
                resource_id
            );
            Err(AppError::Forbidden("own resources only".to_string()))
        }
    }

    /// 리소스가 없거나 삭제되었으면 `NotFound`
    async fn validate_ownership(&self, caller_id: i64, resource_id: i64) -> Result<bool, AppError> {
        match self.owners.find_owner_of(resource_id).await? {
            Some(owner_id) => Ok(owner_id == caller_id),
            None => Err(AppError::NotFound(format!("{} {} not found", self.resource, resource_id))),
        }
    }
}

/// 리소스 종류별 가드 모음 (`web::Data`로 공유)
pub struct OwnershipGuards {
    users: OwnershipGuard,
    credit_cards: OwnershipGuard,
    expenses: OwnershipGuard,
}

impl OwnershipGuards {
    pub fn new(
        users: Arc<dyn ResourceOwnerLookup>,
        credit_cards: Arc<dyn ResourceOwnerLookup>,
        expenses: Arc<dyn ResourceOwnerLookup>,
    ) -> Self {
        Self {
            users: OwnershipGuard::user_self(users),
            credit_cards: OwnershipGuard::credit_cards(credit_cards),
            expenses: OwnershipGuard::expenses(expenses),
        }
    }

    pub fn get(&self, kind: OwnedResource) -> &OwnershipGuard {
        match kind {
            OwnedResource::User => &self.users,
            OwnedResource::CreditCard => &self.credit_cards,
            OwnedResource::Expense => &self.expenses,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::users::Role;
    use crate::domain::entities::resources::CreditCard;
    use crate::repositories::memory::{FailingOwnerLookup, InMemoryResourceStore};
    use mongodb::bson::DateTime;

    fn identity(id: i64, role: Role) -> Identity {
        Identity {
            id,
            name: "A".to_string(),
            email: "a@x.com".to_string(),
            role,
        }
    }

    fn card(id: i64, user_id: i64, deleted: bool) -> CreditCard {
        CreditCard {
            id,
            user_id,
            name: "card".to_string(),
            created_at: DateTime::now(),
            deleted_at: deleted.then(DateTime::now),
        }
    }

    fn card_guard() -> OwnershipGuard {
        OwnershipGuard::credit_cards(Arc::new(InMemoryResourceStore::new(vec![
            card(10, 1, false),
            card(11, 2, false),
            card(12, 1, true),
        ])))
    }

    fn params(user_id: &str, card_id: &str) -> RouteParams {
        RouteParams::from_pairs([("userId", user_id), ("creditCardId", card_id)])
    }

    #[actix_web::test]
    async fn test_admin_bypasses_ownership() {
        let guard = OwnershipGuard::credit_cards(Arc::new(FailingOwnerLookup));
        let admin = identity(99, Role::Admin);

        assert!(guard.authorize(&admin, &params("1", "10")).await.is_ok());
        assert!(guard.authorize(&admin, &RouteParams::default()).await.is_ok());
    }

    #[actix_web::test]
    async fn test_claimed_user_mismatch_is_forbidden_before_lookup() {
        let guard = OwnershipGuard::credit_cards(Arc::new(FailingOwnerLookup));
        let caller = identity(1, Role::User);

        let result = guard.authorize(&caller, &params("2", "11")).await;
        assert!(matches!(result, Err(AppError::Forbidden(msg)) if msg == "own resources only"));

        let missing = guard.authorize(&caller, &RouteParams::from_pairs([("creditCardId", "10")])).await;
        assert!(matches!(missing, Err(AppError::Forbidden(_))));
    }

    #[actix_web::test]
    async fn test_owner_is_allowed_and_other_owner_forbidden() {
        let guard = card_guard();
        let caller = identity(1, Role::User);

        assert!(guard.authorize(&caller, &params("1", "10")).await.is_ok());

        let result = guard.authorize(&caller, &params("1", "11")).await;
        assert!(matches!(result, Err(AppError::Forbidden(_))));
    }

    #[actix_web::test]
    async fn test_missing_or_deleted_resource_is_not_found() {
        let guard = card_guard();
        let caller = identity(1, Role::User);

        assert!(matches!(guard.authorize(&caller, &params("1", "404")).await, Err(AppError::NotFound(_))));
        assert!(matches!(guard.authorize(&caller, &params("1", "12")).await, Err(AppError::NotFound(_))));
    }

    #[actix_web::test]
    async fn test_no_resource_id_allows_matching_user() {
        let guard = card_guard();
        let caller = identity(1, Role::User);

        let result = guard.authorize(&caller, &RouteParams::from_pairs([("userId", "1")])).await;
        assert!(result.is_ok());
    }

    #[actix_web::test]
    async fn test_lookup_failure_propagates() {
        let guard = OwnershipGuard::expenses(Arc::new(FailingOwnerLookup));
        let caller = identity(1, Role::User);
        let params = RouteParams::from_pairs([("userId", "1"), ("expenseId", "3")]);

        assert!(matches!(guard.authorize(&caller, &params).await, Err(AppError::DatabaseError(_))));
    }

    #[test]
    fn test_non_numeric_params_are_absent() {
        let params = RouteParams::from_pairs([("userId", "abc")]);
        assert_eq!(params.get_i64("userId"), None);
        assert_eq!(params.get("userId"), Some("abc"));
    }
}
