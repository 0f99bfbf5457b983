//! 소유 리소스 단건 조회 핸들러
//!
//! 소유권은 `OwnershipMiddleware`가 이미 확인했습니다. 관리자는 소유권 검사를
//! 건너뛰므로, 경로의 `userId`와 리소스 소유자가 다르면 여기서 404로 응답합니다.

use actix_web::{web, HttpResponse};
use crate::domain::entities::resources::{CreditCard, Expense, OwnedEntity};
use crate::errors::AppError;
use crate::repositories::resources::ResourceStore;

async fn find_owned<T: OwnedEntity>(
    store: &dyn ResourceStore<T>,
    user_id: i64,
    resource_id: i64,
) -> Result<T, AppError> {
    store
        .find_active(resource_id)
        .await?
        .filter(|resource| resource.owner_id() == user_id)
        .ok_or_else(|| AppError::NotFound(format!("{} {} not found", T::LABEL, resource_id)))
}

/// # Endpoint
/// `GET /api/v1/users/{userId}/credit-cards/{creditCardId}`
pub async fn get_credit_card(
    cards: web::Data<dyn ResourceStore<CreditCard>>,
    path: web::Path<(i64, i64)>,
) -> Result<HttpResponse, AppError> {
    let (user_id, credit_card_id) = path.into_inner();
    let card = find_owned(cards.get_ref(), user_id, credit_card_id).await?;

    Ok(HttpResponse::Ok().json(card))
}

/// # Endpoint
/// `GET /api/v1/users/{userId}/expenses/{expenseId}`
pub async fn get_expense(
    expenses: web::Data<dyn ResourceStore<Expense>>,
    path: web::Path<(i64, i64)>,
) -> Result<HttpResponse, AppError> {
    let (user_id, expense_id) = path.into_inner();
    let expense = find_owned(expenses.get_ref(), user_id, expense_id).await?;

    Ok(HttpResponse::Ok().json(expense))
}
