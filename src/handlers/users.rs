//! # User Management HTTP Handlers
//!
//! | 메서드 | 경로 | 접근 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `GET` | `/api/v1/users` | 관리자 | 200 OK |
//! | `GET` | `/api/v1/users/{userId}` | 본인 또는 관리자 | 200 OK |
//! | `DELETE` | `/api/v1/users/{userId}` | 본인 또는 관리자 | 204 No Content |
//!
//! 접근 제어는 라우트에 붙은 미들웨어가 처리하므로 핸들러는 서비스 호출만 합니다.

use actix_web::{web, HttpResponse};
use crate::errors::AppError;
use crate::services::users::UserService;

/// 활성 사용자 목록 조회
///
/// # Endpoint
/// `GET /api/v1/users`
pub async fn list_users(
    users: web::Data<UserService>,
) -> Result<HttpResponse, AppError> {
    let response = users.list_active_users().await?;

    Ok(HttpResponse::Ok().json(response))
}

/// 사용자 조회
///
/// # Endpoint
/// `GET /api/v1/users/{userId}`
pub async fn get_user(
    users: web::Data<UserService>,
    user_id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let response = users.get_user_by_id(user_id.into_inner()).await?;

    Ok(HttpResponse::Ok().json(response))
}

/// 사용자 소프트 삭제
///
/// # Endpoint
/// `DELETE /api/v1/users/{userId}`
pub async fn delete_user(
    users: web::Data<UserService>,
    user_id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let user_id = user_id.into_inner();
    users.delete_user(user_id).await?;

    log::info!("사용자 삭제 요청 처리: ID {}", user_id);
    Ok(HttpResponse::NoContent().finish())
}
