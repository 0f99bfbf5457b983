//! Authentication HTTP Handlers
//!
//! 로그인, 회원가입, 토큰 갱신, 현재 사용자 조회 엔드포인트입니다.
//! 인증 응답은 모두 `{ access_token, refresh_token, user }` 형태입니다.
//!
//! | 메서드 | 경로 | 접근 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/api/v1/auth/sign-up` | 공개 | 201 Created |
//! | `POST` | `/api/v1/auth/sign-in` | 공개 | 200 OK |
//! | `POST` | `/api/v1/auth/refresh` | 공개 (리프레시 토큰) | 200 OK |
//! | `GET` | `/api/v1/auth/me` | 인증 필요 | 200 OK |

use actix_web::{web, HttpRequest, HttpResponse};
use validator::Validate;
use crate::domain::dto::users::request::{RefreshTokenRequest, SignInRequest, SignUpRequest};
use crate::domain::dto::users::response::UserResponse;
use crate::domain::models::auth::Identity;
use crate::errors::AppError;
use crate::services::auth::AuthService;

/// 리프레시 토큰 쿠키 이름
const REFRESH_TOKEN_COOKIE: &str = "refresh_token";

/// 회원가입 핸들러
///
/// # Endpoint
/// `POST /api/v1/auth/sign-up`
pub async fn sign_up(
    auth: web::Data<AuthService>,
    payload: web::Json<SignUpRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let token_pair = auth.sign_up(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(token_pair))
}

/// 로컬 로그인 핸들러
///
/// 존재하지 않는 이메일과 틀린 패스워드는 같은 메시지, 다른 에러 코드로 응답합니다.
///
/// # Endpoint
/// `POST /api/v1/auth/sign-in`
pub async fn sign_in(
    auth: web::Data<AuthService>,
    payload: web::Json<SignInRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let token_pair = auth.sign_in(&payload.email, &payload.password).await?;

    Ok(HttpResponse::Ok().json(token_pair))
}

/// 토큰 갱신 엔드포인트
///
/// 리프레시 토큰은 `refresh_token` 쿠키 또는 JSON 본문에서 읽습니다.
///
/// # Endpoint
/// `POST /api/v1/auth/refresh`
pub async fn refresh(
    req: HttpRequest,
    auth: web::Data<AuthService>,
    body: Option<web::Json<RefreshTokenRequest>>,
) -> Result<HttpResponse, AppError> {
    let refresh_token = extract_refresh_token(&req, body.as_deref())?;

    let token_pair = auth.refresh_token(&refresh_token).await?;

    Ok(HttpResponse::Ok().json(token_pair))
}

/// 현재 인증된 사용자 정보 조회 엔드포인트
///
/// 토큰의 정보가 아니라 저장소의 최신 레코드를 반환합니다.
///
/// # Endpoint
/// `GET /api/v1/auth/me`
pub async fn me(
    auth: web::Data<AuthService>,
    identity: Identity,
) -> Result<HttpResponse, AppError> {
    let user = auth.current_user(&identity).await?;

    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}

/// HTTP 요청에서 리프레시 토큰 추출
///
/// 쿠키가 본문보다 우선합니다.
fn extract_refresh_token(
    req: &HttpRequest,
    body: Option<&RefreshTokenRequest>,
) -> Result<String, AppError> {
    // 1. 쿠키에서 리프레시 토큰 찾기
    if let Some(cookie) = req.cookie(REFRESH_TOKEN_COOKIE) {
        let token = cookie.value().trim();
        if !token.is_empty() {
            return Ok(token.to_string());
        }
    }

    // 2. 요청 본문에서 리프레시 토큰 찾기
    if let Some(body) = body {
        let token = body.refresh_token.trim();
        if !token.is_empty() {
            return Ok(token.to_string());
        }
    }

    Err(AppError::Unauthenticated(
        "refresh token not provided".to_string()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::cookie::Cookie;
    use actix_web::test::TestRequest;

    #[test]
    fn test_refresh_token_from_cookie_wins() {
        let req = TestRequest::default()
            .cookie(Cookie::new("refresh_token", "from-cookie"))
            .to_http_request();
        let body = RefreshTokenRequest {
            refresh_token: "from-body".to_string(),
        };

        assert_eq!(extract_refresh_token(&req, Some(&body)).unwrap(), "from-cookie");
    }

    #[test]
    fn test_refresh_token_from_body() {
        let req = TestRequest::default().to_http_request();
        let body = RefreshTokenRequest {
            refresh_token: "from-body".to_string(),
        };

        assert_eq!(extract_refresh_token(&req, Some(&body)).unwrap(), "from-body");
    }

    #[test]
    fn test_missing_refresh_token_is_unauthenticated() {
        let req = TestRequest::default().to_http_request();
        let result = extract_refresh_token(&req, None);

        assert!(matches!(result, Err(AppError::Unauthenticated(_))));
    }
}
