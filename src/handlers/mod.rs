//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! 핸들러는 요청 본문 검증과 서비스 호출, 응답 직렬화만 담당하며
//! 인증·인가는 라우트에 붙은 미들웨어가 먼저 처리합니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Middlewares - 인증 / 역할 / 소유권 게이트
//! ├─────────────────────────────────────────────┤
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리
//! ├─────────────────────────────────────────────┤
//!   Services - 비즈니스 로직
//! ├─────────────────────────────────────────────┤
//!   Repositories - 데이터 접근
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 에러 처리
//!
//! 모든 핸들러는 `Result<HttpResponse, AppError>`를 반환하며,
//! `AppError`의 `ResponseError` 구현이 `{ code, message, status }` 본문을 만듭니다.
//!
//! ```rust,ignore
//! pub async fn sign_in(
//!     auth: web::Data<AuthService>,
//!     payload: web::Json<SignInRequest>,
//! ) -> Result<HttpResponse, AppError> {
//!     payload.validate().map_err(|e| AppError::ValidationError(e.to_string()))?;
//!     let token_pair = auth.sign_in(&payload.email, &payload.password).await?;
//!     Ok(HttpResponse::Ok().json(token_pair))
//! }
//! ```

pub mod auth;
pub mod users;
pub mod resources;
