//! 미들웨어 모듈
//!
//! ActixWeb 애플리케이션의 요청 처리 파이프라인에서 사용되는 미들웨어들을 제공합니다.
//!
//! # 제공 미들웨어
//!
//! ### 1. 인증 미들웨어 (AuthMiddleware)
//! - 라우트별 [`RouteAccess`](crate::domain::models::auth::RouteAccess) 선언에 따라 동작
//! - Bearer 토큰 추출 및 액세스 스코프 검증
//! - 역할 집합 확인
//! - 사용자 정보를 request extension에 저장
//!
//! ### 2. 소유권 미들웨어 (OwnershipMiddleware)
//! - 관리자 또는 리소스 소유자만 통과
//! - 경로 파라미터가 필요하므로 `web::resource` 단위로 적용
//!
//! # 사용 방법
//!
//! ```rust,ignore
//! use actix_web::web;
//!
//! web::scope("/api/v1/users")
//!     .service(
//!         web::resource("")
//!             .wrap(AuthMiddleware::admin_only())
//!             .route(web::get().to(handlers::users::list_users)),
//!     )
//!     .service(
//!         web::resource("/{userId}")
//!             .wrap(OwnershipMiddleware::new(OwnedResource::User))
//!             .wrap(AuthMiddleware::required())
//!             .route(web::get().to(handlers::users::get_user)),
//!     )
//! ```

pub mod auth_middleware;
pub mod ownership_middleware;
mod auth_inner;

// 미들웨어 재export
pub use auth_middleware::AuthMiddleware;
pub use ownership_middleware::OwnershipMiddleware;
