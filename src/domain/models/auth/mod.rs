//! 인증 관련 도메인 모델
//!
//! - [`identity`] - 요청마다 토큰에서 복원되는 인증 주체
//! - [`route_access`] - 라우트별 공개 여부와 허용 역할 선언

pub mod identity;
pub mod route_access;

pub use identity::Identity;
pub use route_access::RouteAccess;
