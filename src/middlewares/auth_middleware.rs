//! JWT 인증 미들웨어
//!
//! 스코프나 리소스에 선언된 [`RouteAccess`]에 따라 액세스 토큰을 검증하고
//! 역할을 확인합니다. 통과하면 [`Identity`](crate::domain::models::auth::Identity)를
//! Request Extensions에 저장합니다.

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
    body::EitherBody,
};
use crate::domain::models::auth::RouteAccess;
use crate::middlewares::auth_inner::AuthMiddlewareService;

/// JWT 인증 미들웨어
pub struct AuthMiddleware {
    access: Rc<RouteAccess>,
}

impl AuthMiddleware {
    pub fn new(access: RouteAccess) -> Self {
        Self {
            access: Rc::new(access),
        }
    }

    /// 토큰 검사 없이 통과
    pub fn public() -> Self {
        Self::new(RouteAccess::public())
    }

    /// 유효한 액세스 토큰 필수
    pub fn required() -> Self {
        Self::new(RouteAccess::authenticated())
    }

    pub fn admin_only() -> Self {
        Self::new(RouteAccess::admin_only())
    }
}

/// ActixWeb Transform trait 구현
impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
            access: self.access.clone(),
        }))
    }
}
