//! AuthMiddleware 인증 로직의 핵심적인 기능
use std::rc::Rc;
use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::http::header;
use actix_web::{web, Error, HttpMessage, ResponseError};
use futures_util::future::LocalBoxFuture;
use crate::domain::models::auth::{Identity, RouteAccess};
use crate::errors::AppError;
use crate::services::auth::{RequestAuthenticator, RoleAuthorizer, TokenService};

/// 실제 인증 로직을 수행하는 서비스
pub struct AuthMiddlewareService<S> {
    pub service: Rc<S>,
    pub access: Rc<RouteAccess>,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let access = self.access.clone();

        Box::pin(async move {
            match authorize_request(&req, &access) {
                Err(err) => {
                    let (req, _) = req.into_parts();
                    let res = ServiceResponse::new(req, err.error_response())
                        .map_into_right_body();
                    return Ok(res);
                }
                Ok(Some(identity)) => {
                    log::debug!("인증 성공: 사용자 ID {} ({})", identity.id, identity.role);
                    // 사용자 정보를 Request Extensions에 저장
                    req.extensions_mut().insert(identity);
                }
                Ok(None) => {}
            }

            // 다음 서비스로 요청 전달
            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

/// 인증 게이트와 역할 게이트를 순서대로 적용
fn authorize_request(req: &ServiceRequest, access: &RouteAccess) -> Result<Option<Identity>, AppError> {
    let tokens = req
        .app_data::<web::Data<TokenService>>()
        .ok_or_else(|| AppError::InternalError("TokenService가 app_data에 등록되지 않았습니다".to_string()))?;

    let authorization = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let identity = RequestAuthenticator::new(tokens).authenticate(access, authorization)?;
    RoleAuthorizer::authorize(access, identity.as_ref())?;

    Ok(identity)
}
