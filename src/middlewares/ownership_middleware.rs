//! 소유권 인가 미들웨어
//!
//! 경로 파라미터가 매칭된 뒤에 실행되어야 하므로 `web::resource`에 붙입니다.
//! 같은 리소스에 [`AuthMiddleware`](crate::middlewares::AuthMiddleware)를 나중에 `wrap`하여
//! 인증이 먼저 실행되도록 합니다.
//!
//! ```rust,ignore
//! web::resource("/{userId}/credit-cards/{creditCardId}")
//!     .wrap(OwnershipMiddleware::new(OwnedResource::CreditCard))
//!     .wrap(AuthMiddleware::required())
//!     .route(web::get().to(handlers::resources::get_credit_card))
//! ```

use std::future::{ready, Ready};
use std::rc::Rc;
use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::{web, Error, HttpMessage, ResponseError};
use futures_util::future::LocalBoxFuture;
use crate::domain::models::auth::Identity;
use crate::errors::AppError;
use crate::services::auth::{OwnedResource, OwnershipGuards, RouteParams};

/// 소유권 인가 미들웨어
pub struct OwnershipMiddleware {
    resource: OwnedResource,
}

impl OwnershipMiddleware {
    pub fn new(resource: OwnedResource) -> Self {
        Self { resource }
    }
}

impl<S, B> Transform<S, ServiceRequest> for OwnershipMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = OwnershipMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(OwnershipMiddlewareService {
            service: Rc::new(service),
            resource: self.resource,
        }))
    }
}

pub struct OwnershipMiddlewareService<S> {
    service: Rc<S>,
    resource: OwnedResource,
}

impl<S, B> Service<ServiceRequest> for OwnershipMiddlewareService<S>
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
        let resource = self.resource;

        let identity = req.extensions().get::<Identity>().cloned();
        let params = RouteParams::from_pairs(req.match_info().iter());
        let guards = req.app_data::<web::Data<OwnershipGuards>>().cloned();

        Box::pin(async move {
            let outcome = match (identity, guards) {
                (None, _) => Err(AppError::Unauthenticated("missing bearer token".to_string())),
                (_, None) => Err(AppError::InternalError(
                    "OwnershipGuards가 app_data에 등록되지 않았습니다".to_string(),
                )),
                (Some(identity), Some(guards)) => {
                    let guard = guards.get(resource);
                    log::debug!("소유권 확인: 사용자 ID {} → {}", identity.id, guard.resource());
                    guard.authorize(&identity, &params).await
                }
            };

            if let Err(err) = outcome {
                let (req, _) = req.into_parts();
                return Ok(ServiceResponse::new(req, err.error_response()).map_into_right_body());
            }

            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}
