//! 애플리케이션 서비스 등록
//!
//! 기동 시 설정과 저장소로 모든 서비스를 한 번 생성하고,
//! 각 워커의 `App`에 `web::Data`로 등록합니다. 전역 상태는 없습니다.
//!
//! ```rust,ignore
//! let services = AppServices::build(&config, users, credit_cards, expenses)?;
//!
//! HttpServer::new(move || {
//!     let services = services.clone();
//!     App::new()
//!         .configure(move |cfg| services.register(cfg))
//!         .configure(configure_all_routes)
//! })
//! ```

use std::sync::Arc;
use actix_web::web;
use crate::config::AppConfig;
use crate::domain::entities::resources::{CreditCard, Expense};
use crate::errors::AppError;
use crate::repositories::resources::ResourceStore;
use crate::repositories::users::UserStore;
use crate::repositories::ResourceOwnerLookup;
use crate::services::auth::{AuthService, OwnershipGuards, PasswordHasher, SymmetricCipher, TokenService};
use crate::services::users::UserService;

/// 워커 간에 공유되는 서비스 핸들 모음
#[derive(Clone)]
pub struct AppServices {
    pub tokens: web::Data<TokenService>,
    pub auth: web::Data<AuthService>,
    pub users: web::Data<UserService>,
    pub cipher: web::Data<SymmetricCipher>,
    pub ownership: web::Data<OwnershipGuards>,
    pub credit_cards: web::Data<dyn ResourceStore<CreditCard>>,
    pub expenses: web::Data<dyn ResourceStore<Expense>>,
}

impl AppServices {
    /// 설정과 저장소로 서비스를 생성합니다.
    ///
    /// 각 저장소는 자신의 리소스에 대한 소유자 조회기 역할도 겸합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ConfigurationError` - 암호화 설정 오류
    pub fn build<U, C, E>(
        config: &AppConfig,
        users: Arc<U>,
        credit_cards: Arc<C>,
        expenses: Arc<E>,
    ) -> Result<Self, AppError>
    where
        U: UserStore + ResourceOwnerLookup + 'static,
        C: ResourceStore<CreditCard> + ResourceOwnerLookup + 'static,
        E: ResourceStore<Expense> + ResourceOwnerLookup + 'static,
    {
        let tokens = Arc::new(TokenService::new(config.jwt.clone()));
        let user_store: Arc<dyn UserStore> = users.clone();

        let auth = AuthService::new(
            user_store.clone(),
            tokens.clone(),
            PasswordHasher::new(&config.password),
        );

        let ownership = OwnershipGuards::new(users, credit_cards.clone(), expenses.clone());

        let credit_cards: Arc<dyn ResourceStore<CreditCard>> = credit_cards;
        let expenses: Arc<dyn ResourceStore<Expense>> = expenses;

        Ok(Self {
            tokens: web::Data::from(tokens),
            auth: web::Data::new(auth),
            users: web::Data::new(UserService::new(user_store)),
            cipher: web::Data::new(SymmetricCipher::new(&config.cipher)?),
            ownership: web::Data::new(ownership),
            credit_cards: web::Data::from(credit_cards),
            expenses: web::Data::from(expenses),
        })
    }

    /// `App::configure`에서 호출하여 모든 서비스를 app_data로 등록합니다.
    pub fn register(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(self.tokens.clone())
            .app_data(self.auth.clone())
            .app_data(self.users.clone())
            .app_data(self.cipher.clone())
            .app_data(self.ownership.clone())
            .app_data(self.credit_cards.clone())
            .app_data(self.expenses.clone());
    }
}
