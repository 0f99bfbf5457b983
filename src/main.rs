//! 가계부 인증 백엔드 메인 애플리케이션
//!
//! 설정을 한 번 읽고, MongoDB 저장소와 서비스를 생성한 뒤
//! Actix-web HTTP 서버를 구동합니다.

use std::sync::Arc;
use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::http::header;
use actix_web::{middleware, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use finance_auth_backend::config::AppConfig;
use finance_auth_backend::db::Database;
use finance_auth_backend::errors::AppError;
use finance_auth_backend::repositories::resources::{CreditCardRepository, ExpenseRepository};
use finance_auth_backend::repositories::users::UserRepository;
use finance_auth_backend::routes::configure_all_routes;
use finance_auth_backend::services::AppServices;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 가계부 인증 서비스 시작중...");

    let config = AppConfig::from_env().map_err(startup_error)?;
    info!("설정 로드 완료: {:?} 환경", config.environment);

    let services = initialize_services(&config).await.map_err(startup_error)?;

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    start_http_server(config, services).await
}

/// 기동 단계의 실패를 로그로 남기고 프로세스 에러로 변환합니다.
fn startup_error(e: AppError) -> std::io::Error {
    error!("❌ 기동 실패 [{}]: {}", e.code(), e);
    std::io::Error::other(e.to_string())
}

/// MongoDB 저장소를 준비하고 서비스를 생성합니다
///
/// # Errors
///
/// * `AppError::DatabaseError` - 연결 또는 인덱스 생성 실패
/// * `AppError::ConfigurationError` - 암호화 설정 오류
async fn initialize_services(config: &AppConfig) -> Result<AppServices, AppError> {
    info!("📡 데이터베이스 연결 중...");
    let database = Database::connect(&config.database).await?;

    info!("🗂️ 인덱스 생성 중: {}", database.database_name());

    let users = Arc::new(UserRepository::new(&database));
    let credit_cards = Arc::new(CreditCardRepository::new(&database));
    let expenses = Arc::new(ExpenseRepository::new(&database));

    users.create_indexes().await?;
    credit_cards.create_indexes().await?;
    expenses.create_indexes().await?;

    AppServices::build(config, users, credit_cards, expenses)
}

/// HTTP 서버를 구성하고 실행합니다
///
/// CORS, 요청 제한, 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(config: AppConfig, services: AppServices) -> std::io::Result<()> {
    let bind_address = config.server.bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);

    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(config.rate_limit.per_second)
        .burst_size(config.rate_limit.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| std::io::Error::other("잘못된 Rate Limiting 설정"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        config.rate_limit.per_second,
        config.rate_limit.burst_size
    );

    HttpServer::new(move || {
        let services = services.clone();

        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(move |cfg| services.register(cfg))
            .configure(configure_all_routes)
    })
        .bind(bind_address)?
        .workers(config.server.workers)
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(e) => error!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// ```bash
/// RUST_LOG=finance_auth_backend::middlewares=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}

/// CORS 설정을 구성합니다
///
/// 프론트엔드 개발 서버와 자체 서버 간 통신을 허용합니다.
fn configure_cors() -> Cors {
    Cors::default()
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_origin("http://localhost:8080")
        .allowed_origin("http://127.0.0.1:8080")
        .allowed_methods(vec!["GET", "POST", "DELETE", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        // 리프레시 토큰 쿠키
        .supports_credentials()
        .max_age(3600)
}
