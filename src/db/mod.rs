//! Database Connection Management Module
//!
//! MongoDB 데이터베이스 연결 관리를 담당하는 모듈입니다.
//! 연결 정보는 [`DatabaseConfig`]로 전달받으며, 기동 시 ping으로 연결을 확인합니다.
//!
//! # 기본 사용법
//!
//! ```rust,ignore
//! use crate::db::Database;
//!
//! let config = AppConfig::from_env()?;
//! let database = Database::connect(&config.database).await?;
//! let users = UserRepository::new(&database);
//! ```

use mongodb::{bson::doc, options::ClientOptions, Client};
use log::info;
use crate::config::DatabaseConfig;
use crate::errors::AppError;

/// MongoDB 데이터베이스 연결 래퍼
///
/// 내부 `Client`가 커넥션 풀을 공유하므로 복제 비용이 작습니다.
#[derive(Clone)]
pub struct Database {
    client: Client,
    database_name: String,
}

impl Database {
    /// 새 MongoDB 데이터베이스 연결을 생성하고 연결 상태를 검증합니다.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, AppError> {
        let mut client_options = ClientOptions::parse(&config.uri)
            .await
            .map_err(|e| AppError::ConfigurationError(format!("MONGODB_URI 파싱 실패: {}", e)))?;

        // 모니터링 및 로깅용 애플리케이션 이름
        client_options.app_name = Some("finance_auth".to_string());

        let client = Client::with_options(client_options)
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        client
            .database(&config.database_name)
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| AppError::DatabaseError(format!("MongoDB 연결 실패: {}", e)))?;

        info!("✅ MongoDB 연결 성공: {}", config.database_name);

        Ok(Self {
            client,
            database_name: config.database_name.clone(),
        })
    }

    /// 리포지토리가 컬렉션에 접근할 때 사용하는 `mongodb::Database`
    pub fn get_database(&self) -> mongodb::Database {
        self.client.database(&self.database_name)
    }

    /// 연결된 데이터베이스 이름
    pub fn database_name(&self) -> &str {
        &self.database_name
    }
}
