//! 정수 ID 시퀀스 발급
//!
//! `counters` 컬렉션의 `{ _id: <시퀀스 이름>, seq }` 문서를 원자적으로 증가시켜
//! 컬렉션별 정수 ID를 발급합니다.

use mongodb::bson::doc;
use mongodb::options::{FindOneAndUpdateOptions, ReturnDocument};
use serde::Deserialize;
use crate::errors::AppError;

const COUNTERS_COLLECTION: &str = "counters";

#[derive(Debug, Deserialize)]
struct Counter {
    seq: i64,
}

/// 다음 시퀀스 값을 발급합니다. 첫 호출은 1을 반환합니다.
pub async fn next_sequence(db: &mongodb::Database, name: &str) -> Result<i64, AppError> {
    let options = FindOneAndUpdateOptions::builder()
        .upsert(true)
        .return_document(ReturnDocument::After)
        .build();

    let counter = db
        .collection::<Counter>(COUNTERS_COLLECTION)
        .find_one_and_update(doc! { "_id": name }, doc! { "$inc": { "seq": 1_i64 } })
        .with_options(options)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

    counter
        .map(|c| c.seq)
        .ok_or_else(|| AppError::DatabaseError(format!("시퀀스 발급 실패: {}", name)))
}
