//! Standard response envelope helpers. Every success body is `{data: ...}`.

use axum::{http::StatusCode, Json};
use serde::Serialize;

#[derive(Serialize)]
pub struct DataBody<T> {
    pub data: T,
}

pub fn ok<T: Serialize>(data: T) -> (StatusCode, Json<DataBody<T>>) {
    (StatusCode::OK, Json(DataBody { data }))
}

pub fn created<T: Serialize>(data: T) -> (StatusCode, Json<DataBody<T>>) {
    (StatusCode::CREATED, Json(DataBody { data }))
}
