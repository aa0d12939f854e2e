//! # API エラーハンドリング
//!
//! ルーティングで発生するエラーと、RFC 7807（Problem Details）形式のレスポンスへの変換。
//!
//! Readiness 判定そのものはエラーを返さない。依存先の障害はすべて個別チェックの
//! `fail` として表現され、最悪でも 503 とレポートが返る。
//! ここで扱うのは未定義パスへのアクセスのみ。

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// API 層で発生するエラー
#[derive(Debug, Error)]
pub enum ApiError {
    /// 未定義のパス（404 Not Found）
    #[error("リソースが見つかりません: {0}")]
    NotFound(String),
}

/// RFC 7807 準拠のエラーレスポンス
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// エラーの種類を識別する URI
    #[serde(rename = "type")]
    pub error_type: String,
    /// エラーの概要
    pub title:      String,
    /// HTTP ステータスコード
    pub status:     u16,
    /// エラーの詳細情報
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail:     Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_response) = match self {
            ApiError::NotFound(path) => (
                StatusCode::NOT_FOUND,
                ErrorResponse {
                    error_type: "about:blank".to_string(),
                    title:      "Not Found".to_string(),
                    status:     StatusCode::NOT_FOUND.as_u16(),
                    detail:     Some(format!("{path} は存在しません")),
                },
            ),
        };

        (status, Json(error_response)).into_response()
    }
}
