//! # 環境変数ソース
//!
//! Readiness 設定と必須環境変数チェックが参照する環境変数の読み取り元を抽象化する。
//!
//! 本番では [`ProcessEnv`] がプロセスの環境変数をそのまま返す。
//! テストでは `test-support` feature の [`StaticEnv`] を注入し、
//! プロセス環境を書き換えずにシナリオを再現する
//! （edition 2024 では `std::env::set_var` が `unsafe` であり、並行テストと競合するため）。

/// 環境変数を読み取るトレイト
pub trait EnvSource: Send + Sync {
    /// 指定キーの値を返す。未設定の場合は `None`
    fn get(&self, key: &str) -> Option<String>;
}

/// プロセスの環境変数を読み取る実装
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    /// UTF-8 として不正なバイト列も「設定済み」として扱い、置換文字に変換して返す
    fn get(&self, key: &str) -> Option<String> {
        std::env::var_os(key).map(|v| v.to_string_lossy().into_owned())
    }
}

#[cfg(any(test, feature = "test-support"))]
pub use static_env::StaticEnv;

#[cfg(any(test, feature = "test-support"))]
mod static_env {
    use std::{
        collections::HashMap,
        sync::{PoisonError, RwLock},
    };

    use super::EnvSource;

    /// 値を差し替え可能なインメモリ環境（テスト用）
    ///
    /// リクエスト間で環境が変化するシナリオ（例: `BAR` を後から設定する）を
    /// 再現するため、`&self` のまま値を更新できる。
    #[derive(Debug, Default)]
    pub struct StaticEnv {
        vars: RwLock<HashMap<String, String>>,
    }

    impl StaticEnv {
        pub fn new() -> Self {
            Self::default()
        }

        /// キーと値の組から構築する
        pub fn from_pairs<I, K, V>(pairs: I) -> Self
        where
            I: IntoIterator<Item = (K, V)>,
            K: Into<String>,
            V: Into<String>,
        {
            let vars = pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect();
            Self {
                vars: RwLock::new(vars),
            }
        }

        pub fn set(&self, key: impl Into<String>, value: impl Into<String>) {
            self.vars
                .write()
                .unwrap_or_else(PoisonError::into_inner)
                .insert(key.into(), value.into());
        }
    }

    impl EnvSource for StaticEnv {
        fn get(&self, key: &str) -> Option<String> {
            self.vars
                .read()
                .unwrap_or_else(PoisonError::into_inner)
                .get(key)
                .cloned()
        }
    }
}
