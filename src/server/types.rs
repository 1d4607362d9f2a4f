// src/server/types.rs
use crate::core::prelude::*;
use crate::eval::{EvalexprEvaluator, Evaluator};
use crate::server::persistence::HistoryStore;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// One evaluated expression as stored in the history file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operation {
    pub expression: String,
    pub result: String,
}

impl Operation {
    pub fn new(expression: impl Into<String>, result: impl Into<String>) -> Self {
        Self {
            expression: expression.into(),
            result: result.into(),
        }
    }

    pub fn matches(&self, query: &str) -> bool {
        self.expression == query || self.result == query
    }
}

/// `?expression=...`; missing is rejected by validation, not by the extractor.
#[derive(Debug, Deserialize)]
pub struct ExpressionQuery {
    pub expression: Option<String>,
}

/// Shared between all workers through `web::Data`.
pub struct AppState {
    pub store: HistoryStore,
    pub evaluator: Arc<dyn Evaluator>,
}

impl AppState {
    pub fn new(store: HistoryStore, evaluator: Arc<dyn Evaluator>) -> Self {
        Self { store, evaluator }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let store = HistoryStore::new(
            &config.storage.content_root,
            config.storage.history_file.trim(),
        )?;
        Ok(Self::new(store, Arc::new(EvalexprEvaluator)))
    }
}
