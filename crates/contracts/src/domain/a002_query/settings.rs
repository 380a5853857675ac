use super::aggregate::DEFAULT_TOP_K;
use serde::{Deserialize, Serialize};

pub const DEFAULT_MIN_SIMILARITY: f64 = 0.7;

/// Параметры запроса по умолчанию
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuerySettings {
    pub top_k: u32,
    pub min_similarity: f64,
}

impl Default for QuerySettings {
    fn default() -> Self {
        Self {
            top_k: DEFAULT_TOP_K,
            min_similarity: DEFAULT_MIN_SIMILARITY,
        }
    }
}

/// Частичное обновление настроек: `None` — поле не трогаем
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsPatch {
    #[serde(default)]
    pub top_k: Option<u32>,
    #[serde(default)]
    pub min_similarity: Option<f64>,
}

impl SettingsPatch {
    pub fn top_k(value: u32) -> Self {
        Self {
            top_k: Some(value),
            ..Default::default()
        }
    }

    pub fn min_similarity(value: f64) -> Self {
        Self {
            min_similarity: Some(value),
            ..Default::default()
        }
    }
}

impl QuerySettings {
    /// Shallow merge. top_k не меньше 1, min_similarity в [0, 1].
    pub fn merge(&mut self, patch: SettingsPatch) {
        if let Some(top_k) = patch.top_k {
            self.top_k = top_k.max(1);
        }
        if let Some(min_similarity) = patch.min_similarity {
            if min_similarity.is_finite() {
                self.min_similarity = min_similarity.clamp(0.0, 1.0);
            }
        }
    }
}
