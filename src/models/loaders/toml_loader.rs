use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;
use tokio::fs;

use crate::error::{AppResult, FileError, ValidationError};
use crate::models::question::{Category, Question};

/// 题库种子数据
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub questions: Vec<Question>,
}

/// 从 TOML 文件加载题库种子数据
pub async fn load_seed_file(path: &Path) -> AppResult<SeedData> {
    let content = fs::read_to_string(path)
        .await
        .map_err(|source| FileError::ReadFailed {
            path: path.display().to_string(),
            source,
        })?;

    let seed = parse_seed(&content, path)?;
    tracing::debug!(
        "种子文件 {} 解析完成: {} 个分类, {} 道题目",
        path.display(),
        seed.categories.len(),
        seed.questions.len()
    );
    Ok(seed)
}

/// 解析并校验种子内容
///
/// 分类 ID 与题目 ID 必须唯一，且每道题目都必须引用已存在的分类。
pub fn parse_seed(content: &str, path: &Path) -> AppResult<SeedData> {
    let seed: SeedData = toml::from_str(content).map_err(|source| FileError::TomlParseFailed {
        path: path.display().to_string(),
        source,
    })?;

    let mut category_ids = HashSet::new();
    for category in &seed.categories {
        if !category_ids.insert(category.id) {
            return Err(ValidationError::DuplicateId {
                entity: "category",
                id: category.id,
            }
            .into());
        }
    }

    let mut question_ids = HashSet::new();
    for question in &seed.questions {
        if !question_ids.insert(question.id) {
            return Err(ValidationError::DuplicateId {
                entity: "question",
                id: question.id,
            }
            .into());
        }
        if !category_ids.contains(&question.category_id) {
            return Err(ValidationError::UnknownCategory {
                question_id: question.id,
                category_id: question.category_id,
            }
            .into());
        }
    }

    Ok(seed)
}
