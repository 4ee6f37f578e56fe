use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{AppResult, ValidationError};

/// 分类 ID → 分类名称，按 ID 排序
pub type CategoryMap = BTreeMap<i64, String>;

/// 题目
///
/// 创建后不可修改，只能删除。
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Question {
    pub id: i64,
    /// 题干
    #[serde(rename = "question")]
    pub text: String,
    pub answer: String,
    /// 所属分类 ID
    #[serde(rename = "category")]
    pub category_id: i64,
    pub difficulty: i64,
}

impl Question {
    /// 题干是否包含 `term`（忽略大小写的字面子串匹配，不去除空白）
    pub fn text_contains(&self, term: &str) -> bool {
        self.text.to_lowercase().contains(&term.to_lowercase())
    }
}

/// 分类
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    #[serde(alias = "type")]
    pub name: String,
}

/// 返回给调用方的题目视图
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionView {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i64,
}

impl From<&Question> for QuestionView {
    fn from(q: &Question) -> Self {
        Self {
            id: q.id,
            question: q.text.clone(),
            answer: q.answer.clone(),
            category: q.category_id,
            difficulty: q.difficulty,
        }
    }
}

/// 已校验的新题目，ID 由存储层分配
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub text: String,
    pub answer: String,
    pub category_id: i64,
    pub difficulty: i64,
}

/// 创建题目的原始请求，所有字段都必填
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewQuestionRequest {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub category: Option<i64>,
    pub difficulty: Option<i64>,
}

impl NewQuestionRequest {
    /// 校验必填字段并转换为 [`NewQuestion`]
    pub fn validate(self) -> AppResult<NewQuestion> {
        let mut missing = Vec::new();
        if self.question.is_none() {
            missing.push("question");
        }
        if self.answer.is_none() {
            missing.push("answer");
        }
        if self.category.is_none() {
            missing.push("category");
        }
        if self.difficulty.is_none() {
            missing.push("difficulty");
        }

        match (self.question, self.answer, self.category, self.difficulty) {
            (Some(text), Some(answer), Some(category_id), Some(difficulty)) => {
                if text.trim().is_empty() {
                    return Err(ValidationError::BlankField { field: "question" }.into());
                }
                if answer.trim().is_empty() {
                    return Err(ValidationError::BlankField { field: "answer" }.into());
                }
                Ok(NewQuestion {
                    text,
                    answer,
                    category_id,
                    difficulty,
                })
            }
            _ => Err(ValidationError::MissingFields { fields: missing }.into()),
        }
    }
}
