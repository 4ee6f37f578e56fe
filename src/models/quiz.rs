use std::collections::HashSet;
use std::fmt::Display;

use serde::Deserialize;

/// 抽题请求
#[derive(Debug, Clone, Deserialize)]
pub struct QuizRequest {
    /// 本轮已出现过的题目 ID
    #[serde(default)]
    pub previous_questions: Vec<i64>,
    pub quiz_category: QuizCategory,
}

/// 抽题分类，`id == 0` 表示全部分类
#[derive(Debug, Clone, Deserialize)]
pub struct QuizCategory {
    pub id: i64,
    #[serde(default, alias = "type")]
    pub name: Option<String>,
}

impl QuizRequest {
    pub fn seen_ids(&self) -> HashSet<i64> {
        self.previous_questions.iter().copied().collect()
    }

    pub fn scope(&self) -> QuizScope {
        QuizScope::from(self.quiz_category.id)
    }
}

/// 抽题范围
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizScope {
    /// 全部分类
    All,
    /// 指定分类
    Category(i64),
}

impl From<i64> for QuizScope {
    fn from(id: i64) -> Self {
        if id == 0 {
            QuizScope::All
        } else {
            QuizScope::Category(id)
        }
    }
}

impl Display for QuizScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuizScope::All => write!(f, "all categories"),
            QuizScope::Category(id) => write!(f, "category {}", id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_means_all_categories() {
        assert_eq!(QuizScope::from(0), QuizScope::All);
        assert_eq!(QuizScope::from(3), QuizScope::Category(3));
    }

    #[test]
    fn parses_original_request_shape() {
        let req: QuizRequest = serde_json::from_str(
            r#"{"previous_questions": [2, 2, 5], "quiz_category": {"id": 1, "type": "Science"}}"#,
        )
        .unwrap();
        assert_eq!(req.scope(), QuizScope::Category(1));
        assert_eq!(req.quiz_category.name.as_deref(), Some("Science"));
        assert_eq!(req.seen_ids().len(), 2);
    }
}
