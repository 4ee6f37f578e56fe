//! 查询层 - 业务能力层
//!
//! 把"列表 / 搜索 / 按分类"请求转换为按 ID 升序排列的题目集合，
//! 保证同一份数据多次查询顺序一致，分页才稳定。

use tracing::debug;

use crate::error::{AppResult, NotFoundError, ValidationError};
use crate::models::{Category, Question};
use crate::store::QuestionStore;

/// 题目查询
pub struct QuestionQuery<'a, S: QuestionStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: QuestionStore + ?Sized> QuestionQuery<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// 全部题目
    pub fn list_all(&self) -> Vec<Question> {
        sorted(self.store.questions())
    }

    /// 题干包含 `term` 的题目（忽略大小写，不去除空白，不分词）
    ///
    /// `term` 为空时返回参数错误，而不是空结果。
    pub fn search(&self, term: &str) -> AppResult<Vec<Question>> {
        if term.is_empty() {
            return Err(ValidationError::EmptySearchTerm.into());
        }
        let found = sorted(self.store.questions_matching(term));
        debug!("搜索 {:?} 命中 {} 道题目", term, found.len());
        Ok(found)
    }

    /// 指定分类下的题目
    ///
    /// 分类不存在时返回 NotFound；分类存在但没有题目时返回空集合。
    pub fn by_category(&self, category_id: i64) -> AppResult<Vec<Question>> {
        self.category(category_id)?;
        Ok(sorted(self.store.questions_in_category(category_id)))
    }

    /// 获取分类，不存在时返回 NotFound
    pub fn category(&self, category_id: i64) -> AppResult<Category> {
        self.store
            .category(category_id)
            .ok_or_else(|| NotFoundError::Category { id: category_id }.into())
    }
}

fn sorted(mut questions: Vec<Question>) -> Vec<Question> {
    questions.sort_by_key(|q| q.id);
    questions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::models::SeedData;
    use crate::store::MemoryStore;

    fn question(id: i64, text: &str, category_id: i64) -> Question {
        Question {
            id,
            text: text.to_string(),
            answer: "answer".to_string(),
            category_id,
            difficulty: 1,
        }
    }

    fn store() -> MemoryStore {
        MemoryStore::from_seed(SeedData {
            categories: vec![
                Category { id: 1, name: "Science".to_string() },
                Category { id: 2, name: "Art".to_string() },
            ],
            questions: vec![
                question(3, "Who are you?", 1),
                question(1, "What's the name?", 1),
                question(2, "what a painting", 1),
            ],
        })
    }

    #[test]
    fn list_all_is_ordered_by_id() {
        let store = store();
        let ids: Vec<i64> = QuestionQuery::new(&store).list_all().iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn search_is_case_insensitive() {
        let store = store();
        let query = QuestionQuery::new(&store);
        let lower: Vec<i64> = query.search("what").unwrap().iter().map(|q| q.id).collect();
        let upper: Vec<i64> = query.search("WHAT").unwrap().iter().map(|q| q.id).collect();
        assert_eq!(lower, vec![1, 2]);
        assert_eq!(lower, upper);
    }

    #[test]
    fn search_only_returns_matches() {
        let store = store();
        for q in QuestionQuery::new(&store).search("you").unwrap() {
            assert!(q.text.to_lowercase().contains("you"));
        }
    }

    #[test]
    fn empty_search_term_is_validation_error() {
        let store = store();
        let err = QuestionQuery::new(&store).search("").unwrap_err();
        assert!(matches!(err, AppError::Validation(ValidationError::EmptySearchTerm)));
    }

    #[test]
    fn whitespace_term_is_literal() {
        let store = store();
        assert!(QuestionQuery::new(&store).search("   ").unwrap().is_empty());
    }

    #[test]
    fn unknown_category_is_not_found() {
        let store = store();
        let err = QuestionQuery::new(&store).by_category(9).unwrap_err();
        assert!(matches!(err, AppError::NotFound(NotFoundError::Category { id: 9 })));
    }

    #[test]
    fn empty_category_is_empty_result() {
        let store = store();
        assert!(QuestionQuery::new(&store).by_category(2).unwrap().is_empty());
    }
}
