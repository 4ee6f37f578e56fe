use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::debug;

use crate::error::{AppResult, NotFoundError};
use crate::models::{Category, NewQuestion, Question, SeedData};
use crate::store::QuestionStore;

#[derive(Debug, Default)]
struct Tables {
    categories: BTreeMap<i64, Category>,
    questions: BTreeMap<i64, Question>,
    /// 下一个可分配的题目 ID，删除后不复用
    next_id: i64,
}

/// 内存存储
///
/// 读写锁保证新增和删除的原子性。
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    /// 使用种子数据创建存储
    ///
    /// 种子数据需事先经过 [`crate::models::loaders::parse_seed`] 校验。
    pub fn from_seed(seed: SeedData) -> Self {
        let questions: BTreeMap<i64, Question> =
            seed.questions.into_iter().map(|q| (q.id, q)).collect();
        let next_id = questions.keys().next_back().map_or(1, |max| max + 1);
        let tables = Tables {
            categories: seed.categories.into_iter().map(|c| (c.id, c)).collect(),
            questions,
            next_id,
        };
        Self {
            tables: RwLock::new(tables),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, Tables> {
        self.tables.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Tables> {
        self.tables.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl QuestionStore for MemoryStore {
    fn categories(&self) -> Vec<Category> {
        self.read().categories.values().cloned().collect()
    }

    fn category(&self, id: i64) -> Option<Category> {
        self.read().categories.get(&id).cloned()
    }

    fn question(&self, id: i64) -> Option<Question> {
        self.read().questions.get(&id).cloned()
    }

    fn questions(&self) -> Vec<Question> {
        self.read().questions.values().cloned().collect()
    }

    fn questions_in_category(&self, category_id: i64) -> Vec<Question> {
        self.read()
            .questions
            .values()
            .filter(|q| q.category_id == category_id)
            .cloned()
            .collect()
    }

    fn questions_matching(&self, term: &str) -> Vec<Question> {
        self.read()
            .questions
            .values()
            .filter(|q| q.text_contains(term))
            .cloned()
            .collect()
    }

    fn insert(&self, question: NewQuestion) -> AppResult<Question> {
        let mut tables = self.write();
        if !tables.categories.contains_key(&question.category_id) {
            return Err(NotFoundError::Category {
                id: question.category_id,
            }
            .into());
        }

        let id = tables.next_id.max(1);
        tables.next_id = id + 1;
        let created = Question {
            id,
            text: question.text,
            answer: question.answer,
            category_id: question.category_id,
            difficulty: question.difficulty,
        };
        tables.questions.insert(id, created.clone());
        debug!("新增题目 #{} (分类 {})", id, created.category_id);
        Ok(created)
    }

    fn remove(&self, id: i64) -> AppResult<Question> {
        let removed = self
            .write()
            .questions
            .remove(&id)
            .ok_or(NotFoundError::Question { id })?;
        debug!("删除题目 #{}", id);
        Ok(removed)
    }
}
