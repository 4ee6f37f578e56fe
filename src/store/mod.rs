//! 存储层
//!
//! 核心逻辑只通过 [`QuestionStore`] 访问题目和分类，不关心持久化方式。

pub mod memory;

pub use memory::MemoryStore;

use crate::error::AppResult;
use crate::models::{Category, NewQuestion, Question};

/// 题目 / 分类存储接口
///
/// 返回的集合不保证顺序，排序由查询层负责。
pub trait QuestionStore: Send + Sync {
    /// 全部分类
    fn categories(&self) -> Vec<Category>;

    /// 按 ID 获取分类
    fn category(&self, id: i64) -> Option<Category>;

    /// 按 ID 获取题目
    fn question(&self, id: i64) -> Option<Question>;

    /// 全部题目
    fn questions(&self) -> Vec<Question>;

    /// 指定分类下的题目
    fn questions_in_category(&self, category_id: i64) -> Vec<Question>;

    /// 题干包含 `term` 的题目（忽略大小写）
    fn questions_matching(&self, term: &str) -> Vec<Question>;

    /// 新增题目，返回带 ID 的题目
    fn insert(&self, question: NewQuestion) -> AppResult<Question>;

    /// 删除题目，返回被删除的题目
    fn remove(&self, id: i64) -> AppResult<Question>;
}
