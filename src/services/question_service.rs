/// 题库服务
///
/// 负责把查询层、分页引擎和抽题器串成每个接口的完整处理流程，
/// 并把结果转换成对外的视图对象
use serde::Serialize;
use tracing::{debug, info};

use crate::error::AppResult;
use crate::models::{CategoryMap, NewQuestionRequest, Question, QuestionView, QuizRequest, QuizScope};
use crate::services::pagination::{paginate, PageRequest};
use crate::services::query::QuestionQuery;
use crate::services::quiz_selector::QuizSelector;
use crate::store::QuestionStore;
use crate::utils::logging::truncate_text;

/// 全部题目的分页结果
#[derive(Debug, Clone, Serialize)]
pub struct QuestionListing {
    pub questions: Vec<QuestionView>,
    /// 分页前的题目总数
    pub total_questions: usize,
    pub categories: CategoryMap,
}

/// 搜索结果
#[derive(Debug, Clone, Serialize)]
pub struct SearchListing {
    pub questions: Vec<QuestionView>,
    pub total_questions: usize,
}

/// 分类下的题目
#[derive(Debug, Clone, Serialize)]
pub struct CategoryListing {
    pub questions: Vec<QuestionView>,
    #[serde(rename = "totalQuestions")]
    pub total_questions: usize,
    #[serde(rename = "currentCategory")]
    pub current_category: String,
}

/// 题库服务
pub struct QuestionService<S: QuestionStore> {
    store: S,
    selector: QuizSelector,
    page_size: usize,
}

impl<S: QuestionStore> QuestionService<S> {
    /// 创建新的题库服务
    pub fn new(store: S, selector: QuizSelector, page_size: usize) -> Self {
        Self {
            store,
            selector,
            page_size,
        }
    }

    fn query(&self) -> QuestionQuery<'_, S> {
        QuestionQuery::new(&self.store)
    }

    /// 全部分类（ID → 名称）
    pub fn categories(&self) -> CategoryMap {
        self.store
            .categories()
            .into_iter()
            .map(|c| (c.id, c.name))
            .collect()
    }

    /// 分页列出全部题目
    ///
    /// # 参数
    /// - `page`: 原始页码参数，缺省为第 1 页
    pub fn list_questions(&self, page: Option<&str>) -> AppResult<QuestionListing> {
        let page = PageRequest::parse(page, self.page_size)?;
        let all = self.query().list_all();
        let questions = to_views(paginate(&all, page)?);

        Ok(QuestionListing {
            questions,
            total_questions: all.len(),
            categories: self.categories(),
        })
    }

    /// 按题干搜索
    ///
    /// # 参数
    /// - `term`: 搜索词，缺失或为空时返回参数错误
    /// - `page`: 原始页码参数
    pub fn search_questions(&self, term: Option<&str>, page: Option<&str>) -> AppResult<SearchListing> {
        let page = PageRequest::parse(page, self.page_size)?;
        let found = self.query().search(term.unwrap_or_default())?;
        let questions = to_views(paginate(&found, page)?);

        Ok(SearchListing {
            questions,
            total_questions: found.len(),
        })
    }

    /// 分页列出分类下的题目
    pub fn questions_by_category(&self, category_id: i64, page: Option<&str>) -> AppResult<CategoryListing> {
        let page = PageRequest::parse(page, self.page_size)?;
        let query = self.query();
        let category = query.category(category_id)?;
        let in_category = query.by_category(category_id)?;
        let questions = to_views(paginate(&in_category, page)?);

        Ok(CategoryListing {
            questions,
            total_questions: in_category.len(),
            current_category: category.name,
        })
    }

    /// 新增题目，返回新题目 ID
    pub fn create_question(&self, request: NewQuestionRequest) -> AppResult<i64> {
        let new_question = request.validate()?;
        let created = self.store.insert(new_question)?;
        info!(
            "✓ 新增题目 #{}: {}",
            created.id,
            truncate_text(&created.text, 30)
        );
        Ok(created.id)
    }

    /// 删除题目，返回被删除的题目 ID
    pub fn delete_question(&self, id: i64) -> AppResult<i64> {
        let removed = self.store.remove(id)?;
        info!("🗑️ 删除题目 #{}", removed.id);
        Ok(removed.id)
    }

    /// 抽取下一道题目
    ///
    /// `quiz_category.id == 0` 时从全部题目中抽取，否则只从该分类中抽取。
    pub fn play_quiz(&self, request: &QuizRequest) -> AppResult<QuestionView> {
        let scope = request.scope();
        let pool: Vec<Question> = match scope {
            QuizScope::All => self.query().list_all(),
            QuizScope::Category(id) => self.query().by_category(id)?,
        };

        let picked = self.selector.pick(&pool, &request.seen_ids())?;
        debug!("抽题范围 {} → 题目 #{}", scope, picked.id);
        Ok(QuestionView::from(picked))
    }
}

fn to_views(questions: &[Question]) -> Vec<QuestionView> {
    questions.iter().map(QuestionView::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{AppError, NotFoundError, ValidationError};
    use crate::models::{Category, QuizCategory, SeedData};
    use crate::store::MemoryStore;

    fn question(id: i64, text: &str, category_id: i64) -> Question {
        Question {
            id,
            text: text.to_string(),
            answer: format!("answer {}", id),
            category_id,
            difficulty: 2,
        }
    }

    fn service(page_size: usize) -> QuestionService<MemoryStore> {
        let mut questions = vec![
            question(1, "What's the name?", 1),
            question(2, "Who are you?", 1),
            question(3, "What is the capital?", 1),
        ];
        questions.extend((10..25).map(|id| question(id, "Which painter?", 2)));

        let store = MemoryStore::from_seed(SeedData {
            categories: vec![
                Category { id: 1, name: "Science".to_string() },
                Category { id: 2, name: "Art".to_string() },
                Category { id: 3, name: "Sports".to_string() },
            ],
            questions,
        });
        QuestionService::new(store, QuizSelector::seeded(99), page_size)
    }

    fn quiz(category_id: i64, seen: Vec<i64>) -> QuizRequest {
        QuizRequest {
            previous_questions: seen,
            quiz_category: QuizCategory {
                id: category_id,
                name: None,
            },
        }
    }

    #[test]
    fn total_counts_unpaginated_set() {
        let service = service(10);
        let first = service.list_questions(None).unwrap();
        assert_eq!(first.questions.len(), 10);
        assert_eq!(first.total_questions, 18);
        assert_eq!(first.categories.len(), 3);

        let second = service.list_questions(Some("2")).unwrap();
        assert_eq!(second.questions.len(), 8);
        assert_eq!(second.total_questions, 18);
    }

    #[test]
    fn page_beyond_results_is_not_found() {
        let err = service(10).list_questions(Some("999")).unwrap_err();
        assert!(matches!(err, AppError::NotFound(NotFoundError::EmptyPage { .. })));
    }

    #[test]
    fn search_uses_same_pagination() {
        let service = service(2);
        let page = service.search_questions(Some("WHAT"), Some("1")).unwrap();
        assert_eq!(page.total_questions, 2);
        let ids: Vec<i64> = page.questions.iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert!(service.search_questions(Some("what"), Some("2")).is_err());
    }

    #[test]
    fn missing_search_term_is_validation_error() {
        let err = service(10).search_questions(None, None).unwrap_err();
        assert!(matches!(err, AppError::Validation(ValidationError::EmptySearchTerm)));
    }

    #[test]
    fn category_listing_reports_current_category() {
        let listing = service(10).questions_by_category(1, None).unwrap();
        assert_eq!(listing.current_category, "Science");
        assert_eq!(listing.total_questions, 3);
        let ids: Vec<i64> = listing.questions.iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn unknown_category_listing_is_not_found() {
        let err = service(10).questions_by_category(9, None).unwrap_err();
        assert!(matches!(err, AppError::NotFound(NotFoundError::Category { id: 9 })));
    }

    #[test]
    fn create_then_delete() {
        let service = service(10);
        let id = service
            .create_question(NewQuestionRequest {
                question: Some("What's the name of this book?".to_string()),
                answer: Some("I have no idea.".to_string()),
                category: Some(3),
                difficulty: Some(3),
            })
            .unwrap();
        assert_eq!(id, 25);
        assert_eq!(service.questions_by_category(3, None).unwrap().total_questions, 1);

        assert_eq!(service.delete_question(id).unwrap(), id);
        assert!(matches!(
            service.delete_question(id).unwrap_err(),
            AppError::NotFound(NotFoundError::Question { .. })
        ));
    }

    #[test]
    fn quiz_scoped_to_category_skips_seen() {
        let service = service(10);
        for _ in 0..20 {
            let picked = service.play_quiz(&quiz(1, vec![1, 2])).unwrap();
            assert_eq!(picked.id, 3);
            assert_eq!(picked.category, 1);
        }
    }

    #[test]
    fn quiz_over_all_categories() {
        let service = service(10);
        let picked = service.play_quiz(&quiz(0, vec![1, 2, 3])).unwrap();
        assert_eq!(picked.category, 2);
    }

    #[test]
    fn exhausted_category_is_reported() {
        let err = service(10).play_quiz(&quiz(1, vec![1, 2, 3])).unwrap_err();
        assert!(matches!(err, AppError::Exhausted { pool_size: 3 }));
    }

    #[test]
    fn quiz_on_unknown_category_is_not_found() {
        let err = service(10).play_quiz(&quiz(42, vec![])).unwrap_err();
        assert!(matches!(err, AppError::NotFound(NotFoundError::Category { id: 42 })));
    }
}
