pub mod pagination;
pub mod query;
pub mod question_service;
pub mod quiz_selector;

pub use pagination::{paginate, PageRequest};
pub use query::QuestionQuery;
pub use question_service::{CategoryListing, QuestionListing, QuestionService, SearchListing};
pub use quiz_selector::{next_question, QuizSelector};
