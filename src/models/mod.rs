pub mod loaders;
pub mod question;
pub mod quiz;

pub use loaders::{load_seed_file, SeedData};
pub use question::{Category, CategoryMap, NewQuestion, NewQuestionRequest, Question, QuestionView};
pub use quiz::{QuizCategory, QuizRequest, QuizScope};
