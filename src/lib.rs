//! # Trivia Bank
//!
//! 一个按分类管理知识问答题目的 REST 题库服务
//!
//! ## 架构设计
//!
//! 本系统采用分层架构，核心逻辑不依赖 HTTP：
//!
//! ### ① 存储层（Store）
//! - `store/` - 题目 / 分类的存储接口，只暴露读写能力
//! - `MemoryStore` - 由 TOML 种子文件初始化的内存存储
//!
//! ### ② 业务能力层（Services）
//! - `QuestionQuery` - 列表 / 搜索 / 按分类查询，结果按 ID 升序
//! - `paginate` - 所有列表接口共用的分页引擎
//! - `QuizSelector` - 从未出现过的题目中随机抽题
//! - `QuestionService` - 把以上能力串成每个接口的处理流程
//!
//! ### ③ 接口层（Api）
//! - `api/` - axum 路由、请求解析、错误到状态码的映射
//!
//! ## 模块结构

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod services;
pub mod store;
pub mod utils;

// 重新导出常用类型
pub use app::App;
pub use config::Config;
pub use error::{AppError, AppResult, ErrorKind};
pub use models::{Category, Question, QuestionView, QuizRequest, QuizScope};
pub use services::{paginate, PageRequest, QuestionQuery, QuestionService, QuizSelector};
pub use store::{MemoryStore, QuestionStore};
