//! HTTP 接口模块
//!
//! 只负责请求解析、JSON 序列化和错误到状态码的映射，
//! 业务逻辑全部在 `services` 中

pub mod error;
pub mod handlers;
pub mod router;

// 重新导出常用类型
pub use error::ApiError;
pub use router::{create_router, SharedService};
