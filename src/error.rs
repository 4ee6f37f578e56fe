use thiserror::Error;

/// 应用程序错误类型
///
/// 核心层只产生 `Validation` / `NotFound` / `Exhausted` 三类错误，
/// `Config` 与 `File` 只在启动阶段出现。
#[derive(Debug, Error)]
pub enum AppError {
    /// 输入不合法
    #[error("参数错误: {0}")]
    Validation(#[from] ValidationError),
    /// 引用的资源不存在
    #[error("未找到: {0}")]
    NotFound(#[from] NotFoundError),
    /// 题目池中已没有未出现过的题目
    #[error("题目已全部出现过 (题目池: {pool_size} 道)")]
    Exhausted { pool_size: usize },
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
    /// 文件错误
    #[error("文件错误: {0}")]
    File(#[from] FileError),
}

/// 错误分类，供外层（HTTP）映射状态码使用
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    Exhausted,
    Internal,
}

impl AppError {
    /// 获取错误分类
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::Validation(_) => ErrorKind::Validation,
            AppError::NotFound(_) => ErrorKind::NotFound,
            AppError::Exhausted { .. } => ErrorKind::Exhausted,
            AppError::Config(_) | AppError::File(_) => ErrorKind::Internal,
        }
    }

    /// 面向调用方的简短描述（不带分类前缀）
    pub fn detail(&self) -> String {
        match self {
            AppError::Validation(e) => e.to_string(),
            AppError::NotFound(e) => e.to_string(),
            AppError::Exhausted { pool_size } => {
                format!("all {} questions in this quiz have been seen", pool_size)
            }
            AppError::Config(e) => e.to_string(),
            AppError::File(e) => e.to_string(),
        }
    }

    /// 创建题目池耗尽错误
    pub fn exhausted(pool_size: usize) -> Self {
        AppError::Exhausted { pool_size }
    }
}

/// 输入校验错误
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// 搜索词缺失或为空
    #[error("search term must not be empty")]
    EmptySearchTerm,
    /// 页码小于 1
    #[error("page number must be at least 1, got {page}")]
    InvalidPageNumber { page: i64 },
    /// 页码不是整数
    #[error("page number is not an integer: {raw}")]
    MalformedPageNumber { raw: String },
    /// 每页数量必须为正
    #[error("page size must be positive")]
    InvalidPageSize,
    /// 缺少必填字段
    #[error("missing fields: {}", .fields.join(", "))]
    MissingFields { fields: Vec<&'static str> },
    /// 字段内容为空
    #[error("field `{field}` must not be blank")]
    BlankField { field: &'static str },
    /// 请求体格式错误
    #[error("malformed request body: {reason}")]
    MalformedBody { reason: String },
    /// 查询参数格式错误
    #[error("malformed query string: {reason}")]
    MalformedQuery { reason: String },
    /// 种子数据中引用了不存在的分类
    #[error("question {question_id} references unknown category {category_id}")]
    UnknownCategory { question_id: i64, category_id: i64 },
    /// 种子数据中存在重复 ID
    #[error("duplicate {entity} id {id}")]
    DuplicateId { entity: &'static str, id: i64 },
}

/// 资源不存在错误
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NotFoundError {
    /// 分类不存在
    #[error("category {id} not found")]
    Category { id: i64 },
    /// 题目不存在
    #[error("question {id} not found")]
    Question { id: i64 },
    /// 请求的页超出结果集
    #[error("page {page} is beyond the {total} available items")]
    EmptyPage { page: u64, total: usize },
    /// 路径参数无法匹配（如非整数 ID）
    #[error("no resource at this path: {reason}")]
    MalformedPath { reason: String },
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 环境变量解析失败
    #[error("环境变量 {var_name} 解析失败: 值 '{value}' 无法转换为 {expected_type}")]
    EnvVarParseFailed {
        var_name: String,
        value: String,
        expected_type: String,
    },
    /// 配置值不合法
    #[error("配置项 {name} 不合法: {reason}")]
    InvalidValue { name: String, reason: String },
}

/// 文件操作错误
#[derive(Debug, Error)]
pub enum FileError {
    /// 读取文件失败
    #[error("读取文件失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// TOML 解析失败
    #[error("TOML解析失败 ({path}): {source}")]
    TomlParseFailed {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
