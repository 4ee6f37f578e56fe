//! 分页引擎
//!
//! 所有列表接口共用同一套分页规则：页码从 1 开始，
//! 超出结果集的页视为错误而不是空页。

use crate::error::{AppResult, NotFoundError, ValidationError};

/// 分页请求
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page_number: u64,
    page_size: usize,
}

impl PageRequest {
    /// 创建分页请求
    ///
    /// # 参数
    /// - `page_number`: 页码，必须 ≥ 1
    /// - `page_size`: 每页数量，必须 > 0
    pub fn new(page_number: i64, page_size: usize) -> AppResult<Self> {
        if page_number < 1 {
            return Err(ValidationError::InvalidPageNumber { page: page_number }.into());
        }
        if page_size == 0 {
            return Err(ValidationError::InvalidPageSize.into());
        }
        Ok(Self {
            page_number: page_number as u64,
            page_size,
        })
    }

    /// 解析查询参数中的页码，缺省为第 1 页
    pub fn parse(raw: Option<&str>, page_size: usize) -> AppResult<Self> {
        let page_number = match raw {
            None => 1,
            Some(raw) => raw
                .trim()
                .parse::<i64>()
                .map_err(|_| ValidationError::MalformedPageNumber {
                    raw: raw.to_string(),
                })?,
        };
        Self::new(page_number, page_size)
    }

    pub fn page_number(&self) -> u64 {
        self.page_number
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }
}

/// 取出第 `page_number` 页
///
/// `start = (page_number - 1) * page_size`，`end = start + page_size`。
/// `start >= items.len()` 时返回 [`NotFoundError::EmptyPage`]。不修改输入。
pub fn paginate<T>(items: &[T], page: PageRequest) -> AppResult<&[T]> {
    let empty_page = || NotFoundError::EmptyPage {
        page: page.page_number,
        total: items.len(),
    };

    let start = usize::try_from(page.page_number - 1)
        .ok()
        .and_then(|offset| offset.checked_mul(page.page_size))
        .ok_or_else(empty_page)?;
    if start >= items.len() {
        return Err(empty_page().into());
    }

    let end = start.saturating_add(page.page_size).min(items.len());
    Ok(&items[start..end])
}
