/// 日志工具模块
///
/// 提供日志格式化和输出的辅助函数
use tracing::info;

use crate::config::Config;

/// 记录程序启动信息
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 题库服务启动 - {}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S"));
    info!("🌐 监听地址: {}", config.bind_addr);
    info!("📄 每页题目数: {}", config.questions_per_page);
    info!("📁 种子文件: {}", config.seed_file);
    match config.quiz_seed {
        Some(seed) => info!("🎲 抽题随机种子: {}", seed),
        None => info!("🎲 抽题随机种子: 系统熵"),
    }
    info!("{}", "=".repeat(60));
}

/// 记录种子数据加载信息
///
/// # 参数
/// - `categories`: 分类数量
/// - `questions`: 题目数量
pub fn log_seed_loaded(categories: usize, questions: usize) {
    info!("✓ 已加载 {} 个分类, {} 道题目", categories, questions);
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::truncate_text;

    #[test]
    fn truncates_on_char_boundary() {
        assert_eq!(truncate_text("什么是光合作用", 3), "什么是...");
        assert_eq!(truncate_text("short", 10), "short");
    }
}
