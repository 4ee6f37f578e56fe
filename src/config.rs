use std::str::FromStr;

use crate::error::{AppResult, ConfigError};

/// 每页题目数量默认值
pub const QUESTIONS_PER_PAGE: usize = 10;

/// 程序配置
#[derive(Clone, Debug)]
pub struct Config {
    /// 服务监听地址
    pub bind_addr: String,
    /// 每页题目数量
    pub questions_per_page: usize,
    /// 题库种子文件
    pub seed_file: String,
    /// 抽题随机数种子（为空时使用系统熵）
    pub quiz_seed: Option<u64>,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:5000".to_string(),
            questions_per_page: QUESTIONS_PER_PAGE,
            seed_file: "data/trivia.toml".to_string(),
            quiz_seed: None,
            verbose_logging: false,
        }
    }
}

impl Config {
    /// 从环境变量读取配置
    ///
    /// 未设置的变量使用默认值；已设置但无法解析的变量返回 [`ConfigError::EnvVarParseFailed`]。
    pub fn from_env() -> AppResult<Self> {
        let default = Self::default();
        Ok(Self {
            bind_addr: std::env::var("BIND_ADDR").unwrap_or(default.bind_addr),
            questions_per_page: parse_var("QUESTIONS_PER_PAGE", std::env::var("QUESTIONS_PER_PAGE").ok(), "usize")?
                .unwrap_or(default.questions_per_page),
            seed_file: std::env::var("SEED_FILE").unwrap_or(default.seed_file),
            quiz_seed: parse_var("QUIZ_SEED", std::env::var("QUIZ_SEED").ok(), "u64")?,
            verbose_logging: parse_var("VERBOSE_LOGGING", std::env::var("VERBOSE_LOGGING").ok(), "bool")?
                .unwrap_or(default.verbose_logging),
        })
    }

    /// 校验配置
    pub fn validate(&self) -> AppResult<()> {
        if self.questions_per_page == 0 {
            return Err(ConfigError::InvalidValue {
                name: "QUESTIONS_PER_PAGE".to_string(),
                reason: "must be a positive integer".to_string(),
            }
            .into());
        }
        if self.bind_addr.parse::<std::net::SocketAddr>().is_err() {
            return Err(ConfigError::EnvVarParseFailed {
                var_name: "BIND_ADDR".to_string(),
                value: self.bind_addr.clone(),
                expected_type: "SocketAddr".to_string(),
            }
            .into());
        }
        Ok(())
    }
}

/// 解析单个环境变量的值，`None` 表示未设置
fn parse_var<T: FromStr>(var_name: &str, value: Option<String>, expected_type: &str) -> AppResult<Option<T>> {
    match value {
        None => Ok(None),
        Some(value) => value.trim().parse().map(Some).map_err(|_| {
            ConfigError::EnvVarParseFailed {
                var_name: var_name.to_string(),
                value,
                expected_type: expected_type.to_string(),
            }
            .into()
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    #[test]
    fn default_config_is_valid() {
        let config = Config::default();
        assert_eq!(config.questions_per_page, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_page_size_is_rejected() {
        let config = Config {
            questions_per_page: 0,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn unset_var_falls_back() {
        assert_eq!(parse_var::<u64>("QUIZ_SEED", None, "u64").unwrap(), None);
    }

    #[test]
    fn set_var_is_parsed() {
        let seed = parse_var::<u64>("QUIZ_SEED", Some("42".to_string()), "u64").unwrap();
        assert_eq!(seed, Some(42));
    }

    #[test]
    fn malformed_var_is_an_error() {
        let err = parse_var::<u64>("QUIZ_SEED", Some("abc".to_string()), "u64").unwrap_err();
        assert!(matches!(
            err,
            AppError::Config(ConfigError::EnvVarParseFailed { ref var_name, ref value, .. })
                if var_name == "QUIZ_SEED" && value == "abc"
        ));
        assert!(parse_var::<usize>("QUESTIONS_PER_PAGE", Some("ten".to_string()), "usize").is_err());
    }

    #[test]
    fn bad_bind_addr_is_rejected() {
        let config = Config {
            bind_addr: "not-an-address".to_string(),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }
}
