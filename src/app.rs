use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::api::create_router;
use crate::config::Config;
use crate::models::load_seed_file;
use crate::services::{QuestionService, QuizSelector};
use crate::store::{MemoryStore, QuestionStore};
use crate::utils::logging::{log_seed_loaded, log_startup};

/// 应用主结构
pub struct App {
    config: Config,
    router: Router,
}

impl App {
    /// 初始化应用
    pub async fn initialize(config: Config) -> Result<Self> {
        config.validate()?;
        log_startup(&config);

        // 加载种子数据
        info!("\n📁 正在加载题库种子数据...");
        let seed = load_seed_file(Path::new(&config.seed_file))
            .await
            .with_context(|| format!("无法加载种子文件: {}", config.seed_file))?;

        let store = MemoryStore::from_seed(seed);
        log_seed_loaded(store.categories().len(), store.questions().len());

        let service = build_service(store, &config);
        let router = create_router(Arc::new(service));

        Ok(Self { config, router })
    }

    /// 运行应用主逻辑
    pub async fn run(self) -> Result<()> {
        let listener = TcpListener::bind(&self.config.bind_addr)
            .await
            .with_context(|| format!("无法监听地址: {}", self.config.bind_addr))?;
        info!("✓ 服务已启动: http://{}", self.config.bind_addr);

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("服务运行失败")?;

        info!("👋 服务已停止");
        Ok(())
    }
}

/// 根据配置组装题库服务
pub fn build_service(store: MemoryStore, config: &Config) -> QuestionService<MemoryStore> {
    QuestionService::new(
        store,
        QuizSelector::from_seed_option(config.quiz_seed),
        config.questions_per_page,
    )
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("无法监听 Ctrl-C 信号: {}", e);
        std::future::pending::<()>().await;
    }
}
