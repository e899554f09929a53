pub mod infrastructure;
pub mod modules;
pub mod shared;

use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

use infrastructure::EventBus;
use modules::expression::SessionId;
use modules::ExpressionModule;
use shared::{AppError, AppResult};

const DATA_DIR_ENV: &str = "NYUKI_DATA_DIR";
const SESSION_ID_ENV: &str = "NYUKI_SESSION_ID";
const DEFAULT_DATA_DIR: &str = ".nyuki";

/// 控制台宿主
///
/// 从标准输入逐行读取 bot 消息，每行分类一次，输出持久化状态和视图（JSON）
pub fn run() -> AppResult<()> {
    // 初始化日志
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("Nyuki stage starting...");

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(serve())
}

async fn serve() -> AppResult<()> {
    let data_dir = std::env::var(DATA_DIR_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATA_DIR));
    tracing::info!("Data directory: {:?}", data_dir);

    let session_id = match std::env::var(SESSION_ID_ENV) {
        Ok(raw) => SessionId::parse(&raw).map_err(|_| AppError::InvalidSessionId(raw))?,
        Err(_) => SessionId::new(),
    };

    let event_bus = Arc::new(EventBus::new());
    let module = ExpressionModule::new_with_persistence(data_dir, event_bus).await?;

    let load = module.load().await;
    if !load.success {
        tracing::error!("Stage failed to load: {:?}", load.error);
        return Ok(());
    }

    let started = module.start_session(session_id, None).await?;
    tracing::info!(
        %session_id,
        expression = %started.message_state.current(),
        "Session ready"
    );

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let output = respond(&module, session_id, &line).await?;
        println!("{}", serde_json::to_string(&output)?);
    }

    tracing::info!("Input closed, stage stopping");
    Ok(())
}

/// 处理一行 bot 消息
///
/// 空行也是一条消息，内容为空时表情回到 neutral
async fn respond(
    module: &ExpressionModule,
    session_id: SessionId,
    line: &str,
) -> AppResult<serde_json::Value> {
    let response = module.after_response(session_id, line).await?;
    let view = module.render(session_id).await?;

    Ok(serde_json::json!({
        "sessionId": session_id,
        "messageState": response.message_state,
        "view": view,
    }))
}
