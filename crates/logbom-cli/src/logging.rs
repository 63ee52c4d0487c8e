//! 日志初始化（两个命令行工具共用）

/// 初始化 tracing：日志写到 stderr，stdout 只保留工具本身的报告
/// 支持通过环境变量 RUST_LOG 控制日志等级，如：RUST_LOG=debug
pub fn init_tracing() {
    use tracing_subscriber::{EnvFilter, FmtSubscriber};
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}
