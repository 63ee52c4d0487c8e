//! 中断标志（协作式取消）
//!
//! SIGINT 只负责置位一个 `AtomicBool`；处理循环在文件之间、行之间轮询该标志，
//! 提前结束后仍可输出已累计的结果。
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use signal_hook::consts::SIGINT;

/// 是否已收到中断
pub fn is_set(flag: &AtomicBool) -> bool {
    flag.load(Ordering::Acquire)
}

/// 注册 SIGINT，返回由信号置位的标志（传给 `run_batch` 等处理函数）
pub fn install() -> std::io::Result<Arc<AtomicBool>> {
    let flag = Arc::new(AtomicBool::new(false));
    signal_hook::flag::register(SIGINT, Arc::clone(&flag))?;
    Ok(flag)
}
