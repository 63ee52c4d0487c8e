//! 核心库：两个独立的小工具
//!
//! - BOM 扫描（`bom`）：递归查找以 UTF-8 BOM 开头的文件。
//! - 日志命中计数（`hits`）：逐行匹配访问日志（支持 `.gz`），按捕获组分组计数。
//!
//! 两者不共享运行时状态，仅共用错误类型、选项与日志约定。

mod options;
mod types;
mod error;
pub mod bom;
pub mod hits;
pub mod inputs;
pub mod interrupt;

// 对外暴露
pub use options::{BomScanOptions, HitCountOptions, BomStats, BatchReport};
pub use types::HitItem;
pub use error::{Error, Result};
pub use bom::{has_bom, scan_tree, UTF8_BOM};
pub use hits::{run_batch, HitCounter, DEFAULT_PATTERN};
pub use inputs::resolve_inputs;
