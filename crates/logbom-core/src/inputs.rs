//! 输入文件解析：命令行显式列表，或默认的 `access.log*` 通配
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{Error, Result};

/// 未指定文件时使用的默认通配
pub const DEFAULT_GLOB: &str = "access.log*";

/// 列出 `dir` 下匹配 [`DEFAULT_GLOB`] 的普通文件（按路径排序）
/// `dir` 为空路径时相对当前工作目录匹配，输出路径也保持相对形式
pub fn default_inputs(dir: &Path) -> Result<Vec<PathBuf>> {
    let pattern = if dir.as_os_str().is_empty() {
        DEFAULT_GLOB.to_string()
    } else {
        // 目录部分需转义，避免其中的 `[`、`*` 等被当作通配符
        let escaped = glob::Pattern::escape(&dir.to_string_lossy());
        Path::new(&escaped).join(DEFAULT_GLOB).to_string_lossy().into_owned()
    };

    let mut files = Vec::new();
    for entry in glob::glob(&pattern)? {
        match entry {
            Ok(path) if path.is_file() => files.push(path),
            Ok(path) => debug!(path = %path.display(), "not a regular file, ignored"),
            Err(e) => warn!(path = %e.path().display(), error = %e.error(), "cannot inspect glob match"),
        }
    }
    files.sort();
    Ok(files)
}

/// 解析最终的输入列表：优先使用显式参数，否则回退到默认通配
/// 结果为空时返回 [`Error::NoInputFiles`]
pub fn resolve_inputs(args: Vec<PathBuf>, dir: &Path) -> Result<Vec<PathBuf>> {
    let files = if args.is_empty() { default_inputs(dir)? } else { args };
    if files.is_empty() {
        return Err(Error::NoInputFiles);
    }
    Ok(files)
}
