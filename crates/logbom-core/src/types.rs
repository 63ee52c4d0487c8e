//! 公共类型（对外暴露）与输出辅助
use serde::Serialize;
use std::io::{self, Write};
use std::path::Path;

/// 结果项结构（对应 `--json` 输出数组的单个元素）
#[derive(Debug, Clone, Serialize)]
pub struct HitItem<'a> {
    pub key: &'a str,
    pub hits: u64,
}

/// 原样写出路径：unix 上直接写文件名字节，非 UTF-8 文件名不做有损替换
pub(crate) fn write_path(out: &mut dyn Write, path: &Path) -> io::Result<()> {
    #[cfg(unix)]
    {
        use std::os::unix::ffi::OsStrExt;
        out.write_all(path.as_os_str().as_bytes())
    }
    #[cfg(not(unix))]
    {
        write!(out, "{}", path.display())
    }
}
