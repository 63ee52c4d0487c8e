//! UTF-8 BOM 扫描
//!
//! 递归遍历目录树，检查每个普通文件的前 3 个字节是否为 `EF BB BF`。
//! - 目录项按文件名排序，保证同一棵树多次扫描的输出一致。
//! - 单个文件或目录无法读取时记录告警并跳过，不中断整次扫描。
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;

use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::error::{Error, Result};
use crate::options::{BomScanOptions, BomStats};
use crate::types::write_path;

/// UTF-8 字节序标记
pub const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// 判断任意输入流是否以 BOM 开头（最多读取 3 个字节，不足 3 字节视为无 BOM）
pub fn starts_with_bom<R: Read>(reader: R) -> io::Result<bool> {
    let mut head = Vec::with_capacity(UTF8_BOM.len());
    reader.take(UTF8_BOM.len() as u64).read_to_end(&mut head)?;
    Ok(head == UTF8_BOM)
}

/// 判断单个文件是否以 BOM 开头
pub fn has_bom(path: &Path) -> io::Result<bool> {
    starts_with_bom(File::open(path)?)
}

/// 扫描 `root` 下的所有普通文件，并将结果逐行写入 `out`
/// - 详细模式：`<path> ... BOM found.` / `<path> ... no BOM.`
/// - 默认模式：仅输出带 BOM 的文件路径
pub fn scan_tree(root: &Path, opts: &BomScanOptions, out: &mut dyn Write) -> Result<BomStats> {
    if !root.exists() {
        return Err(Error::MissingRoot(root.to_path_buf()));
    }

    let mut stats = BomStats::default();

    // 不跟随符号链接目录（walkdir 默认行为）；指向文件的符号链接按文件处理
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                warn!(error = %e, "skipping unreadable entry");
                stats.unreadable += 1;
                continue;
            }
        };
        let path = entry.path();
        if !path.is_file() { continue; }

        let found = match has_bom(path) {
            Ok(found) => found,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "skipping unreadable file");
                stats.unreadable += 1;
                continue;
            }
        };
        debug!(path = %path.display(), found, "checked");

        stats.files_scanned += 1;
        if found { stats.boms_found += 1; }

        if opts.verbose {
            let verdict = if found { "BOM found." } else { "no BOM." };
            write_path(out, path)?;
            writeln!(out, " ... {}", verdict)?;
        } else if found {
            write_path(out, path)?;
            writeln!(out)?;
        }
    }

    info!(files_scanned = stats.files_scanned, boms_found = stats.boms_found, unreadable = stats.unreadable, "bom scan finished");
    Ok(stats)
}
