//! 日志命中计数
//!
//! 逐行扫描（可为 gzip 压缩的）访问日志，按正则第 1 个捕获组分组计数。
//! - 行匹配基于 `regex::bytes`，日志中的非法 UTF-8 字节不会导致整个文件失败。
//! - 计数表保持键的首次出现顺序（insertion order），输出时按该顺序遍历。
//! - 单个文件失败（不存在、无法读取、gzip 损坏）时跳过该文件，其已读部分不计入结果。
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::AtomicBool;

use flate2::read::MultiGzDecoder;
use indexmap::IndexMap;
use regex::bytes::Regex;
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::interrupt;
use crate::options::{BatchReport, HitCountOptions};
use crate::types::{write_path, HitItem};

/// 内置匹配规则：GET 请求中带日期的视频目录，捕获组即分组键
pub const DEFAULT_PATTERN: &str = r"GET (/media/videos/\d{4}-\d{2}-\d{2})";

/// 单个输入的扫描摘要
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FileSummary {
    pub lines_read: u64,
    pub lines_matched: u64,
    /// 扫描途中收到中断，后续行未读取
    pub interrupted: bool,
}

/// 命中计数器：一条正则 + 有序的 键 → 次数 映射
pub struct HitCounter {
    regex: Regex,
    hits: IndexMap<String, u64>,
}

impl HitCounter {
    pub fn new(pattern: &str) -> Result<Self> {
        Ok(Self { regex: Regex::new(pattern)?, hits: IndexMap::new() })
    }

    pub fn with_default_pattern() -> Result<Self> {
        Self::new(DEFAULT_PATTERN)
    }

    /// 读取某个键的次数；不存在的键视为 0
    pub fn get(&self, key: &str) -> u64 {
        self.hits.get(key).copied().unwrap_or(0)
    }

    /// 键的次数加一（首次出现时从 0 开始），返回新值
    pub fn record(&mut self, key: &str) -> u64 {
        bump(&mut self.hits, key, 1)
    }

    /// 所有键的次数之和，等于已处理文件中匹配的行数
    pub fn total(&self) -> u64 {
        self.hits.values().sum()
    }

    pub fn len(&self) -> usize {
        self.hits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    /// 按首次出现顺序遍历 (键, 次数)
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.hits.iter().map(|(k, n)| (k.as_str(), *n))
    }

    /// 解析单个日志文件（`.gz` 结尾按 gzip 流解压读取）
    pub fn parse_file(&mut self, path: &Path, out: &mut dyn Write, cancel: &AtomicBool) -> Result<FileSummary> {
        self.parse_with(path, out, cancel, &open_log)
    }

    fn parse_with(&mut self, path: &Path, out: &mut dyn Write, cancel: &AtomicBool, open: OpenFn) -> Result<FileSummary> {
        write!(out, "Parsing ")?;
        write_path(out, path)?;
        writeln!(out, " ...")?;
        let reader = open(path).map_err(|e| Error::io(path, e))?;
        let summary = self.count_lines(reader, cancel).map_err(|e| Error::io(path, e))?;
        debug!(path = %path.display(), lines_read = summary.lines_read, lines_matched = summary.lines_matched, "parsed");
        Ok(summary)
    }

    /// 从任意行输入中计数；每行之前检查一次中断标志
    /// 读取出错时本次输入的计数全部丢弃；中断时保留已读部分
    pub fn count_lines<R: BufRead>(&mut self, mut reader: R, cancel: &AtomicBool) -> io::Result<FileSummary> {
        let mut summary = FileSummary::default();
        let mut local: IndexMap<String, u64> = IndexMap::new();
        let mut line = Vec::new();

        loop {
            if interrupt::is_set(cancel) {
                summary.interrupted = true;
                break;
            }
            line.clear();
            if reader.read_until(b'\n', &mut line)? == 0 { break; }
            summary.lines_read += 1;

            if let Some(key) = self.match_key(trim_eol(&line)) {
                bump(&mut local, &key, 1);
                summary.lines_matched += 1;
            }
        }

        for (key, n) in local {
            bump(&mut self.hits, &key, n);
        }
        Ok(summary)
    }

    /// 优先取第 1 个捕获组；该组未参与匹配时退化为整个匹配
    fn match_key(&self, line: &[u8]) -> Option<String> {
        let caps = self.regex.captures(line)?;
        let m = caps.get(1).or_else(|| caps.get(0))?;
        Some(String::from_utf8_lossy(m.as_bytes()).into_owned())
    }

    /// 文本结果：表头 + 每个键一行（次数右对齐，至少 8 位）
    pub fn show_results(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out)?;
        writeln!(out, "Results:")?;
        for (key, n) in self.iter() {
            writeln!(out, "{} {:>8} hits", key, n)?;
        }
        Ok(())
    }

    /// JSON 结果：`[{"key": ..., "hits": ...}, ...]`，顺序同文本输出
    pub fn write_json(&self, out: &mut dyn Write) -> Result<()> {
        let items: Vec<HitItem> = self.iter().map(|(key, hits)| HitItem { key, hits }).collect();
        serde_json::to_writer(&mut *out, &items)?;
        writeln!(out)?;
        Ok(())
    }
}

fn bump(map: &mut IndexMap<String, u64>, key: &str, by: u64) -> u64 {
    match map.get_mut(key) {
        Some(n) => { *n += by; *n }
        None => { map.insert(key.to_string(), by); by }
    }
}

fn trim_eol(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

fn is_gzip_name(path: &Path) -> bool {
    path.as_os_str().to_string_lossy().ends_with(".gz")
}

/// 按路径打开一个行输入
type OpenFn<'a> = &'a dyn Fn(&Path) -> io::Result<Box<dyn BufRead>>;

/// 打开日志文件；gzip 多成员流也会被完整读取
fn open_log(path: &Path) -> io::Result<Box<dyn BufRead>> {
    let file = File::open(path)?;
    if is_gzip_name(path) {
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

/// 批量处理入口：依次解析每个文件，最后输出结果
/// - 每个文件开始前检查中断标志；中断后输出 `Aborted.` 与已累计的结果
/// - 单个文件的读取错误记录告警并跳过；写输出失败直接返回错误
pub fn run_batch(
    counter: &mut HitCounter,
    files: &[PathBuf],
    opts: &HitCountOptions,
    out: &mut dyn Write,
    cancel: &AtomicBool,
) -> Result<BatchReport> {
    run_batch_with(counter, files, opts, out, cancel, &open_log)
}

fn run_batch_with(
    counter: &mut HitCounter,
    files: &[PathBuf],
    opts: &HitCountOptions,
    out: &mut dyn Write,
    cancel: &AtomicBool,
    open: OpenFn,
) -> Result<BatchReport> {
    let mut report = BatchReport { files_total: files.len(), ..BatchReport::default() };
    writeln!(out, "Going to analyze {} files ...", files.len())?;

    for path in files {
        if interrupt::is_set(cancel) {
            report.aborted = true;
            break;
        }
        match counter.parse_with(path, out, cancel, open) {
            Ok(summary) => {
                report.files_parsed += 1;
                report.lines_read += summary.lines_read;
                report.lines_matched += summary.lines_matched;
                if summary.interrupted {
                    report.aborted = true;
                    break;
                }
            }
            Err(Error::Io { path, source }) => {
                warn!(path = %path.display(), error = %source, "skipping file");
                report.files_failed += 1;
            }
            Err(e) => return Err(e),
        }
    }

    if report.aborted {
        writeln!(out)?;
        writeln!(out, "Aborted.")?;
    }
    if opts.json {
        counter.write_json(out)?;
    } else {
        counter.show_results(out)?;
    }

    info!(
        files_parsed = report.files_parsed,
        files_failed = report.files_failed,
        lines_matched = report.lines_matched,
        aborted = report.aborted,
        "hit count finished"
    );
    Ok(report)
}
