use anyhow::{Context, Result};
use clap::Parser;
use logbom_core::{interrupt, resolve_inputs, run_batch, Error, HitCountOptions, HitCounter};
use std::io;
use std::path::{Path, PathBuf};
use std::process;
use tracing::info;

mod logging;

/// 命令行入口（基于 clap）
/// 匹配规则为内置常量，不能通过命令行修改
#[derive(Parser, Debug)]
#[command(name = "hitcount", version, about = "Count hits to matching URLs in (gzipped) access logs")]
struct Cli {
    /// 以 JSON 数组输出结果
    #[arg(long)]
    json: bool,

    /// 日志文件；未指定时使用当前目录下的 access.log*
    files: Vec<PathBuf>,
}

fn main() -> Result<()> {
    logging::init_tracing();
    let cli = Cli::parse();

    let files = match resolve_inputs(cli.files, Path::new("")) {
        Ok(files) => files,
        Err(Error::NoInputFiles) => {
            eprintln!("No files given.");
            process::exit(2);
        }
        Err(e) => return Err(e).context("resolve input files"),
    };

    // Ctrl-C 只置位标志，由处理循环自行收尾并输出部分结果
    let cancel = interrupt::install().context("install SIGINT handler")?;

    let mut counter = HitCounter::with_default_pattern()?;
    let opts = HitCountOptions { json: cli.json };
    // 进度行需要及时可见，这里直接使用行缓冲的 stdout
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let report = run_batch(&mut counter, &files, &opts, &mut out, &cancel).context("hit count failed")?;

    info!(files_total = report.files_total, files_failed = report.files_failed, lines_read = report.lines_read, aborted = report.aborted, "done");
    Ok(())
}
