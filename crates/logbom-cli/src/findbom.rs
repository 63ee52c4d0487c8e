use anyhow::{Context, Result};
use clap::Parser;
use logbom_core::{scan_tree, BomScanOptions};
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use tracing::info;

mod logging;

/// 命令行入口（基于 clap）；缺少路径参数时 clap 输出用法并以退出码 2 结束
#[derive(Parser, Debug)]
#[command(name = "findbom", version, about = "Find files starting with a UTF-8 BOM")]
struct Cli {
    /// 逐个输出每个文件及其检测结果
    #[arg(short, long, overrides_with = "no_verbose")]
    verbose: bool,

    /// 只输出带 BOM 的文件（默认）
    #[arg(long = "no-verbose", overrides_with = "verbose")]
    no_verbose: bool,

    /// 扫描的根目录（也可以是单个文件）
    path: PathBuf,
}

fn main() -> Result<()> {
    logging::init_tracing();
    let cli = Cli::parse();
    let opts = BomScanOptions { verbose: cli.verbose && !cli.no_verbose };
    info!(path = ?cli.path, verbose = opts.verbose, "starting bom scan");

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let stats = scan_tree(&cli.path, &opts, &mut out).context("bom scan failed")?;
    out.flush().context("flush stdout")?;

    info!(files_scanned = stats.files_scanned, boms_found = stats.boms_found, unreadable = stats.unreadable, "done");
    Ok(())
}
