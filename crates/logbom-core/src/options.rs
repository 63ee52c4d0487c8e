//! 运行选项与统计信息（模块）

/// BOM 扫描选项
#[derive(Debug, Clone, Default)]
pub struct BomScanOptions {
    /// 详细模式：逐个输出每个文件的检测结果；否则仅输出带 BOM 的文件路径
    pub verbose: bool,
}

/// 日志命中计数选项
#[derive(Debug, Clone, Default)]
pub struct HitCountOptions {
    /// 以 JSON 数组输出结果（替代文本表格）
    pub json: bool,
}

/// BOM 扫描统计信息（便于 CLI 打印）
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BomStats {
    pub files_scanned: usize,
    pub boms_found: usize,
    /// 无法读取而被跳过的文件/目录项
    pub unreadable: usize,
}

/// 批量计数的汇总报告
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BatchReport {
    pub files_total: usize,
    pub files_parsed: usize,
    pub files_failed: usize,
    pub lines_read: u64,
    pub lines_matched: u64,
    /// 是否因中断信号提前结束
    pub aborted: bool,
}
