//! 集成测试共用的辅助函数
#![allow(dead_code)]

pub use assert_cmd::Command;

/// 清掉外部 RUST_LOG，保证 stderr 上的告警按默认的 warn 等级输出
fn tool_cmd(name: &str) -> Command {
    let mut cmd = Command::cargo_bin(name).expect("tool binary");
    cmd.env_remove("RUST_LOG");
    cmd
}

pub fn findbom_cmd() -> Command {
    tool_cmd("findbom")
}

pub fn hitcount_cmd() -> Command {
    tool_cmd("hitcount")
}

/// 一段典型的 Apache 访问日志：3 行命中，2 个不同的键
pub const ACCESS_LOG: &str = "\
1.2.3.4 - - [14/Jul/2008:10:00:00 +0200] \"GET /media/videos/2008-07-14/clip.mp4 HTTP/1.1\" 200 512
1.2.3.4 - - [14/Jul/2008:10:00:01 +0200] \"GET /static/site.css HTTP/1.1\" 200 64
1.2.3.5 - - [14/Jul/2008:10:00:02 +0200] \"GET /media/videos/2008-07-14/clip.mp4 HTTP/1.1\" 206 512
1.2.3.6 - - [15/Jul/2008:09:00:00 +0200] \"GET /media/videos/2008-07-15/other.flv HTTP/1.1\" 200 900
";
