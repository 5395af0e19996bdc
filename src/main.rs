//! # Denutil - 电子密度后处理统一工具箱
//!
//! 将分散的密度后处理脚本用 Rust 重构，统一成单一可执行文件。
//!
//! ## 子命令
//! - `info`    - 打印体数据文件 (CHGCAR/LOCPOT/PARCHG) 的汇总统计
//! - `extract` - 剖面提取
//!   - `line`   - 两点之间的直线剖面
//!   - `zavg`   - 轴向平面平均
//!   - `radial` - 球面平均
//! - `plane`   - 渲染二进制平面切割热图
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── parsers/   (格式解析器)
//!   │     ├── models/    (数据模型)
//!   │     └── density/   (统计、剖面、绘图)
//!   ├── batch/      (批量处理)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod density;
mod error;
mod models;
mod parsers;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
