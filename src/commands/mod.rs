//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `parsers/`, `models/`, `density/`, `utils/`
//! - 子模块: info, extract, plane

pub mod extract;
pub mod info;
pub mod plane;

use crate::cli::Commands;
use crate::error::Result;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Info(args) => info::execute(args),
        Commands::Extract(args) => extract::execute(args),
        Commands::Plane(args) => plane::execute(args),
    }
}
