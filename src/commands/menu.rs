use console::{style, Term};

use super::prompt;
use crate::cli::InitArgs;
use crate::error::AppError;

/// 交互式主菜单（无子命令时的默认入口）
pub fn run() -> Result<(), AppError> {
    let term = Term::stdout();
    loop {
        println!();
        println!(
            "  {}",
            style("CCG - Claude + Codex + Gemini").cyan().bold()
        );
        println!();
        println!("  1. 初始化多模型协作系统");
        println!("  2. 配置 ace-tool MCP Token");
        println!("  3. 诊断 MCP 配置");
        println!("  4. 修复 Windows MCP 配置");
        println!("  0. 退出");
        println!();

        let choice = prompt(&term, "请选择")?;
        let outcome = match choice.as_str() {
            "1" => super::init::run(&InitArgs::default()),
            "2" => super::config_mcp::run(None),
            "3" => super::diagnose::run_diagnose(),
            "4" => super::diagnose::run_fix(),
            "0" | "q" => {
                println!();
                return Ok(());
            }
            "" => continue,
            other => {
                println!("  {}", style(format!("未知选项: {other}")).red());
                continue;
            }
        };

        // 单条命令失败不应终止菜单
        if let Err(err) = outcome {
            println!("  {}", style(format!("❌ {err}")).red());
        }
    }
}
