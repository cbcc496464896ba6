use console::style;

use crate::claude_mcp::{read_claude_code_config, write_claude_code_config};
use crate::error::AppError;
use crate::mcp::{diagnose_mcp_config, fix_windows_mcp_config, Severity};
use crate::platform::Platform;

/// `ccg diagnose-mcp`
pub fn run_diagnose() -> Result<(), AppError> {
    println!();
    println!("  {}", style("🔍 MCP Configuration Diagnostics").cyan().bold());
    println!();

    let platform = Platform::current();
    let issues = diagnose_mcp_config(platform);

    println!("  {}", style("Diagnostic Results:").bold());
    println!();

    for issue in &issues {
        let line = format!("{} {}", issue.severity.marker(), issue.message);
        match issue.severity {
            Severity::Ok => println!("  {}", style(line).green()),
            Severity::Warn => println!("  {}", style(line).yellow()),
            Severity::Error => println!("  {}", style(line).red()),
        }
    }

    // Windows 下存在未包装条目时给出修复提示
    if platform.is_windows()
        && issues
            .iter()
            .any(|i| i.message.contains("not properly wrapped"))
    {
        println!();
        println!(
            "  {}",
            style("💡 Tip: Run the following command to fix Windows MCP configuration:").yellow()
        );
        println!("     {}", style("ccg fix-mcp").dim());
    }

    println!();
    Ok(())
}

/// `ccg fix-mcp`（仅 Windows 需要）
pub fn run_fix() -> Result<(), AppError> {
    println!();
    println!("  {}", style("🔧 Fixing MCP Configuration").cyan().bold());
    println!();

    let platform = Platform::current();
    if !platform.is_windows() {
        println!(
            "  {}",
            style("⚠️  This command is only needed on Windows").yellow()
        );
        println!();
        return Ok(());
    }

    let Some(config) = read_claude_code_config()? else {
        println!("  {}", style("❌ No ~/.claude.json found").red());
        println!();
        return Ok(());
    };

    if config.has_no_servers() {
        println!("  {}", style("⚠️  No MCP servers configured").yellow());
        println!();
        return Ok(());
    }

    let fixed = fix_windows_mcp_config(&config, platform);
    write_claude_code_config(&fixed)?;

    println!(
        "  {}",
        style("✅ Windows MCP configuration fixed").green()
    );
    println!();
    println!("  {}", style("Run diagnostics again to verify:").dim());
    println!("     {}", style("ccg diagnose-mcp").dim());
    println!();
    Ok(())
}
