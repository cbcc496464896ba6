use console::{style, Term};
use indexmap::IndexMap;

use super::prompt;
use crate::claude_mcp::{
    backup_claude_code_config, read_claude_code_config, write_claude_code_config,
};
use crate::error::AppError;
use crate::mcp::presets::{ace_tool_template, ACE_TOOL_SERVER_NAME, ACE_TOOL_TOKEN_ENV};
use crate::mcp::{build_mcp_server_config, merge_mcp_servers, validate_server_entry};
use crate::platform::Platform;

/// `ccg config mcp`：配置 ace-tool MCP Token
pub fn run(token: Option<String>) -> Result<(), AppError> {
    let term = Term::stdout();
    println!();
    println!("  {}", style("🔑 配置 ace-tool MCP Token").cyan().bold());
    println!();

    let token = match token.filter(|t| !t.trim().is_empty()) {
        Some(t) => t,
        None => match std::env::var(ACE_TOOL_TOKEN_ENV)
            .ok()
            .filter(|t| !t.trim().is_empty())
        {
            Some(t) => t,
            None => {
                let raw = prompt(&term, "请输入 ace-tool Token")?;
                if raw.is_empty() {
                    return Err(AppError::InvalidInput("未提供 ace-tool Token".into()));
                }
                raw
            }
        },
    };

    let platform = Platform::current();
    let entry = build_mcp_server_config(
        &ace_tool_template(),
        Some(&token),
        None,
        Some(ACE_TOOL_TOKEN_ENV),
        platform,
    );
    validate_server_entry(ACE_TOOL_SERVER_NAME, &entry)?;

    if let Some(path) = backup_claude_code_config()? {
        println!(
            "  {}",
            style(format!("已备份现有配置: {}", path.display())).dim()
        );
    }

    let mut servers = IndexMap::new();
    servers.insert(ACE_TOOL_SERVER_NAME.to_string(), entry);
    let merged = merge_mcp_servers(read_claude_code_config()?, servers);
    write_claude_code_config(&merged)?;

    println!("  {}", style("✅ ace-tool MCP 服务器已配置").green());
    println!();
    Ok(())
}
