use crate::claude_mcp::McpServerConfig;
use crate::error::AppError;

/// 合并前的基本校验：type 为 stdio/sse 或缺省（按 stdio 处理），
/// 对应变体的必填字段存在且非空。
pub fn validate_server_entry(name: &str, entry: &McpServerConfig) -> Result<(), AppError> {
    let is_stdio = entry.server_type.as_deref().map_or(true, |t| t == "stdio");
    let is_sse = entry.server_type.as_deref() == Some("sse");

    if !(is_stdio || is_sse) {
        return Err(AppError::McpValidation(format!(
            "MCP 服务器 '{name}' 的 type 必须是 'stdio' 或 'sse'（或省略表示 stdio）"
        )));
    }

    if is_stdio {
        let cmd = entry.command.as_deref().unwrap_or("");
        if cmd.trim().is_empty() {
            return Err(AppError::McpValidation(format!(
                "stdio 类型的 MCP 服务器 '{name}' 缺少 command 字段"
            )));
        }
    }

    if is_sse {
        let url = entry.url.as_deref().unwrap_or("");
        if url.trim().is_empty() {
            return Err(AppError::McpValidation(format!(
                "sse 类型的 MCP 服务器 '{name}' 缺少 url 字段"
            )));
        }
    }

    Ok(())
}
