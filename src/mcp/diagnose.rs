use crate::claude_mcp::{read_claude_code_config, ClaudeCodeConfig};
use crate::config::get_claude_code_config_path;
use crate::platform::Platform;

/// 诊断结论等级，仅用于展示（标记与着色）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Ok,
    Warn,
    Error,
}

impl Severity {
    pub fn marker(self) -> &'static str {
        match self {
            Severity::Ok => "✅",
            Severity::Warn => "⚠️ ",
            Severity::Error => "❌",
        }
    }
}

/// 单条诊断结论
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
}

impl Diagnostic {
    fn ok(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Ok,
            message: message.into(),
        }
    }

    fn warn(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warn,
            message: message.into(),
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }
}

/// 诊断命令检查的命令集，故意比 wrap-list 窄
pub const CHECK_COMMANDS: &[&str] = &["npx", "uvx", "node"];

/// 诊断 ~/.claude.json 的 MCP 配置问题，按固定顺序给出结论
pub fn diagnose_mcp_config(platform: Platform) -> Vec<Diagnostic> {
    if !get_claude_code_config_path().exists() {
        return vec![Diagnostic::error("~/.claude.json does not exist")];
    }

    let config = match read_claude_code_config() {
        Ok(Some(config)) => config,
        Ok(None) => return vec![Diagnostic::error("~/.claude.json does not exist")],
        Err(err) => {
            log::debug!("diagnose: {err}");
            return vec![Diagnostic::error("Failed to parse ~/.claude.json")];
        }
    };

    diagnose_document(&config, platform)
}

/// 对已解析的文档做检查（纯函数，便于测试）
pub fn diagnose_document(config: &ClaudeCodeConfig, platform: Platform) -> Vec<Diagnostic> {
    let mut issues = Vec::new();

    if config.has_no_servers() {
        issues.push(Diagnostic::warn("No MCP servers configured"));
        return issues;
    }

    if platform.is_windows() {
        if let Some(servers) = config.mcp_servers.as_ref() {
            for (name, server) in servers {
                let Some(command) = server.command.as_deref() else {
                    continue;
                };
                if CHECK_COMMANDS.contains(&command) && command != "cmd" {
                    issues.push(Diagnostic::error(format!(
                        "{name}: Command not properly wrapped for Windows (should use cmd /c)"
                    )));
                }
            }
        }
    }

    if issues.is_empty() {
        issues.push(Diagnostic::ok("MCP configuration looks good"));
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(value: serde_json::Value) -> ClaudeCodeConfig {
        serde_json::from_value(value).expect("parse document")
    }

    #[test]
    fn missing_server_map_yields_single_warning() {
        let issues = diagnose_document(&doc(json!({ "theme": "dark" })), Platform::Windows);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Warn);
        assert!(issues[0].message.contains("No MCP servers"));
    }

    #[test]
    fn empty_server_map_yields_single_warning() {
        let issues = diagnose_document(&doc(json!({ "mcpServers": {} })), Platform::Linux);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Warn);
    }

    #[test]
    fn unwrapped_commands_flagged_on_windows_only() {
        let document = doc(json!({
            "mcpServers": {
                "files": { "command": "npx" },
                "py": { "command": "uvx" },
                "remote": { "type": "sse", "url": "https://mcp.example.com" }
            }
        }));

        let issues = diagnose_document(&document, Platform::Windows);
        assert_eq!(issues.len(), 2);
        assert!(issues.iter().all(|i| i.severity == Severity::Error));
        assert!(issues[0].message.starts_with("files:"));
        assert!(issues[1].message.starts_with("py:"));

        let issues = diagnose_document(&document, Platform::MacOs);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Ok);
    }

    #[test]
    fn wrap_list_commands_outside_check_list_pass_diagnosis() {
        // npm/pnpm/yarn 可被修复包装，但诊断有意只检查 npx/uvx/node
        let document = doc(json!({
            "mcpServers": { "build": { "command": "npm" } }
        }));
        let issues = diagnose_document(&document, Platform::Windows);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Ok);
    }

    #[test]
    fn wrapped_config_looks_good() {
        let document = doc(json!({
            "mcpServers": {
                "files": { "command": "cmd", "args": ["/c", "npx", "-y", "files-mcp"] }
            }
        }));
        let issues = diagnose_document(&document, Platform::Windows);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Ok);
    }
}
