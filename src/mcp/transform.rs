use indexmap::IndexMap;

use crate::claude_mcp::{ClaudeCodeConfig, McpServerConfig};
use crate::platform::{mcp_command, Platform};

/// args/url 中待注入密钥的默认占位符
pub const DEFAULT_API_KEY_PLACEHOLDER: &str = "YOUR_API_KEY";

/// 对单个服务器条目应用平台相关的命令包装。
///
/// 仅处理带 `command` 的条目（sse 条目原样返回）。Windows 上 wrap-list
/// 内的命令被改写为 `cmd`，原命令与原参数依次前插 `/c` 之后。
/// 幂等：已包装条目的命令是 `cmd`，不在 wrap-list 内，不会被二次包装。
pub fn apply_platform_command(mut entry: McpServerConfig, platform: Platform) -> McpServerConfig {
    let Some(original) = entry.command.clone() else {
        return entry;
    };

    let wrapped = mcp_command(&original, platform);
    // 单元素结果意味着无需包装（非 Windows、不在 wrap-list、或已是包装形式）
    if wrapped.len() < 2 {
        return entry;
    }

    let mut args = wrapped[1..].to_vec();
    args.push(original);
    args.extend(entry.args.take().unwrap_or_default());

    entry.command = Some(wrapped[0].clone());
    entry.args = Some(args);
    entry
}

/// 基于模板条目构建最终服务器配置：平台包装 + 密钥注入。
///
/// 注入优先级：条目已有 env 映射且给定变量名时直接写环境变量；
/// 否则替换 args 与 url 中占位符的所有出现。两种方式只生效其一。
pub fn build_mcp_server_config(
    base: &McpServerConfig,
    api_key: Option<&str>,
    placeholder: Option<&str>,
    env_var_name: Option<&str>,
    platform: Platform,
) -> McpServerConfig {
    let placeholder = placeholder.unwrap_or(DEFAULT_API_KEY_PLACEHOLDER);
    let mut config = apply_platform_command(base.clone(), platform);

    let Some(api_key) = api_key else {
        return config;
    };

    // 方式一：直接写入环境变量（优先）
    if let (Some(env), Some(name)) = (config.env.as_mut(), env_var_name) {
        env.insert(name.to_string(), api_key.to_string());
        return config;
    }

    // 方式二：替换 args 中的占位符
    if let Some(args) = config.args.as_mut() {
        for arg in args.iter_mut() {
            *arg = arg.replace(placeholder, api_key);
        }
    }

    // 方式三：替换 url 中的占位符（sse 服务）
    if let Some(url) = config.url.as_mut() {
        *url = url.replace(placeholder, api_key);
    }

    config
}

/// 对整份配置文档应用 Windows 命令包装修复。
///
/// 非 Windows 或无 mcpServers 时返回原样副本；只改写带 `command`
/// 的条目，url-only 条目与所有无关字段保持不变。
pub fn fix_windows_mcp_config(config: &ClaudeCodeConfig, platform: Platform) -> ClaudeCodeConfig {
    let mut fixed = config.clone();
    if !platform.is_windows() {
        return fixed;
    }

    if let Some(servers) = fixed.mcp_servers.as_mut() {
        for entry in servers.values_mut() {
            if entry.command.is_some() {
                *entry = apply_platform_command(entry.clone(), platform);
            }
        }
    }
    fixed
}

/// 将新的服务器条目合并进现有配置文档。
///
/// 同名条目被新值覆盖，未提及的条目与全部非 mcpServers 字段原样保留；
/// `existing` 为 None 时视为空文档。
pub fn merge_mcp_servers(
    existing: Option<ClaudeCodeConfig>,
    new_servers: IndexMap<String, McpServerConfig>,
) -> ClaudeCodeConfig {
    let mut config = existing.unwrap_or_default();
    let servers = config.mcp_servers.get_or_insert_with(IndexMap::new);
    for (name, entry) in new_servers {
        servers.insert(name, entry);
    }
    config
}
