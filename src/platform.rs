/// 运行平台分类
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    MacOs,
    Linux,
    Other,
}

impl Platform {
    /// 当前进程所在平台
    pub fn current() -> Self {
        Self::from_os(std::env::consts::OS)
    }

    /// 按操作系统标识分类（可注入，便于测试）
    pub fn from_os(os: &str) -> Self {
        match os {
            "windows" => Platform::Windows,
            "macos" => Platform::MacOs,
            "linux" => Platform::Linux,
            _ => Platform::Other,
        }
    }

    pub fn is_windows(self) -> bool {
        self == Platform::Windows
    }

    pub fn name(self) -> &'static str {
        match self {
            Platform::Windows => "Windows",
            Platform::MacOs => "macOS",
            Platform::Linux => "Linux",
            Platform::Other => "other",
        }
    }
}

/// Windows 上需要经 cmd /c 包装启动的命令
pub const WRAP_COMMANDS: &[&str] = &["npx", "uvx", "node", "npm", "pnpm", "yarn"];

/// 返回平台相关的 MCP 启动命令形式。
///
/// Windows 上对 wrap-list 内的命令返回 `["cmd", "/c", <command>]`，
/// 其余情况原样返回 `[<command>]`。
pub fn mcp_command(command: &str, platform: Platform) -> Vec<String> {
    if platform.is_windows() && WRAP_COMMANDS.contains(&command) {
        return vec!["cmd".to_string(), "/c".to_string(), command.to_string()];
    }
    vec![command.to_string()]
}
