pub mod claude_mcp;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod mcp;
pub mod platform;
pub mod settings;

pub use claude_mcp::{
    backup_claude_code_config, read_claude_code_config, write_claude_code_config, ClaudeCodeConfig,
    McpServerConfig,
};
pub use cli::{Cli, Commands, ConfigCommand};
pub use config::{
    get_backup_dir, get_ccg_config_path, get_claude_code_config_path, get_claude_config_dir,
};
pub use error::AppError;
pub use mcp::{
    apply_platform_command, build_mcp_server_config, diagnose_document, diagnose_mcp_config,
    fix_windows_mcp_config, merge_mcp_servers, validate_server_entry, Diagnostic, Severity,
};
pub use platform::{mcp_command, Platform};
pub use settings::{
    get_settings, reload_settings, update_settings, CcgSettings, CollaborationMode, ModelKind,
};
