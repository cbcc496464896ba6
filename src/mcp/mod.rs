pub mod diagnose;
pub mod presets;
pub mod transform;
pub mod validation;

pub use diagnose::{diagnose_document, diagnose_mcp_config, Diagnostic, Severity};
pub use transform::{
    apply_platform_command, build_mcp_server_config, fix_windows_mcp_config, merge_mcp_servers,
    DEFAULT_API_KEY_PLACEHOLDER,
};
pub use validation::validate_server_entry;
