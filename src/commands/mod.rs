pub mod config_mcp;
pub mod diagnose;
pub mod init;
pub mod menu;

use console::Term;

use crate::error::AppError;

/// 读取一行交互输入（去除首尾空白）
pub(crate) fn prompt(term: &Term, question: &str) -> Result<String, AppError> {
    term.write_str(&format!("  {question}: "))
        .map_err(|e| AppError::IoContext {
            context: "写入终端失败".into(),
            source: e,
        })?;
    let line = term.read_line().map_err(|e| AppError::IoContext {
        context: "读取交互输入失败".into(),
        source: e,
    })?;
    Ok(line.trim().to_string())
}

/// 读取一行交互输入，空输入返回默认值
pub(crate) fn prompt_or(term: &Term, question: &str, default: &str) -> Result<String, AppError> {
    let answer = prompt(term, &format!("{question} [{default}]"))?;
    Ok(if answer.is_empty() {
        default.to_string()
    } else {
        answer
    })
}
