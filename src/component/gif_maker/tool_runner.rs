use crate::error::{GifError, GifResult};
use log::debug;
use std::process::{Command, Stdio};

/// 同步執行外部工具，非零結束碼視為失敗並附上 stderr
pub(crate) fn run_tool(tool: &str, mut cmd: Command) -> GifResult<()> {
    debug!("執行 {tool}: {cmd:?}");

    let output = cmd
        .stdin(Stdio::null())
        .output()
        .map_err(|source| GifError::ToolLaunch {
            tool: tool.to_string(),
            source,
        })?;

    let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();

    if !output.status.success() {
        return Err(GifError::ToolInvocationFailure {
            tool: tool.to_string(),
            status: output.status.to_string(),
            stderr,
        });
    }

    if !stderr.is_empty() {
        debug!("{tool} 輸出: {stderr}");
    }

    Ok(())
}
