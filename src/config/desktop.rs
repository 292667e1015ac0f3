use crate::config::types::UserSettings;
use std::env;
use std::path::{Path, PathBuf};

/// 取得目前使用者的桌面資料夾
///
/// Windows 使用 `%USERPROFILE%\Desktop`，其他系統使用 `~/Desktop`
#[must_use]
pub fn determine_desktop() -> PathBuf {
    let home_var = if cfg!(windows) { "USERPROFILE" } else { "HOME" };
    let home = env::var_os(home_var)
        .or_else(|| env::var_os("HOME"))
        .map_or_else(|| PathBuf::from("."), PathBuf::from);
    desktop_under(&home)
}

fn desktop_under(home: &Path) -> PathBuf {
    home.join("Desktop")
}

/// 設定檔指定的輸出目錄優先，否則使用桌面
#[must_use]
pub fn resolve_output_dir(settings: &UserSettings) -> PathBuf {
    settings
        .output_dir
        .clone()
        .unwrap_or_else(determine_desktop)
}
