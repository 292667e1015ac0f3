use crate::config::ToolPaths;
use crate::error::{GifError, GifResult};
use log::debug;
use std::env;
use std::path::{Path, PathBuf};

/// 啟動時確認 ffmpeg / ffprobe / gifski 都能找到
pub fn check_required_tools(tools: &ToolPaths) -> GifResult<()> {
    for program in [&tools.ffmpeg, &tools.ffprobe, &tools.gifski] {
        match find_executable(program) {
            Some(found) => debug!("找到外部工具: {}", found.display()),
            None => return Err(GifError::ToolNotFound(program.display().to_string())),
        }
    }
    Ok(())
}

/// 尋找外部工具的執行檔
///
/// 含路徑的設定值直接檢查檔案是否存在；單純的名稱則從 `PATH` 搜尋
#[must_use]
pub fn find_executable(program: &Path) -> Option<PathBuf> {
    if program.components().count() > 1 || program.is_absolute() {
        return program.is_file().then(|| program.to_path_buf());
    }

    let path_var = env::var_os("PATH")?;
    find_in_dirs(program, env::split_paths(&path_var), &executable_extensions())
}

fn executable_extensions() -> Vec<String> {
    if cfg!(windows) {
        env::var("PATHEXT")
            .unwrap_or_else(|_| ".COM;.EXE;.BAT;.CMD".to_string())
            .split(';')
            .filter(|ext| !ext.is_empty())
            .map(str::to_string)
            .collect()
    } else {
        Vec::new()
    }
}

fn find_in_dirs(
    program: &Path,
    dirs: impl IntoIterator<Item = PathBuf>,
    extensions: &[String],
) -> Option<PathBuf> {
    dirs.into_iter().find_map(|dir| {
        let candidate = dir.join(program);
        if candidate.is_file() {
            return Some(candidate);
        }
        if program.extension().is_some() {
            return None;
        }
        extensions.iter().find_map(|ext| {
            let mut name = program.as_os_str().to_owned();
            name.push(ext);
            let candidate = dir.join(name);
            candidate.is_file().then_some(candidate)
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_find_in_dirs_finds_first_match() {
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        fs::write(second.path().join("gifski"), b"").unwrap();

        let found = find_in_dirs(
            Path::new("gifski"),
            vec![first.path().to_path_buf(), second.path().to_path_buf()],
            &[],
        );
        assert_eq!(found, Some(second.path().join("gifski")));
    }

    #[test]
    fn test_find_in_dirs_tries_extensions() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("ffmpeg.EXE"), b"").unwrap();

        let found = find_in_dirs(
            Path::new("ffmpeg"),
            vec![dir.path().to_path_buf()],
            &[".COM".to_string(), ".EXE".to_string()],
        );
        assert_eq!(found, Some(dir.path().join("ffmpeg.EXE")));
    }

    #[test]
    fn test_find_executable_with_explicit_path() {
        let dir = TempDir::new().unwrap();
        let tool = dir.path().join("ffprobe");
        fs::write(&tool, b"").unwrap();

        assert_eq!(find_executable(&tool), Some(tool.clone()));
        assert_eq!(find_executable(&dir.path().join("missing")), None);
    }

    #[test]
    fn test_check_required_tools_reports_missing() {
        let dir = TempDir::new().unwrap();
        let ffmpeg = dir.path().join("ffmpeg");
        let ffprobe = dir.path().join("ffprobe");
        fs::write(&ffmpeg, b"").unwrap();
        fs::write(&ffprobe, b"").unwrap();

        let tools = ToolPaths {
            ffmpeg,
            ffprobe,
            gifski: dir.path().join("gifski"),
        };
        match check_required_tools(&tools) {
            Err(GifError::ToolNotFound(name)) => assert!(name.ends_with("gifski")),
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
