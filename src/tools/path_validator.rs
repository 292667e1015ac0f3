use crate::error::{GifError, GifResult};
use std::fs;
use std::path::{Path, PathBuf};

/// 確認至少有一個輸入，且每個輸入都是存在的檔案或資料夾
pub fn validate_inputs_exist(paths: &[PathBuf]) -> GifResult<()> {
    if paths.is_empty() {
        return Err(GifError::NoInputs);
    }
    if let Some(missing) = paths.iter().find(|p| !(p.is_file() || p.is_dir())) {
        return Err(GifError::InputNotFound(missing.clone()));
    }
    Ok(())
}

pub fn ensure_directory_exists(path: &Path) -> GifResult<()> {
    if !path.exists() {
        fs::create_dir_all(path).map_err(|e| GifError::io(path, e))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_validate_inputs_rejects_empty() {
        assert!(matches!(validate_inputs_exist(&[]), Err(GifError::NoInputs)));
    }

    #[test]
    fn test_validate_inputs_rejects_missing_path() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing.mp4");
        let err = validate_inputs_exist(&[temp_dir.path().to_path_buf(), missing.clone()])
            .unwrap_err();
        assert!(matches!(err, GifError::InputNotFound(p) if p == missing));
    }

    #[test]
    fn test_validate_inputs_accepts_files_and_folders() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("a.png");
        fs::write(&file, b"png").unwrap();
        assert!(validate_inputs_exist(&[temp_dir.path().to_path_buf(), file]).is_ok());
    }

    #[test]
    fn test_ensure_directory_exists_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("a").join("b");
        ensure_directory_exists(&nested).unwrap();
        ensure_directory_exists(&nested).unwrap();
        assert!(nested.is_dir());
    }
}
