use crate::config::FileTypeTable;
use crate::error::{GifError, GifResult};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 依序號排列的影格檔案列表
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameSequence {
    frames: Vec<PathBuf>,
}

impl FrameSequence {
    /// 保留呼叫者給定的順序
    #[must_use]
    pub const fn from_files(frames: Vec<PathBuf>) -> Self {
        Self { frames }
    }

    /// 列出資料夾（不含子資料夾）中的圖片，依檔名結尾的序號排序
    pub fn from_directory(directory: &Path, file_type_table: &FileTypeTable) -> GifResult<Self> {
        let mut frames = Vec::new();
        for entry in WalkDir::new(directory).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|e| {
                let source = e.into_io_error().unwrap_or_else(|| {
                    std::io::Error::other("無法讀取資料夾內容")
                });
                GifError::io(directory, source)
            })?;
            if entry.file_type().is_file() && file_type_table.is_image_file(entry.path()) {
                frames.push(entry.into_path());
            }
        }

        frames.sort_by_cached_key(|path| sequence_key(path));
        Ok(Self { frames })
    }

    #[must_use]
    pub fn frames(&self) -> &[PathBuf] {
        &self.frames
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

/// 排序鍵：檔名主體結尾的數字，其次是完整檔名
fn sequence_key(path: &Path) -> (Option<u64>, String) {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();

    let digits: String = stem
        .chars()
        .rev()
        .take_while(char::is_ascii_digit)
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();

    (digits.parse::<u64>().ok(), name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn table() -> FileTypeTable {
        FileTypeTable {
            image_file: vec![".png".to_string()],
            video_file: vec![],
            subtitle_file: vec![],
        }
    }

    #[test]
    fn test_sequence_key() {
        assert_eq!(
            sequence_key(Path::new("/tmp/frame_0012.png")),
            (Some(12), "frame_0012.png".to_string())
        );
        assert_eq!(
            sequence_key(Path::new("cover.png")),
            (None, "cover.png".to_string())
        );
    }

    #[test]
    fn test_from_directory_orders_numerically() {
        let temp_dir = TempDir::new().unwrap();
        for name in ["frame_10.png", "frame_2.png", "frame_1.png", "readme.txt"] {
            fs::write(temp_dir.path().join(name), b"x").unwrap();
        }
        fs::create_dir(temp_dir.path().join("nested.png")).unwrap();

        let sequence = FrameSequence::from_directory(temp_dir.path(), &table()).unwrap();
        let names: Vec<_> = sequence
            .frames()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["frame_1.png", "frame_2.png", "frame_10.png"]);
    }

    #[test]
    fn test_from_directory_padded_names() {
        let temp_dir = TempDir::new().unwrap();
        for i in (1..=12).rev() {
            fs::write(temp_dir.path().join(format!("frame_{i:04}.png")), b"x").unwrap();
        }

        let sequence = FrameSequence::from_directory(temp_dir.path(), &table()).unwrap();
        assert_eq!(sequence.len(), 12);
        assert!(sequence.frames()[0].ends_with("frame_0001.png"));
        assert!(sequence.frames()[11].ends_with("frame_0012.png"));
    }

    #[test]
    fn test_from_directory_empty() {
        let temp_dir = TempDir::new().unwrap();
        let sequence = FrameSequence::from_directory(temp_dir.path(), &table()).unwrap();
        assert!(sequence.is_empty());
    }

    #[test]
    fn test_from_directory_missing_folder() {
        let temp_dir = TempDir::new().unwrap();
        let result = FrameSequence::from_directory(&temp_dir.path().join("gone"), &table());
        assert!(matches!(result, Err(GifError::Io { .. })));
    }

    #[test]
    fn test_from_files_keeps_order() {
        let files = vec![PathBuf::from("b.png"), PathBuf::from("a.png")];
        let sequence = FrameSequence::from_files(files.clone());
        assert_eq!(sequence.frames(), files.as_slice());
    }
}
