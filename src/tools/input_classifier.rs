use crate::config::{FileCategory, FileTypeTable};
use log::debug;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 依類型分組後的輸入
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassifiedInputs {
    /// 直接提供的資料夾
    pub directories: Vec<PathBuf>,
    /// 資料夾內（含子資料夾）至少有一張圖片的資料夾
    pub frame_folders: Vec<PathBuf>,
    pub images: Vec<PathBuf>,
    pub videos: Vec<PathBuf>,
    pub subtitles: Vec<PathBuf>,
}

impl ClassifiedInputs {
    /// 剛好一部影片與一個字幕時自動配對，其他組合一律不配對
    #[must_use]
    pub fn paired_subtitle(&self) -> Option<&Path> {
        match (self.videos.as_slice(), self.subtitles.as_slice()) {
            ([_], [subtitle]) => Some(subtitle.as_path()),
            _ => None,
        }
    }

    /// 沒有任何可處理的項目
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frame_folders.is_empty() && self.images.is_empty() && self.videos.is_empty()
    }
}

/// 將輸入路徑分類為影格資料夾、圖片、影片與字幕
///
/// 輸入需事先確認存在；未知副檔名的檔案會被忽略
#[must_use]
pub fn classify_inputs(paths: &[PathBuf], file_type_table: &FileTypeTable) -> ClassifiedInputs {
    let mut inputs = ClassifiedInputs::default();

    for path in paths {
        if path.is_dir() {
            inputs.directories.push(path.clone());
            continue;
        }

        match file_type_table.categorize_file(path) {
            Some(FileCategory::Image) => inputs.images.push(path.clone()),
            Some(FileCategory::Video) => inputs.videos.push(path.clone()),
            Some(FileCategory::Subtitle) => inputs.subtitles.push(path.clone()),
            None => debug!("忽略不支援的檔案: {}", path.display()),
        }
    }

    inputs.frame_folders = find_frame_folders(&inputs.directories, file_type_table);
    inputs
}

/// 遞迴掃描資料夾，回傳直接包含圖片的資料夾
#[must_use]
pub fn find_frame_folders(directories: &[PathBuf], file_type_table: &FileTypeTable) -> Vec<PathBuf> {
    let mut seen = HashSet::new();

    directories
        .iter()
        .flat_map(|directory| {
            WalkDir::new(directory)
                .follow_links(false)
                .sort_by_file_name()
                .into_iter()
                .filter_map(std::result::Result::ok)
                .filter(|entry| entry.file_type().is_dir())
                .map(walkdir::DirEntry::into_path)
        })
        .filter(|folder| contains_image(folder, file_type_table))
        .filter(|folder| seen.insert(folder.clone()))
        .collect()
}

fn contains_image(folder: &Path, file_type_table: &FileTypeTable) -> bool {
    WalkDir::new(folder)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(std::result::Result::ok)
        .any(|entry| entry.file_type().is_file() && file_type_table.is_image_file(entry.path()))
}
