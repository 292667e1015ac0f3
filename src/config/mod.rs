pub mod desktop;
pub mod load;
pub mod save;
pub mod types;

pub use desktop::{determine_desktop, resolve_output_dir};
pub use types::{
    Config, FileCategory, FileTypeTable, Language, OutputDefaults, SETTINGS_FILE_NAME, ToolPaths,
    UserSettings,
};
