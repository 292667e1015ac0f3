mod ffprobe_info;
mod frame_sequence;
mod input_classifier;
mod path_validator;
mod timecode;
mod tool_locator;

pub use ffprobe_info::{FfprobeProbe, MediaProbe, VideoInfo, parse_probe_output};
pub use frame_sequence::FrameSequence;
pub use input_classifier::{ClassifiedInputs, classify_inputs, find_frame_folders};
pub use path_validator::{ensure_directory_exists, validate_inputs_exist};
pub use timecode::{
    TimeRange, Timecode, filename_fragment, normalize_timecode, validate_timecode,
};
pub use tool_locator::{check_required_tools, find_executable};
