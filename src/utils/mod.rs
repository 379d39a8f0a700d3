pub mod progress_utils;
pub mod render_utils;
pub mod test_utils;
