pub mod api_utils;
pub mod clipboard;
pub mod icons;
pub mod list_utils;
pub mod shuffle;
