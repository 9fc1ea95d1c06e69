pub mod services;
pub mod types;

/// Folder under `custom/` that receives the generated translations.
/// The `aaaaaaaaaa_loadfirst` prefix makes the game mount it ahead of other custom content.
pub const OUTPUT_DIR_NAME: &str = "aaaaaaaaaa_loadfirst_tf2_bot_detector";

/// Folder name used by older releases. Removed before every run and never read back.
pub const LEGACY_OUTPUT_DIR_NAME: &str = "tf2_bot_detector";
