pub mod file_utils;
pub mod wide_text;

#[cfg(test)]
#[path = "tests/file_utils_tests.rs"]
mod file_utils_tests;

#[cfg(test)]
#[path = "tests/wide_text_tests.rs"]
mod wide_text_tests;
