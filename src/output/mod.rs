//! Output module for console output and progress.
//!
//! Provides:
//! - Colored console output
//! - Progress reporting
//! - Statistics reporting
//! - The static HTML index page
//! - Opening pages in the default browser

pub mod browser;
pub mod console;
pub mod index;
pub mod progress;
pub mod stats;

pub use browser::{open_file_in_browser, open_in_browser};
pub use console::{
    print_banner, print_config_summary, print_error, print_info, print_success, print_warning,
};
pub use index::{render_index, write_index};
pub use progress::ProgressReporter;
pub use stats::{format_bytes, print_download_stats};
