//! Console output utilities.

use console::style;

/// Print an info message.
pub fn print_info(message: &str) {
    println!("{} {}", style("INFO").cyan().bold(), message);
}

/// Print a success message.
pub fn print_success(message: &str) {
    println!("{} {}", style("OK").green().bold(), message);
}

/// Print a warning message.
pub fn print_warning(message: &str) {
    println!("{} {}", style("WARN").yellow().bold(), message);
}

/// Print an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("ERROR").red().bold(), message);
}

/// Print the application banner.
pub fn print_banner() {
    let banner = r#"
╔═══════════════════════════════════════════════════════╗
║     Coub Downloader                                   ║
║     Archive your liked coubs locally                  ║
╚═══════════════════════════════════════════════════════╝
"#;
    println!("{}", style(banner).cyan());
}

/// Print configuration summary.
pub fn print_config_summary(config_path: &str, limit: usize, download_dir: &str) {
    println!();
    println!("{}", style("Configuration:").bold());
    println!("  Settings:  {}", config_path);
    if limit == 0 {
        println!("  Limit:     none");
    } else {
        println!("  Limit:     {}", limit);
    }
    println!("  Directory: {}", download_dir);
    println!();
}
