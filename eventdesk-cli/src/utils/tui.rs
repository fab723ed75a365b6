use indicatif::{ProgressBar, ProgressStyle};

/// Spinner shown while waiting on the store. Clear it before printing.
pub fn create_spinner(message: &str) -> ProgressBar {
    let style = ProgressStyle::with_template("{msg} {spinner}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_strings(&["-", "\\", "|", "/"]);

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(style);
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(std::time::Duration::from_millis(80));
    spinner
}
