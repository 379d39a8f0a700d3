use indicatif::{ProgressBar, ProgressStyle};
use std::io::IsTerminal;

/// A styled progress bar, or `None` when stderr is not a terminal
/// (tests, piped output).
pub fn progress_bar(len: u64, msg: String) -> Option<ProgressBar> {
    if !std::io::stderr().is_terminal() {
        return None;
    }

    let bar = ProgressBar::new(len);
    let style = ProgressStyle::default_bar()
        .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos:>3}/{len:3} {msg}")
        .ok()?
        .progress_chars("##-");

    bar.set_style(style);
    bar.set_message(msg);

    Some(bar)
}
