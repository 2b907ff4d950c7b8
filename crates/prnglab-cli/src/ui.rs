//! UI helpers for CLI display.

use console::style;

/// Check if color output is disabled via `NO_COLOR` env var.
#[must_use]
pub fn is_color_disabled() -> bool {
    std::env::var("NO_COLOR").is_ok()
}

/// Print a styled header.
pub fn print_header(text: &str) {
    if is_color_disabled() {
        println!("=== {text} ===");
    } else {
        println!("{}", style(format!("=== {text} ===")).bold().magenta());
    }
}

/// Print an indented `label: value` line.
pub fn print_field(label: &str, value: &str) {
    if is_color_disabled() {
        println!("  {label}: {value}");
    } else {
        println!("  {} {value}", style(format!("{label}:")).bold());
    }
}

/// Print an error message.
pub fn print_error(text: &str) {
    if is_color_disabled() {
        eprintln!("[ERROR] {text}");
    } else {
        eprintln!("{} {text}", style("[ERROR]").red().bold());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_check_does_not_panic() {
        let _ = is_color_disabled();
    }

    #[test]
    fn print_header_does_not_panic() {
        print_header("Middle square");
        print_header("");
    }

    #[test]
    fn print_field_does_not_panic() {
        print_field("Normalizer", "10000");
        print_field("Recurrence", "x_{i+1} = (a * x_i + c) mod m");
    }

    #[test]
    fn print_error_does_not_panic() {
        print_error("invalid seed: seed must have at least 4 digits");
        print_error("");
    }
}
