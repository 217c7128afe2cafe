//! Output formatting for the CLI.

use console::style;
use shop_cart::notice::{Notice, NoticeKind};

/// Output handler for CLI messages.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
}

impl Output {
    /// Create a new output handler.
    pub fn new(verbose: bool, json: bool) -> Self {
        Self { verbose, json }
    }

    /// Print an info message.
    pub fn info(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("ℹ").blue(), msg);
    }

    /// Print a success message.
    pub fn success(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("✓").green(), msg);
    }

    /// Print a warning message.
    pub fn warn(&self, msg: &str) {
        if self.json {
            return;
        }
        eprintln!("{} {}", style("⚠").yellow(), msg);
    }

    /// Print an error message.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
            return;
        }
        eprintln!("{} {}", style("✗").red(), style(msg).red());
    }

    /// Print a debug message (only in verbose mode).
    pub fn debug(&self, msg: &str) {
        if !self.verbose || self.json {
            return;
        }
        eprintln!("{} {}", style("→").dim(), style(msg).dim());
    }

    /// Print a cart notification with the style of its kind.
    pub fn notice(&self, notice: &Notice) {
        match notice.kind {
            NoticeKind::Success => self.success(&notice.message),
            NoticeKind::Info => self.info(&notice.message),
            NoticeKind::Warning => self.warn(&notice.message),
            NoticeKind::Error => self.error(&notice.message),
        }
    }

    /// Print a header/title.
    pub fn header(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("\n{}", style(msg).bold().underlined());
    }

    /// Print JSON output.
    pub fn json<T: serde::Serialize>(&self, value: &T) {
        if let Ok(json) = serde_json::to_string_pretty(value) {
            println!("{}", json);
        }
    }

    /// Print a key-value pair.
    pub fn kv(&self, key: &str, value: &str) {
        if self.json {
            return;
        }
        println!("  {}: {}", style(key).dim(), value);
    }

    /// Print a list item.
    pub fn list_item(&self, item: &str) {
        if self.json {
            return;
        }
        println!("  {} {}", style("•").dim(), item);
    }

    /// Print a table row.
    pub fn table_row(&self, cols: &[&str], widths: &[usize]) {
        if self.json {
            return;
        }
        println!("  {}", format_row(cols, widths));
    }

    /// Print plain text as-is.
    pub fn plain(&self, text: &str) {
        if self.json {
            return;
        }
        println!("{}", text);
    }

    /// Check if JSON mode is enabled.
    pub fn is_json(&self) -> bool {
        self.json
    }
}

/// Pad columns to widths. Widths count characters, not bytes, so Myanmar
/// text lines up as well as ASCII does.
pub fn format_row(cols: &[&str], widths: &[usize]) -> String {
    let formatted: Vec<String> = cols
        .iter()
        .zip(widths.iter())
        .map(|(col, width)| {
            let len = col.chars().count();
            format!("{}{}", col, " ".repeat(width.saturating_sub(len)))
        })
        .collect();
    formatted.join("  ").trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_row_pads_by_chars() {
        assert_eq!(format_row(&["id", "name", "qty"], &[4, 6, 3]), "id    name    qty");
        assert_eq!(format_row(&["1", "ဘဲ"], &[2, 4]), "1   ဘဲ");
    }
}
