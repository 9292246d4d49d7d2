//! Formatting utilities for file sizes and transfer progress.

const UNITS: [&str; 7] = ["B", "KB", "MB", "GB", "TB", "PB", "EB"];

/// Format a byte count with binary units and two decimals (e.g. "1.50 KB").
pub fn render_size(bytes: u64) -> String {
    if bytes < 1024 {
        return format!("{} B", bytes);
    }
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{:.2} {}", value, UNITS[unit])
}

/// Format transfer progress as "done / total".
pub fn render_progress(done: u64, total: u64) -> String {
    format!("{} / {}", render_size(done), render_size(total))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_size() {
        assert_eq!(render_size(0), "0 B");
        assert_eq!(render_size(1023), "1023 B");
        assert_eq!(render_size(1024), "1.00 KB");
        assert_eq!(render_size(1536), "1.50 KB");
        assert_eq!(render_size(5 * 1024 * 1024), "5.00 MB");
        assert_eq!(render_size(3 * 1024 * 1024 * 1024), "3.00 GB");
        assert_eq!(render_size(u64::MAX), "16.00 EB");
    }

    #[test]
    fn test_render_progress() {
        assert_eq!(render_progress(512, 2048), "512 B / 2.00 KB");
    }
}
