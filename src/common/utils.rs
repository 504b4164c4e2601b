//! Common utilities and helper functions

/// Splits text into lines on `\n`, tolerating Windows `\r\n` endings.
pub fn split_lines(s: &str) -> Vec<&str> {
    s.split('\n').map(|line| line.trim_end_matches('\r')).collect()
}
