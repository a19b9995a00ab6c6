//! Report formatting utilities for terminal output

/// Width of the separator lines around reports
pub const LINE_WIDTH: usize = 60;

/// Width of the category label column in the breakdown chart
pub const LABEL_WIDTH: usize = 15;

/// Format a percentage with two decimals
pub fn format_percentage(pct: f64) -> String {
    format!("{:.2}%", pct)
}

/// Draw a bar of `glyph` repeated once per full `step` percent
///
/// Negative or non-finite percentages and non-positive steps draw nothing.
pub fn format_bar(percentage: f64, step: f64, glyph: &str) -> String {
    if !percentage.is_finite() || percentage <= 0.0 || step <= 0.0 {
        return String::new();
    }
    glyph.repeat((percentage / step).floor() as usize)
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "-".repeat(width)
}

/// Left-align text in a field of given width
pub fn left_align(s: &str, width: usize) -> String {
    if s.chars().count() >= width {
        s.to_string()
    } else {
        format!("{:<width$}", s, width = width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(100.0), "100.00%");
        assert_eq!(format_percentage(33.333), "33.33%");
        assert_eq!(format_percentage(0.0), "0.00%");
    }

    #[test]
    fn test_format_bar_floors() {
        assert_eq!(format_bar(100.0, 5.0, "#"), "#".repeat(20));
        assert_eq!(format_bar(9.99, 5.0, "#"), "#");
        assert_eq!(format_bar(4.99, 5.0, "#"), "");
        assert_eq!(format_bar(0.0, 5.0, "#"), "");
        assert_eq!(format_bar(50.0, 0.0, "#"), "");
    }

    #[test]
    fn test_alignment() {
        assert_eq!(left_align("FOOD:", 8), "FOOD:   ");
        assert_eq!(left_align("ENTERTAINMENT:", 5), "ENTERTAINMENT:");
    }
}
