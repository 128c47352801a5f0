use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub fn truncate_unicode(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let mut result = String::new();
    let mut width = 0;
    for ch in s.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width > max_width.saturating_sub(1) {
            result.push('\u{2026}');
            break;
        }
        result.push(ch);
        width += ch_width;
    }
    result
}

/// Formats a percentage the way it is reported: whole numbers without a
/// fractional part, everything else with up to two decimals.
pub fn format_percent(value: f64) -> String {
    if value.fract() == 0.0 {
        return format!("{value:.0}");
    }
    let fixed = format!("{value:.2}");
    fixed.trim_end_matches('0').trim_end_matches('.').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_percent_has_no_fraction() {
        assert_eq!(format_percent(35.0), "35");
        assert_eq!(format_percent(0.0), "0");
        assert_eq!(format_percent(-30.0), "-30");
    }

    #[test]
    fn fractional_percent_is_trimmed() {
        assert_eq!(format_percent(64.5), "64.5");
        assert_eq!(format_percent(12.346), "12.35");
        assert_eq!(format_percent(99.999), "100");
    }

    #[test]
    fn truncate_adds_ellipsis() {
        assert_eq!(truncate_unicode("Networking", 20), "Networking");
        assert_eq!(truncate_unicode("Networking", 5), "Netw\u{2026}");
    }
}
