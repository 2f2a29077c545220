/// Cuts `value` to at most `max_bytes` without splitting a UTF-8 sequence,
/// marking the cut with an ellipsis.
pub fn truncate_utf8_prefix(value: &str, max_bytes: usize) -> String {
    if value.len() <= max_bytes {
        return value.to_string();
    }
    let mut end = max_bytes;
    while end > 0 && !value.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}…", &value[..end])
}

#[cfg(test)]
mod tests {
    use super::truncate_utf8_prefix;

    #[test]
    fn short_values_pass_through() {
        assert_eq!(truncate_utf8_prefix("unauthorized", 64), "unauthorized");
    }

    #[test]
    fn long_values_are_marked() {
        assert_eq!(truncate_utf8_prefix("hello world", 5), "hello…");
    }

    #[test]
    fn cut_backs_off_to_char_boundary() {
        assert_eq!(truncate_utf8_prefix("añb", 2), "a…");
    }
}
