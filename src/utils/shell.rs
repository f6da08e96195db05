//! Shell-style quoting for emitted build flags

/// Quote `arg` so a POSIX-style word splitter reads it back as one word.
///
/// Arguments made only of safe characters are returned unchanged.
pub fn quote_arg(arg: &str) -> String {
    if !arg.is_empty() && arg.chars().all(is_safe_char) {
        return arg.to_string();
    }
    format!("'{}'", arg.replace('\'', r"'\''"))
}

fn is_safe_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '=' | '.' | '/' | ':' | ',' | '@' | '+' | '%')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_argument_is_unchanged() {
        assert_eq!(quote_arg("-DDEVICE_ID=abc-123"), "-DDEVICE_ID=abc-123");
    }

    #[test]
    fn test_argument_with_space_is_quoted() {
        assert_eq!(quote_arg("-DWIFI_SSID=My Net"), "'-DWIFI_SSID=My Net'");
    }

    #[test]
    fn test_single_quote_is_escaped() {
        assert_eq!(quote_arg("-DNAME=it's"), r"'-DNAME=it'\''s'");
    }

    #[test]
    fn test_empty_argument() {
        assert_eq!(quote_arg(""), "''");
    }
}
