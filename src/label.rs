/// Decorative prefix shown in front of every tag name.
pub const LABEL_PREFIX: char = '#';

pub fn format_label(name: &str) -> String {
    let mut label = String::with_capacity(name.len() + LABEL_PREFIX.len_utf8());
    label.push(LABEL_PREFIX);
    label.push_str(name);
    label
}

/// Inverse of [`format_label`]; `None` when the prefix is missing.
pub fn strip_label(label: &str) -> Option<&str> {
    label.strip_prefix(LABEL_PREFIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefixes_name() {
        assert_eq!(format_label("react"), "#react");
        assert_eq!(format_label("云原生"), "#云原生");
        assert_eq!(format_label("#already"), "##already");
    }

    #[test]
    fn strip_recovers_name() {
        for name in ["go", "Web开发", "#", " spaced "] {
            assert_eq!(strip_label(&format_label(name)), Some(name));
        }
        assert_eq!(strip_label("plain"), None);
    }
}
