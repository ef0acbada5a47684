//! HTML helper functions

/// Escape HTML special characters
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Build a `tel:` href from a display phone number
///
/// # Examples
/// ```ignore
/// tel_href("07 123 4567") // -> "tel:071234567"
/// ```
pub fn tel_href(phone: &str) -> String {
    let compact: String = phone.chars().filter(|c| !c.is_whitespace()).collect();
    format!("tel:{}", compact)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_escape() {
        assert_eq!(
            html_escape(r#"<script>alert("x") & 'y'</script>"#),
            "&lt;script&gt;alert(&quot;x&quot;) &amp; &#39;y&#39;&lt;/script&gt;"
        );
    }

    #[test]
    fn test_html_escape_plain_text_unchanged() {
        assert_eq!(html_escape("甲水電行 4.8"), "甲水電行 4.8");
    }

    #[test]
    fn test_tel_href() {
        assert_eq!(tel_href("07 123 4567"), "tel:071234567");
        assert_eq!(tel_href("0900-000-000"), "tel:0900-000-000");
    }
}
