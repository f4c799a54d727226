//! 正文段落切分
//!
//! 正文按换行切分为段落，每行一个段落（包括空行），保持原顺序

/// 将正文切分为段落
pub fn split_paragraphs(text: &str) -> Vec<&str> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_paragraphs() {
        assert_eq!(split_paragraphs("Hello"), vec!["Hello"]);
        assert_eq!(
            split_paragraphs("First line.\nSecond line.\n\nFourth."),
            vec!["First line.", "Second line.", "", "Fourth."]
        );
    }

    #[test]
    fn test_split_paragraphs_handles_crlf() {
        assert_eq!(split_paragraphs("a\r\nb"), vec!["a", "b"]);
    }

    #[test]
    fn test_split_empty_text() {
        assert_eq!(split_paragraphs(""), vec![""]);
    }
}
