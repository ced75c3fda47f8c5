use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ELLIPSIS: &str = "...";

/// 문자열을 최대 너비에 맞춰 끝을 생략한다.
pub fn truncate_end(text: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width <= ELLIPSIS.width() {
        return take_prefix_by_width(text, max_width);
    }

    let prefix_width = max_width - ELLIPSIS.width();
    format!(
        "{}{}",
        take_prefix_by_width(text, prefix_width).trim_end(),
        ELLIPSIS
    )
}

/// 단어 단위 줄바꿈. 한 단어가 너비보다 길면 글자 단위로 자른다.
pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 {
        return Vec::new();
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let mut word = word.to_string();
        loop {
            let needed = if current.is_empty() {
                word.width()
            } else {
                current.width() + 1 + word.width()
            };
            if needed <= max_width {
                if !current.is_empty() {
                    current.push(' ');
                }
                current.push_str(&word);
                break;
            }
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                continue;
            }
            // 빈 줄에도 안 들어가는 긴 단어
            let head = take_prefix_by_width(&word, max_width);
            if head.is_empty() {
                // 너비 1에 전각 문자 등
                break;
            }
            word = word[head.len()..].to_string();
            lines.push(head);
            if word.is_empty() {
                break;
            }
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

fn take_prefix_by_width(text: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut width = 0;
    for ch in text.chars() {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(1);
        if width + ch_width > max_width {
            break;
        }
        result.push(ch);
        width += ch_width;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_end() {
        assert_eq!(truncate_end("Documents", 20), "Documents");
        assert_eq!(truncate_end("Documents Required", 12), "Documents...");
        assert_eq!(truncate_end("Documents", 2), "Do");
        assert_eq!(truncate_end("anything", 0), "");
    }

    #[test]
    fn test_truncate_width_bound() {
        let value = "가나다라마바사아자차카타파하";
        assert!(truncate_end(value, 12).width() <= 12);
        assert!(truncate_end(value, 3).width() <= 3);
    }

    #[test]
    fn test_wrap_text_words() {
        let lines = wrap_text("Everything you need before you arrive", 16);
        assert_eq!(
            lines,
            vec!["Everything you", "need before you", "arrive"]
        );
        assert!(lines.iter().all(|l| l.width() <= 16));
    }

    #[test]
    fn test_wrap_text_long_word() {
        let lines = wrap_text("abcdefghij xy", 4);
        assert_eq!(lines, vec!["abcd", "efgh", "ij", "xy"]);
    }

    #[test]
    fn test_wrap_text_empty() {
        assert!(wrap_text("", 10).is_empty());
        assert!(wrap_text("text", 0).is_empty());
    }
}
