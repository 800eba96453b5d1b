/// Greedy word wrap on single spaces.
///
/// Text that already fits comes back as one line. Otherwise words are packed
/// onto a line until the next one would overflow; a word that is wider than
/// `max_width` on its own still gets a line to itself. There is no line limit.
pub fn wrap_text<F>(text: &str, max_width: f64, measure: F) -> Vec<String>
where
    F: Fn(&str) -> f64,
{
    if measure(text) <= max_width {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split(' ') {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{} {}", current, word)
        };
        if measure(&candidate) > max_width && !current.is_empty() {
            lines.push(std::mem::replace(&mut current, word.to_string()));
        } else {
            current = candidate;
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    // One unit per character keeps the arithmetic obvious.
    fn chars(s: &str) -> f64 {
        s.chars().count() as f64
    }

    #[test]
    fn short_text_is_untouched() {
        assert_eq!(wrap_text("Teapot", 10.0, chars), vec!["Teapot"]);
    }

    #[test]
    fn packs_words_greedily() {
        let lines = wrap_text("the quick brown fox jumps", 10.0, chars);
        assert_eq!(lines, vec!["the quick", "brown fox", "jumps"]);
    }

    #[test]
    fn overlong_word_gets_its_own_line() {
        let lines = wrap_text("a supercalifragilistic b", 10.0, chars);
        assert_eq!(lines, vec!["a", "supercalifragilistic", "b"]);
    }

    #[test]
    fn single_overlong_word_is_kept_whole() {
        let lines = wrap_text("antidisestablishment", 5.0, chars);
        assert_eq!(lines, vec!["antidisestablishment"]);
    }

    #[test]
    fn marker_is_wrapped_with_the_text() {
        let lines = wrap_text("*** Leonardo da Vinci", 12.0, chars);
        assert_eq!(lines, vec!["*** Leonardo", "da Vinci"]);
    }
}
