/// Compares two strings word by word, treating any run of spaces as a single space.
///
/// ```
/// use coursework::string::word_eq;
///
/// assert!(word_eq("Hello   world", "Hello world"));
/// assert!(!word_eq("Hello world", "Hello  there"));
/// ```
pub fn word_eq(a: &str, b: &str) -> bool {
    collapse_spaces(a).eq(collapse_spaces(b))
}

fn collapse_spaces(text: &str) -> impl Iterator<Item = char> + '_ {
    let mut previous = None;
    text.chars().filter(move |&c| {
        let repeated_space = c == ' ' && previous == Some(' ');
        previous = Some(c);
        !repeated_space
    })
}
