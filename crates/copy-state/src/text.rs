//! Text formatting for copy feedback.

/// Title-case every word in `input`.
///
/// A word is a maximal run of ASCII letters and digits. Its first character is
/// uppercased and the rest lowercased. Everything else (whitespace, `-`, `_`,
/// punctuation, non-ASCII) is copied through unchanged and ends the current word.
///
/// ```
/// use copy_state::to_title_case;
///
/// assert_eq!(to_title_case("hello-world foo_bar"), "Hello-World Foo_Bar");
/// assert_eq!(to_title_case("HELLO wORLD"), "Hello World");
/// ```
pub fn to_title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut in_word = false;

    for c in input.chars() {
        if c.is_ascii_alphanumeric() {
            let c = if in_word {
                c.to_ascii_lowercase()
            } else {
                c.to_ascii_uppercase()
            };
            out.push(c);
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }

    out
}
