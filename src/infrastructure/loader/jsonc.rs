//! Comment stripping for JSON-with-comments sources

/// Remove `// line` and `/* block */` comments outside of string literals.
///
/// Line comments keep their terminating newline so error positions reported by
/// the JSON parser still match the source.
///
/// ```
/// use apiboost::infrastructure::loader::strip_jsonc;
///
/// let src = "{\n  // module list\n  \"url\": \"https://x/y\" /* trailing */\n}";
/// assert_eq!(strip_jsonc(src), "{\n  \n  \"url\": \"https://x/y\" \n}");
/// ```
pub fn strip_jsonc(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    let mut in_string = false;

    while let Some(c) = chars.next() {
        if in_string {
            out.push(c);
            match c {
                '\\' => {
                    if let Some(escaped) = chars.next() {
                        out.push(escaped);
                    }
                }
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match (c, chars.peek().copied()) {
            ('"', _) => {
                in_string = true;
                out.push(c);
            }
            ('/', Some('/')) => {
                for next in chars.by_ref() {
                    if next == '\n' {
                        out.push('\n');
                        break;
                    }
                }
            }
            ('/', Some('*')) => {
                chars.next();
                let mut prev = '\0';
                for next in chars.by_ref() {
                    if prev == '*' && next == '/' {
                        break;
                    }
                    prev = next;
                }
            }
            _ => out.push(c),
        }
    }

    out
}
