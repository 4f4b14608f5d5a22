/// Splits a literal body on top-level occurrences of `delimiter`.
///
/// A delimiter is top-level when it is outside every `[...]`, `{...}` and
/// `(...)` pair and outside a `"..."` string. Inside a string a backslash
/// escapes the following character, so `\"` does not end it. Each token is
/// trimmed of surrounding whitespace.
///
/// Every delimiter emits the token before it, even an empty one, and the
/// remainder after the last delimiter is emitted too. The one exception is a
/// blank body, which yields no tokens at all, so `[]` and `{}` are empty
/// containers while `[1,]` still reaches the evaluator with an empty
/// element.
///
/// Unbalanced closers are ignored rather than driving the depth negative.
///
/// # Example
/// ```
/// use evalenv::splitter::split_expr;
///
/// assert_eq!(split_expr("[1,2],3", ','), vec!["[1,2]", "3"]);
/// assert_eq!(split_expr(r#" "a,b" : f(1, 2) "#, ':'), vec![r#""a,b""#, "f(1, 2)"]);
/// assert!(split_expr("   ", ',').is_empty());
/// ```
#[must_use]
pub fn split_expr(body: &str, delimiter: char) -> Vec<String> {
    if body.trim().is_empty() {
        return Vec::new();
    }

    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for c in body.chars() {
        if in_string {
            current.push(c);
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }

        match c {
            '"' => in_string = true,
            '[' | '{' | '(' => depth += 1,
            ']' | '}' | ')' => depth = depth.saturating_sub(1),
            _ if c == delimiter && depth == 0 => {
                tokens.push(current.trim().to_string());
                current.clear();
                continue;
            },
            _ => {},
        }
        current.push(c);
    }

    tokens.push(current.trim().to_string());
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_containers_are_kept_whole() {
        assert_eq!(split_expr("{a: [1, 2]}, (3, 4), 5", ','),
                   vec!["{a: [1, 2]}", "(3, 4)", "5"]);
    }

    #[test]
    fn delimiters_inside_strings_are_ignored() {
        assert_eq!(split_expr(r#""x\",y", 2"#, ','), vec![r#""x\",y""#, "2"]);
    }

    #[test]
    fn empty_tokens_are_emitted() {
        assert_eq!(split_expr("1,,2,", ','), vec!["1", "", "2", ""]);
        assert_eq!(split_expr(",", ','), vec!["", ""]);
    }

    #[test]
    fn colon_split_of_map_entry() {
        assert_eq!(split_expr("\"k\": {1: 2}", ':'), vec!["\"k\"", "{1: 2}"]);
        assert_eq!(split_expr("1:2:3", ':').len(), 3);
        assert_eq!(split_expr("1", ':'), vec!["1"]);
    }

    #[test]
    fn stray_closer_does_not_underflow() {
        assert_eq!(split_expr("], 1", ','), vec!["]", "1"]);
    }
}
