//! Source formatting for generated files
//!
//! A deterministic, toolchain-independent formatting pass: trailing
//! whitespace is stripped, repeated blank lines collapse to one, the file
//! ends with exactly one newline, and unbalanced delimiters are rejected
//! so a broken template cannot produce a file that looks plausible.

use crate::error::{Error, Result};

/// Format rendered source text
///
/// Fails with `Error::Formatting` when the text has unbalanced
/// delimiters outside string literals and comments.
pub fn format_source(source: &str) -> Result<String> {
    check_balanced(source)?;

    let mut out = String::with_capacity(source.len());
    let mut blank_run = 0usize;

    for line in source.lines() {
        let trimmed = line.trim_end();
        if trimmed.is_empty() {
            blank_run += 1;
            if blank_run > 1 {
                continue;
            }
        } else {
            blank_run = 0;
        }
        out.push_str(trimmed);
        out.push('\n');
    }

    while out.ends_with("\n\n") {
        out.pop();
    }
    if !out.ends_with('\n') {
        out.push('\n');
    }

    Ok(out)
}

/// Verify braces, parentheses and brackets balance
fn check_balanced(source: &str) -> Result<()> {
    let mut depth: [i64; 3] = [0; 3]; // braces, parens, brackets
    let mut in_string = false;
    let mut in_comment = false;
    let mut escaped = false;
    let mut prev = '\0';

    for ch in source.chars() {
        if in_comment {
            if ch == '\n' {
                in_comment = false;
            }
            prev = ch;
            continue;
        }
        if in_string {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == '"' {
                in_string = false;
            }
            prev = ch;
            continue;
        }
        match ch {
            '"' => in_string = true,
            '/' if prev == '/' => in_comment = true,
            '{' => depth[0] += 1,
            '}' => depth[0] -= 1,
            '(' => depth[1] += 1,
            ')' => depth[1] -= 1,
            '[' => depth[2] += 1,
            ']' => depth[2] -= 1,
            _ => {}
        }
        if depth.iter().any(|d| *d < 0) {
            return Err(Error::formatting("unexpected closing delimiter"));
        }
        prev = ch;
    }

    if in_string {
        return Err(Error::formatting("unterminated string literal"));
    }
    if depth.iter().any(|d| *d != 0) {
        return Err(Error::formatting("unbalanced delimiters"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_trailing_whitespace() {
        let formatted = format_source("fn main() {}   \n").unwrap();
        assert_eq!(formatted, "fn main() {}\n");
    }

    #[test]
    fn test_collapses_blank_lines() {
        let formatted = format_source("fn a() {}\n\n\n\nfn b() {}\n").unwrap();
        assert_eq!(formatted, "fn a() {}\n\nfn b() {}\n");
    }

    #[test]
    fn test_single_trailing_newline() {
        let formatted = format_source("fn main() {}").unwrap();
        assert_eq!(formatted, "fn main() {}\n");

        let formatted = format_source("fn main() {}\n\n\n").unwrap();
        assert_eq!(formatted, "fn main() {}\n");
    }

    #[test]
    fn test_already_formatted_is_identity() {
        let source = "fn main() {\n    let x = 1;\n}\n";
        assert_eq!(format_source(source).unwrap(), source);
    }

    #[test]
    fn test_unbalanced_braces_rejected() {
        assert!(matches!(
            format_source("fn main() {"),
            Err(Error::Formatting { .. })
        ));
        assert!(matches!(
            format_source("fn main() }"),
            Err(Error::Formatting { .. })
        ));
    }

    #[test]
    fn test_braces_in_strings_and_comments_ignored() {
        let source = "fn main() {\n    // a { comment\n    let s = \"{\";\n}\n";
        assert!(format_source(source).is_ok());
    }

    #[test]
    fn test_unterminated_string_rejected() {
        assert!(matches!(
            format_source("let s = \"oops;\n"),
            Err(Error::Formatting { .. })
        ));
    }
}
