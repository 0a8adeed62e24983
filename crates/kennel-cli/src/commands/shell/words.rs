//! Quote-aware splitting of a shell line into words.

use crate::error::{CliError, CliResult};

/// Split `line` into words.
///
/// - Whitespace separates words unless inside `"..."` or `'...'`
/// - `\` escapes the next character outside single quotes
/// - `#` at the start of a word comments out the rest of the line
pub fn split_words(line: &str) -> CliResult<Vec<String>> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;
    let mut chars = line.chars();

    while let Some(ch) = chars.next() {
        match (quote, ch) {
            (Some(q), c) if c == q => quote = None,
            (Some('\''), c) => current.push(c),
            (_, '\\') => match chars.next() {
                Some(escaped) => {
                    current.push(escaped);
                    in_word = true;
                }
                None => return Err(invalid("line ends with a dangling '\\'")),
            },
            (Some(_), c) => current.push(c),
            (None, '"' | '\'') => {
                quote = Some(ch);
                in_word = true;
            }
            (None, '#') if !in_word => break,
            (None, c) if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            (None, c) => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if let Some(q) = quote {
        return Err(invalid(&format!("unterminated {q} quote")));
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}

fn invalid(message: &str) -> CliError {
    CliError::InvalidInput {
        message: message.to_owned(),
        source: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_whitespace() {
        assert_eq!(
            split_words("  reserve   1\t11111111 ").unwrap(),
            ["reserve", "1", "11111111"]
        );
    }

    #[test]
    fn quotes_group_words() {
        assert_eq!(
            split_words(r#"breed add "Gran Danés" -t 'muy gentil'"#).unwrap(),
            ["breed", "add", "Gran Danés", "-t", "muy gentil"]
        );
    }

    #[test]
    fn empty_quotes_make_an_empty_word() {
        assert_eq!(
            split_words(r#"breed add Pug -t """#).unwrap(),
            ["breed", "add", "Pug", "-t", ""]
        );
    }

    #[test]
    fn escapes_and_adjacent_quotes() {
        assert_eq!(split_words(r#"a\ b "c"d 'e\'"#).unwrap(), ["a b", "cd", "e\\"]);
    }

    #[test]
    fn comments_and_blank_lines() {
        assert!(split_words("   ").unwrap().is_empty());
        assert!(split_words("# intake for monday").unwrap().is_empty());
        assert_eq!(split_words("dog list # all of them").unwrap(), ["dog", "list"]);
        assert_eq!(split_words("adopter add a#b").unwrap(), ["adopter", "add", "a#b"]);
    }

    #[test]
    fn unterminated_quote_is_an_error() {
        let err = split_words(r#"dog add "La Tuerta"#).unwrap_err();
        assert!(matches!(err, CliError::InvalidInput { .. }));
        assert!(err.to_string().contains("unterminated"));
        assert_eq!(err.exit_code(), 2);
    }
}
