/// Splits one line on commas, treating anything between double quotes as
/// literal.  The quotes themselves are dropped, and there is no escaping,
/// so a field cannot contain a literal double quote.
pub fn split_quoted(line: &str) -> Vec<String> {
    let mut fields = vec![];
    let mut current = "".to_string();
    let mut in_quotes = false;

    for c in line.chars() {
        if c == '"' {
            in_quotes = !in_quotes;
        } else if c == ',' && !in_quotes {
            fields.push(current);
            current = "".to_string();
        } else {
            current.push(c);
        }
    }
    fields.push(current);

    return fields;
}

// the roster format has no quoting at all
pub fn split_plain(line: &str) -> Vec<String> {
    return line.split(',').map(|f| f.to_string()).collect();
}

// parseInt style: leading whitespace, then digits, anything after is
// ignored.  No digits at all is a failure, not a sentinel.
pub fn parse_leading_int(field: &str) -> Option<u32> {
    let digits: String = field
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();

    if digits.is_empty() {
        return None;
    }

    return digits.parse().ok();
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_split_counts_unquoted_commas() {
        assert_eq!(split_quoted("a,b,c"), vec!["a", "b", "c"]);
        assert_eq!(split_quoted("a,"), vec!["a", ""]);
        assert_eq!(split_quoted(""), vec![""]);
    }

    #[test]
    fn test_split_keeps_quoted_commas() {
        assert_eq!(
            split_quoted("1,\"Song, Title\",Artist"),
            vec!["1", "Song, Title", "Artist"]
        );
    }

    #[test]
    fn test_split_drops_quotes_anywhere() {
        assert_eq!(split_quoted("ab\"cd\"e,f"), vec!["abcde", "f"]);
    }

    #[test]
    fn test_split_unbalanced_quote_still_consumes_the_line() {
        assert_eq!(split_quoted("a,\"b,c"), vec!["a", "b,c"]);
    }

    #[test]
    fn test_split_plain_ignores_quotes() {
        assert_eq!(split_plain("\"a,b\",c"), vec!["\"a", "b\"", "c"]);
        assert_eq!(split_plain("a,b"), vec!["a", "b"]);
    }

    #[test]
    fn test_parse_leading_int() {
        assert_eq!(parse_leading_int("42"), Some(42));
        assert_eq!(parse_leading_int("42abc"), Some(42));
        assert_eq!(parse_leading_int("  7"), Some(7));
        assert_eq!(parse_leading_int("abc"), None);
        assert_eq!(parse_leading_int(""), None);
        assert_eq!(parse_leading_int("-3"), None);
    }
}
