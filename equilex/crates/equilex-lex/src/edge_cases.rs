//! Edge case tests for equilex-lex

#[cfg(test)]
mod tests {
    use crate::{tokenize, ScanConfig, ScanError, Scanner, Token, TokenKind};

    fn scan_all(source: &str) -> Vec<Token> {
        tokenize(source).unwrap()
    }

    fn kinds(source: &str) -> Vec<TokenKind> {
        scan_all(source).into_iter().map(|t| t.kind).collect()
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_empty_source() {
        assert!(scan_all("").is_empty());
    }

    #[test]
    fn test_edge_single_char_ident() {
        let t = scan_all("x");
        assert_eq!(t.len(), 1);
        assert_eq!(t[0].kind, TokenKind::Identifier);
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10_000);
        let t = scan_all(&format!("{} = 1", name));
        assert_eq!(t[0].literal, name);
    }

    #[test]
    fn test_edge_long_multiline_string() {
        let body = "line\n".repeat(5_000);
        let source = format!("${}$", body);
        let t = scan_all(&source);
        assert_eq!(t.len(), 1);
        assert_eq!(t[0].literal, source);
    }

    #[test]
    fn test_edge_only_whitespace() {
        assert_eq!(kinds(" \t  "), vec![TokenKind::Whitespace]);
    }

    #[test]
    fn test_edge_only_newlines() {
        assert_eq!(kinds("\n\r\n"), vec![TokenKind::NewLine]);
    }

    #[test]
    fn test_edge_adjacent_punctuation_is_not_combined() {
        assert_eq!(
            kinds("<=<>"),
            vec![
                TokenKind::LeftAngle,
                TokenKind::Equals,
                TokenKind::LeftAngle,
                TokenKind::RightAngle,
            ]
        );
    }

    #[test]
    fn test_edge_star_pipe_outside_comment() {
        assert_eq!(kinds("*| x"), vec![TokenKind::Multiply, TokenKind::Comment]);
    }

    #[test]
    fn test_edge_comment_directly_after_identifier() {
        let t = scan_all("abc|* c *|def");
        assert_eq!(t.len(), 3);
        assert_eq!(t[1].literal, "|* c *|");
        assert_eq!(t[2].literal, "def");
    }

    #[test]
    fn test_edge_quote_characters_inside_other_quotes() {
        let t = scan_all("\"it's $5\" $say \"hi\"$");
        assert_eq!(t[0].literal, "\"it's $5\"");
        assert_eq!(t[2].literal, "$say \"hi\"$");
    }

    #[test]
    fn test_edge_date_followed_by_date() {
        assert_eq!(
            kinds("'2024-01-01''10:00'"),
            vec![TokenKind::DateOrTimeConstant, TokenKind::DateOrTimeConstant]
        );
    }

    #[test]
    fn test_edge_unclosed_quote_at_end_of_input() {
        for source in ["\"", "$", "'"] {
            let err = tokenize(source).unwrap_err();
            assert_eq!(err.buffer(), Some(source), "{source}");
        }
    }

    #[test]
    fn test_edge_trailing_point_then_identifier() {
        let t = scan_all("1.x");
        assert_eq!(t[0].kind, TokenKind::DecimalConstant);
        assert_eq!(t[0].literal, "1.");
        assert_eq!(t[1].kind, TokenKind::Identifier);
    }

    #[test]
    fn test_edge_keywords_inside_literals_stay_literal() {
        let t = scan_all("\"IF\" $end$ | while");
        assert!(t.iter().all(|t| !t.kind.is_keyword()));
    }

    #[test]
    fn test_edge_multibyte_spans() {
        let t = scan_all("\"né\" x");
        assert_eq!(t[0].span.len(), 5);
        assert_eq!(t[2].span.start, 6);
        assert_eq!(t[2].span.column, 6);
    }

    #[test]
    fn test_edge_line_numbers_after_multiline_string() {
        let t = scan_all("$a\nb\nc$ x");
        assert_eq!(t[2].span.line, 3);
        assert_eq!(t[2].span.column, 4);
    }

    #[test]
    fn test_edge_error_after_valid_tokens() {
        let mut scanner = Scanner::from_source("ok '10:00-01'");
        assert_eq!(scanner.next_token().unwrap().literal, "ok");
        assert_eq!(scanner.next_token().unwrap().literal, " ");
        let err = scanner.next_token().unwrap_err();
        assert!(matches!(err, ScanError::MalformedDateOrTime { next: '-', .. }));
        assert_eq!(err.span().unwrap().start, 3);
    }

    #[test]
    fn test_edge_nesting_limit_of_one() {
        let config = ScanConfig::new().max_comment_depth(1);
        let mut scanner = Scanner::with_config("|* a *| |* |* *| *|".as_bytes(), config);
        assert_eq!(scanner.next_token().unwrap().kind, TokenKind::Comment);
        assert_eq!(scanner.next_token().unwrap().kind, TokenKind::Whitespace);
        assert!(matches!(
            scanner.next_token(),
            Err(ScanError::CommentNestingTooDeep { limit: 1, .. })
        ));
    }
}
