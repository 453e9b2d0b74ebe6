use rpn_calc::{lexical::token::Token, parse, tokenize};

fn rpn_strs(source: &str) -> Vec<String> {
    parse(tokenize(source))
        .map(|token| token.str().to_string())
        .collect()
}

#[test]
fn parsing_precedence() {
    assert_eq!(rpn_strs("2 + 3 * 4"), ["2", "3", "4", "*", "+", "#eof"]);
    assert_eq!(rpn_strs("(2 + 3) * 4"), ["2", "3", "+", "4", "*", "#eof"]);
}

#[test]
fn parsing_long_expression() {
    assert_eq!(
        rpn_strs("2 + (3 * 4 + (5 + 6 / 2 - 7) * 8) - 9 - 10 - 11 + 12"),
        [
            "2", "3", "4", "*", "5", "6", "2", "/", "+", "7", "-", "8", "*", "+", "+", "9", "-",
            "10", "-", "11", "-", "12", "+", "#eof"
        ]
    );
}

#[test]
fn parsing_ends_with_single_end_marker() {
    for source in ["1", "1 + 2", "((3))", " 4 * 5 ", "6/2-1"] {
        let tokens = parse(tokenize(source)).collect::<Vec<_>>();

        assert_eq!(
            tokens.iter().filter(|token| token.is_end_of_input()).count(),
            1,
            "in {source:?}"
        );
        assert!(tokens.last().is_some_and(Token::is_end_of_input));
        assert!(!tokens.iter().any(Token::is_parenthesis));
    }
}

#[test]
fn parsing_invalid() {
    for source in ["2 + 3)", ")", "(1 + 2", "1 ? 2"] {
        let tokens = parse(tokenize(source)).collect::<Vec<_>>();

        assert_eq!(
            tokens.iter().filter(|token| token.is_error()).count(),
            1,
            "in {source:?}"
        );
        assert!(tokens.last().is_some_and(Token::is_error), "in {source:?}");
        assert!(!tokens.iter().any(Token::is_end_of_input), "in {source:?}");
    }
}

#[test]
fn parsing_empty() {
    assert_eq!(parse(tokenize("")).count(), 0);
}
