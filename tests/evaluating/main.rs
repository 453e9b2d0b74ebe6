use rpn_calc::{
    base::{self, Handler, SilentHandler, VoidHandler},
    calculate, evaluate,
    evaluation::{EvaluationError, MalformedInput},
    parse, tokenize,
};

fn eval(source: &str) -> Result<i32, EvaluationError> {
    evaluate(parse(tokenize(source)))
}

#[test]
fn evaluating_valid_expressions() {
    let cases = [
        ("0", 0),
        ("42", 42),
        ("2 + 3 * 4", 14),
        ("(2 + 3) * 4", 20),
        ("2 + (3 * 4 + (5 + 6 / 2 - 7) * 8) - 9 - 10 - 11 + 12", 4),
        ("20 / 3", 6),
        ("20 / 3 * 3", 18),
        ("1 - 2 - 3", -4),
        ("1 - (2 - 3)", 2),
        ("2 * (3 + 4) * 5", 70),
        ("((((7))))", 7),
        ("  12\t+\n30  ", 42),
        ("1+2*3-4/2", 5),
    ];

    for (source, expected) in cases {
        assert_eq!(eval(source), Ok(expected), "in {source:?}");
    }
}

#[test]
fn evaluating_invalid_character() {
    let err = eval("2 & 3").expect_err("`&` is not an operator");

    let EvaluationError::InvalidExpression(token) = err else {
        panic!("expected invalid expression, found {err:?}");
    };
    assert_eq!(token.span.str(), "&");
}

#[test]
fn evaluating_unmatched_parentheses() {
    assert!(matches!(eval("2 + 3)"), Err(EvaluationError::InvalidExpression(_))));
    assert!(matches!(eval("(2 + 3"), Err(EvaluationError::InvalidExpression(_))));
}

#[test]
fn evaluating_hand_written_rpn() {
    assert!(matches!(
        evaluate(tokenize("2 +")),
        Err(EvaluationError::ArityError(_))
    ));
    assert_eq!(
        evaluate(tokenize("2 3")),
        Err(EvaluationError::MalformedInput(MalformedInput::ExpectedOperator))
    );
    assert!(matches!(
        evaluate(tokenize("5 0 /")),
        Err(EvaluationError::DivisionByZero(_))
    ));
    assert_eq!(evaluate(tokenize("3 4 + 2 *")), Ok(14));
}

#[test]
fn evaluating_missing_operand() {
    assert!(matches!(eval("1 +"), Err(EvaluationError::ArityError(_))));
    assert!(matches!(eval("* 2"), Err(EvaluationError::ArityError(_))));
    assert!(matches!(eval("()"), Err(EvaluationError::MalformedInput(MalformedInput::EmptyExpression))));
}

#[test]
fn evaluating_with_handler() {
    let handler = SilentHandler::new();

    assert_eq!(calculate("6 * 7", &handler), Ok(42));
    assert!(!Handler::<base::Error>::has_received(&handler));

    let err = calculate("6 * (7", &handler).expect_err("unmatched parenthesis");
    assert!(matches!(err, base::Error::Evaluation(EvaluationError::InvalidExpression(_))));
    assert_eq!(err.span().map(|span| span.str()), Some("("));
    assert!(Handler::<base::Error>::has_received(&handler));

    assert!(calculate("1 / 0", &VoidHandler).is_err());
}
