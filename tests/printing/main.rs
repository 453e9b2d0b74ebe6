use rpn_calc::{
    parse,
    print::{render, render_trace},
    tokenize,
};

#[test]
fn printing_rpn() {
    let rpn = parse(tokenize("2 + 3 * 4")).collect::<Vec<_>>();

    assert_eq!(render(&rpn), " 2 3 4 * +\n");
    assert_eq!(render_trace(&rpn), "2 3 4 * +\n");
}

#[test]
fn printing_error() {
    let rpn = parse(tokenize("2 + 3)")).collect::<Vec<_>>();

    assert_eq!(
        render_trace(&rpn),
        "2 3 +\nError happened at ).\nMessage: Expected ( for"
    );
}

#[test]
fn printing_is_stable() {
    let sources = [
        "2 + 3 * 4",
        "(2 + 3) * 4",
        "2 + (3 * 4 + (5 + 6 / 2 - 7) * 8) - 9 - 10 - 11 + 12",
        "100",
    ];

    for source in sources {
        let rpn = parse(tokenize(source)).collect::<Vec<_>>();
        let printed = render(&rpn);

        let retokenized = tokenize(&printed)
            .map(|token| token.str().to_string())
            .collect::<Vec<_>>();
        let expected = rpn
            .iter()
            .map(|token| token.str().to_string())
            .collect::<Vec<_>>();

        assert_eq!(retokenized, expected, "in {source:?}");
        assert_eq!(render(&rpn), printed);
    }
}
