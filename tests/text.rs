//! Integration tests for prose tokenizing and code example classification.

use refdeck::text::{ExampleLine, ExcludeSet, Fragment, TokenKind, classify, format_example, tokenize};

#[test]
/// What: Non-Latin words are plain, ASCII words are highlighted.
///
/// - Input: "Метод Array" with an empty exclusion list
/// - Output: plain "Метод " then highlighted "Array"
fn cyrillic_stays_plain() {
    let frags = tokenize("Метод Array", &ExcludeSet::default());
    assert_eq!(
        frags,
        vec![Fragment::Plain("Метод "), Fragment::Highlight("Array")]
    );
}

#[test]
/// What: Fragments cover the source exactly and are never empty.
///
/// - Input: mixed prose with digits, punctuation, apostrophes, and newlines
/// - Output: concatenated fragment texts equal the input
fn fragments_reassemble_source() {
    let samples = [
        "",
        "\n\n",
        "It's 42, isn't it?\nYes: arr.push(1)",
        "  _private and __proto__ ",
        "Объект Object.keys()",
    ];
    for text in samples {
        let frags = tokenize(text, &ExcludeSet::default());
        let joined: String = frags.iter().map(Fragment::text).collect();
        assert_eq!(joined, text);
        assert!(frags.iter().all(|f| !f.text().is_empty()));
    }
}

#[test]
/// What: Exclusions are matched case-insensitively.
///
/// - Input: "The array" excluding "the"
/// - Output: "The" plain, "array" highlighted
fn exclusions_ignore_case() {
    let exclude = ExcludeSet::new(["the"]);
    let frags = tokenize("The array", &exclude);
    assert_eq!(
        frags,
        vec![
            Fragment::Plain("The"),
            Fragment::Plain(" "),
            Fragment::Highlight("array"),
        ]
    );
}

#[test]
/// What: Line breaks become their own fragments.
///
/// - Input: "a\nb"
/// - Output: highlight, line break, highlight
fn newline_is_a_break() {
    assert_eq!(
        tokenize("a\nb", &ExcludeSet::default()),
        vec![
            Fragment::Highlight("a"),
            Fragment::LineBreak,
            Fragment::Highlight("b"),
        ]
    );
}

#[test]
/// What: A realistic example line is classified token by token.
///
/// - Input: `const result = arr.filter(x => x > 2); // [3]`
/// - Output: declaration keyword, method after the dot, number, and a trailing comment line
fn classifies_example_line() {
    let tokens = classify("const result = arr.filter(x => x > 2);");
    assert_eq!(tokens[0].kind, TokenKind::Declaration);
    assert!(
        tokens
            .iter()
            .any(|t| t.kind == TokenKind::Method && t.text == "filter")
    );
    assert!(tokens.iter().any(|t| t.kind == TokenKind::Number && t.text == "2"));
    let joined: String = tokens.iter().map(|t| t.text).collect();
    assert_eq!(joined, "const result = arr.filter(x => x > 2);");

    let lines = format_example("let a = [1];\n// done");
    assert_eq!(lines.len(), 2);
    assert!(matches!(lines[0], ExampleLine::Code(_)));
}
