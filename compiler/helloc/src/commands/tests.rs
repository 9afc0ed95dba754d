#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]

use pretty_assertions::assert_eq;

use super::*;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(ToString::to_string).collect()
}

fn dump(source: &str, options: &LexOptions) -> Result<String, LexCommandError> {
    let mut out = Vec::new();
    lex_source(Path::new("t.hw"), source.to_string(), options, &mut out)?;
    Ok(String::from_utf8(out).unwrap())
}

// === Argument parsing ===

#[test]
fn path_only() {
    let (path, options) = parse_lex_args(&args(&["main.hw"])).unwrap();
    assert_eq!(path, PathBuf::from("main.hw"));
    assert_eq!(options, LexOptions::default());
}

#[test]
fn flags_before_and_after_path() {
    let (path, options) = parse_lex_args(&args(&["--spans", "main.hw", "--deny-unknown"])).unwrap();
    assert_eq!(path, PathBuf::from("main.hw"));
    assert!(options.spans);
    assert!(options.deny_unknown);
}

#[test]
fn unknown_flag_is_rejected() {
    let err = parse_lex_args(&args(&["main.hw", "--fast"])).unwrap_err();
    assert!(matches!(err, LexCommandError::UnknownOption(flag) if flag == "--fast"));
}

#[test]
fn missing_path() {
    let err = parse_lex_args(&args(&["--spans"])).unwrap_err();
    assert!(matches!(err, LexCommandError::MissingPath));
}

// === Token dump ===

#[test]
fn dump_lists_every_token() {
    let text = dump("foo + 123;", &LexOptions::default()).unwrap();
    assert_eq!(
        text,
        "Tokens for 't.hw' (5 tokens):\n\
         \x20 Identifier \"foo\" @ 1:1\n\
         \x20 Plus \"+\" @ 1:5\n\
         \x20 Number \"123\" @ 1:7\n\
         \x20 Semicolon \";\" @ 1:10\n\
         \x20 EndOfInput \"\" @ 1:11\n"
    );
}

#[test]
fn dump_with_spans() {
    let options = LexOptions {
        spans: true,
        ..LexOptions::default()
    };
    let text = dump("ab\n\tc", &options).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Tokens for 't.hw' (4 tokens):",
            "  Identifier \"ab\" @ 1:1 [1:1-1:2] code=3",
            "  IndentMarker \"\" @ 2:2 [2:2-2:2] code=14",
            "  Identifier \"c\" @ 2:2 [2:2-2:2] code=3",
            "  EndOfInput \"\" @ 2:3 [2:3-2:3] code=0",
        ]
    );
}

#[test]
fn unknown_is_listed_by_default() {
    let text = dump("a $", &LexOptions::default()).unwrap();
    assert!(text.contains("Unknown \"$\" @ 1:3"));
}

#[test]
fn deny_unknown_fails_on_first_unknown() {
    let options = LexOptions {
        deny_unknown: true,
        ..LexOptions::default()
    };
    let err = dump("ok\n$ #", &options).unwrap_err();
    assert_eq!(err.to_string(), "t.hw:2:1: unknown character \"$\"");
}

#[test]
fn deny_unknown_passes_clean_input() {
    let options = LexOptions {
        deny_unknown: true,
        ..LexOptions::default()
    };
    assert!(dump("x * (y - 1);", &options).is_ok());
}

#[test]
fn token_count_includes_end_of_input() {
    let mut out = Vec::new();
    let count = lex_source(
        Path::new("empty.hw"),
        String::new(),
        &LexOptions::default(),
        &mut out,
    )
    .unwrap();
    assert_eq!(count, 1);
}

// === Files ===

#[test]
fn missing_file_reports_read_error() {
    let mut out = Vec::new();
    let path = Path::new("definitely/not/here.hw");
    let err = lex_file(path, &LexOptions::default(), &mut out).unwrap_err();
    assert!(matches!(err, LexCommandError::Read { .. }));
    assert_eq!(err.to_string(), "cannot find file 'definitely/not/here.hw'");
    assert!(out.is_empty());
}
