use std::io::{self, BufReader, Read};

use super::*;
use crate::error::NovelError;

fn lex(input: &str) -> Vec<Token> {
    tokenize(input.as_bytes())
        .collect::<NovelResult<Vec<_>>>()
        .expect("lex")
}

#[test]
fn one_line_token_per_line() {
    let tokens = lex("Line1\nLine2\n");
    assert_eq!(tokens, vec![Token::line("Line1"), Token::line("Line2")]);
}

#[test]
fn strips_carriage_returns() {
    let tokens = lex("first\r\nsecond\r\n");
    assert_eq!(tokens[0].text(), "first");
    assert_eq!(tokens[1].text(), "second");
}

#[test]
fn unterminated_last_line_still_yields_a_token() {
    let tokens = lex("first\nlast");
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[1].text(), "last");
}

#[test]
fn blank_lines_are_line_tokens() {
    let tokens = lex("a\n\nb\n");
    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[1].text(), "");
}

#[test]
fn empty_input_yields_nothing() {
    assert!(lex("").is_empty());
}

#[test]
fn text_joins_arguments_in_order() {
    let token = Token {
        kind: TokenKind::Line,
        args: vec!["Hel".to_string(), "lo".to_string()],
    };
    assert_eq!(token.text(), "Hello");
}

#[test]
fn read_errors_end_the_stream() {
    struct Failing;
    impl Read for Failing {
        fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "boom"))
        }
    }

    let mut tokens = tokenize(BufReader::new(Failing));
    assert!(matches!(tokens.next(), Some(Err(NovelError::Io(_)))));
    assert!(tokens.next().is_none());
}

#[test]
fn invalid_utf8_is_an_io_error() {
    let bytes: &[u8] = &[0x66, 0xff, 0xfe, b'\n'];
    let result: NovelResult<Vec<Token>> = tokenize(bytes).collect();
    assert!(matches!(result, Err(NovelError::Io(_))));
}
