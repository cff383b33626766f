//! Small single-pass tokenizer for the code samples shown on the page.
//!
//! Comments and strings are consumed whole before any word rules run, so a
//! keyword inside a string literal stays part of the string.

const KEYWORDS: &[&str] = &[
    "const", "let", "var", "function", "return", "if", "else", "class", "export", "import", "async",
    "await", "new", "this", "public", "private", "protected",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    Comment,
    String,
    Keyword,
    Number,
    Function,
    Plain,
}

impl TokenKind {
    pub fn color(self) -> Option<&'static str> {
        match self {
            Self::Comment => Some("#6a9955"),
            Self::String => Some("#ce9178"),
            Self::Keyword => Some("#569cd6"),
            Self::Number => Some("#b5cea8"),
            Self::Function => Some("#dcdcaa"),
            Self::Plain => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
}

pub fn tokenize(source: &str) -> Vec<Token<'_>> {
    let bytes = source.as_bytes();
    let mut spans: Vec<(TokenKind, usize, usize)> = Vec::new();
    let mut index = 0;

    while index < bytes.len() {
        let (kind, end) = match bytes[index] {
            b'/' if bytes.get(index + 1) == Some(&b'/') => (TokenKind::Comment, line_end(bytes, index)),
            b'/' if bytes.get(index + 1) == Some(&b'*') => {
                (TokenKind::Comment, block_comment_end(source, index))
            }
            quote @ (b'\'' | b'"') => match closing_quote(bytes, index, quote) {
                Some(end) => (TokenKind::String, end),
                None => (TokenKind::Plain, index + 1),
            },
            byte if is_word_byte(byte) => {
                let end = word_end(bytes, index);
                (classify_word(&source[index..end], bytes.get(end)), end)
            }
            _ => (TokenKind::Plain, next_char_boundary(source, index)),
        };

        match spans.last_mut() {
            Some((TokenKind::Plain, _, last_end)) if kind == TokenKind::Plain => *last_end = end,
            _ => spans.push((kind, index, end)),
        }
        index = end;
    }

    spans
        .into_iter()
        .map(|(kind, start, end)| Token {
            kind,
            text: &source[start..end],
        })
        .collect()
}

fn classify_word(word: &str, next: Option<&u8>) -> TokenKind {
    if KEYWORDS.contains(&word) {
        TokenKind::Keyword
    } else if word.bytes().all(|byte| byte.is_ascii_digit()) {
        TokenKind::Number
    } else if next == Some(&b'(') {
        TokenKind::Function
    } else {
        TokenKind::Plain
    }
}

fn is_word_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_'
}

fn word_end(bytes: &[u8], start: usize) -> usize {
    bytes[start..]
        .iter()
        .position(|byte| !is_word_byte(*byte))
        .map_or(bytes.len(), |offset| start + offset)
}

fn line_end(bytes: &[u8], start: usize) -> usize {
    bytes[start..]
        .iter()
        .position(|byte| *byte == b'\n')
        .map_or(bytes.len(), |offset| start + offset)
}

fn block_comment_end(source: &str, start: usize) -> usize {
    source[start + 2..]
        .find("*/")
        .map_or(source.len(), |offset| start + 2 + offset + 2)
}

fn closing_quote(bytes: &[u8], start: usize, quote: u8) -> Option<usize> {
    bytes[start + 1..]
        .iter()
        .take_while(|byte| **byte != b'\n')
        .position(|byte| *byte == quote)
        .map(|offset| start + 1 + offset + 1)
}

fn next_char_boundary(source: &str, start: usize) -> usize {
    source[start..]
        .chars()
        .next()
        .map_or(source.len(), |ch| start + ch.len_utf8())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<(TokenKind, &str)> {
        tokenize(source).into_iter().map(|token| (token.kind, token.text)).collect()
    }

    #[test]
    fn tokens_cover_the_whole_source() {
        let source = "const total = sum(1, 2); // done\nlet ünï = \"x\";";
        let joined: String = tokenize(source).iter().map(|token| token.text).collect();
        assert_eq!(joined, source);
    }

    #[test]
    fn keywords_numbers_and_calls() {
        assert_eq!(
            kinds("return add(42);"),
            vec![
                (TokenKind::Keyword, "return"),
                (TokenKind::Plain, " "),
                (TokenKind::Function, "add"),
                (TokenKind::Plain, "("),
                (TokenKind::Number, "42"),
                (TokenKind::Plain, ");"),
            ]
        );
    }

    #[test]
    fn string_contents_are_not_retokenized() {
        assert_eq!(
            kinds(r#"x = "if 1 run()";"#),
            vec![
                (TokenKind::Plain, "x = "),
                (TokenKind::String, r#""if 1 run()""#),
                (TokenKind::Plain, ";"),
            ]
        );
    }

    #[test]
    fn comments_swallow_quotes_and_keywords() {
        assert_eq!(
            kinds("// don't return 'x'\nnew"),
            vec![
                (TokenKind::Comment, "// don't return 'x'"),
                (TokenKind::Plain, "\n"),
                (TokenKind::Keyword, "new"),
            ]
        );
        assert_eq!(
            kinds("/* a\n\"b\" */c"),
            vec![(TokenKind::Comment, "/* a\n\"b\" */"), (TokenKind::Plain, "c")]
        );
    }

    #[test]
    fn unterminated_block_comment_runs_to_end() {
        assert_eq!(kinds("a /* open"), vec![(TokenKind::Plain, "a "), (TokenKind::Comment, "/* open")]);
    }

    #[test]
    fn unterminated_quote_is_plain() {
        assert_eq!(
            kinds("it's\nok"),
            vec![(TokenKind::Plain, "it's\nok")]
        );
    }

    #[test]
    fn digits_inside_identifiers_are_not_numbers() {
        assert_eq!(kinds("x1 2y"), vec![(TokenKind::Plain, "x1 2y")]);
    }

    #[test]
    fn keyword_followed_by_paren_stays_keyword() {
        assert_eq!(kinds("if(")[0], (TokenKind::Keyword, "if"));
    }

    #[test]
    fn plain_tokens_have_no_color() {
        assert_eq!(TokenKind::Plain.color(), None);
        assert_eq!(TokenKind::Keyword.color(), Some("#569cd6"));
    }
}
