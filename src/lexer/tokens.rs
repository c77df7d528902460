use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("if", TokenKind::If);
        map.insert("elif", TokenKind::Elif);
        map.insert("else", TokenKind::Else);
        map.insert("for", TokenKind::For);
        map.insert("while", TokenKind::While);
        map.insert("do", TokenKind::Do);
        map.insert("enforce", TokenKind::Enforce);
        map.insert("class", TokenKind::Class);
        map.insert("trait", TokenKind::Trait);
        map.insert("implement", TokenKind::Implement);
        map.insert("take", TokenKind::Take);
        map.insert("as", TokenKind::As);
        map.insert("args", TokenKind::Args);
        map.insert("capture", TokenKind::Capture);
        map.insert("raise", TokenKind::Raise);
        map.insert("catch", TokenKind::Catch);
        map.insert("ref", TokenKind::Ref);
        map.insert("operator", TokenKind::Operator);
        map.insert("continue", TokenKind::Continue);
        map.insert("break", TokenKind::Break);
        map.insert("pass", TokenKind::Pass);
        map.insert("in", TokenKind::In);
        map.insert("function", TokenKind::Function);
        map
    };

    /// Operator spellings, one and two characters long.
    ///
    /// The scanner always tries the two-character spelling before falling
    /// back to the single character, so `^^` never scans as `^` `^`.
    pub static ref OPERATOR_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("/=", TokenKind::SlashEquals);
        map.insert("/", TokenKind::Slash);
        map.insert("*=", TokenKind::StarEquals);
        map.insert("*", TokenKind::Star);
        map.insert("%=", TokenKind::PercentEquals);
        map.insert("%", TokenKind::Percent);
        map.insert("^^", TokenKind::Xor);
        map.insert("^=", TokenKind::CaretEquals);
        map.insert("^", TokenKind::Caret);
        map.insert("?", TokenKind::Question);
        map.insert("++", TokenKind::PlusPlus);
        map.insert("+=", TokenKind::PlusEquals);
        map.insert("+", TokenKind::Plus);
        map.insert("--", TokenKind::MinusMinus);
        map.insert("-=", TokenKind::MinusEquals);
        map.insert("-", TokenKind::Dash);
        map.insert("<<", TokenKind::ShiftLeft);
        map.insert("<=", TokenKind::LessEquals);
        map.insert("<", TokenKind::Less);
        map.insert(">>", TokenKind::ShiftRight);
        map.insert(">=", TokenKind::GreaterEquals);
        map.insert(">", TokenKind::Greater);
        map.insert("&&", TokenKind::And);
        map.insert("&=", TokenKind::AmpersandEquals);
        map.insert("&", TokenKind::Ampersand);
        map.insert("||", TokenKind::Or);
        map.insert("|=", TokenKind::PipeEquals);
        map.insert("|", TokenKind::Pipe);
        map.insert("!=", TokenKind::NotEquals);
        map.insert("!", TokenKind::Not);
        map.insert("==", TokenKind::Equals);
        map.insert("=", TokenKind::Assignment);
        map.insert("~", TokenKind::Tilde);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    EndStatement,
    Indent,
    Identifier,

    IntLiteral,
    FloatLiteral,
    StrLiteral,

    Comment,
    BlockComment,

    OpenBracket,
    CloseBracket,
    OpenCurly,
    CloseCurly,
    OpenParen,
    CloseParen,

    Comma,
    Colon,
    Semicolon,
    Question,

    Assignment, // =
    Equals,     // ==
    Not,        // !
    NotEquals,  // !=
    Tilde,      // ~

    Less,
    LessEquals,
    Greater,
    GreaterEquals,
    ShiftLeft,
    ShiftRight,

    Or,  // ||
    And, // &&
    Pipe,
    Ampersand,
    Xor, // ^^

    PlusPlus,
    MinusMinus,
    PlusEquals,
    MinusEquals,
    SlashEquals,
    StarEquals,
    PercentEquals,
    CaretEquals,
    AmpersandEquals,
    PipeEquals,

    Plus,
    Dash,
    Slash,
    Star,
    Percent,
    Caret, // ^, exponent

    // Reserved
    If,
    Elif,
    Else,
    For,
    While,
    Do,
    Enforce,
    Class,
    Trait,
    Implement,
    Take,
    As,
    Args,
    Capture,
    Raise,
    Catch,
    Ref,
    Operator,
    Continue,
    Break,
    Pass,
    In,
    Function,
}

impl TokenKind {
    /// Kinds that carry no grammatical meaning of their own.
    pub fn is_comment(&self) -> bool {
        matches!(self, TokenKind::Comment | TokenKind::BlockComment)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// The payload attached to a token.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenValue {
    Integer(i64),
    Float(f64),
    /// Identifier names, decoded string literals and comment bodies.
    Text(String),
    /// The fixed spelling of keywords, operators and brackets.
    Spelling(&'static str),
    /// Number of whitespace characters opening a line.
    Count(usize),
    None,
}

impl Display for TokenValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenValue::Integer(value) => write!(f, "{}", value),
            TokenValue::Float(value) => write!(f, "{:?}", value),
            TokenValue::Text(value) => write!(f, "{:?}", value),
            TokenValue::Spelling(value) => write!(f, "{:?}", value),
            TokenValue::Count(value) => write!(f, "{}", value),
            TokenValue::None => write!(f, "None"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: TokenValue,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token({}, {})", self.kind, self.value)
    }
}

impl Token {
    /// Indentation payload, `None` for anything but an `Indent` token.
    pub fn indent(&self) -> Option<usize> {
        match (self.kind, &self.value) {
            (TokenKind::Indent, TokenValue::Count(count)) => Some(*count),
            _ => None,
        }
    }

    /// Name carried by an identifier token.
    pub fn text(&self) -> &str {
        match &self.value {
            TokenValue::Text(text) => text,
            TokenValue::Spelling(spelling) => spelling,
            _ => "",
        }
    }

    /// Short human readable form used in error messages.
    pub fn describe(&self) -> String {
        match &self.value {
            TokenValue::Integer(value) => value.to_string(),
            TokenValue::Float(value) => value.to_string(),
            TokenValue::Text(text) => text.clone(),
            TokenValue::Spelling(spelling) => spelling.to_string(),
            TokenValue::Count(_) | TokenValue::None => self.kind.to_string(),
        }
    }
}
