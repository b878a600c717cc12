//! Token definitions and the keyword table.
//!
//! A [`Token`] pairs a payload-free [`TokenKind`] with the exact text it was
//! scanned from. Keywords are matched case-insensitively through a static
//! table built on first use; the literal always keeps the source spelling.

use std::fmt;
use std::sync::LazyLock;

use equilex_util::Span;
use rustc_hash::FxHashMap;

/// Classification of a scanned token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TokenKind {
    /// Character with no meaning in the language
    Illegal,
    /// End of input
    Eof,

    /// Run of spaces and tabs
    Whitespace,
    /// Run of `\n` and `\r` characters
    NewLine,
    /// `| …` to end of line, or a nested `|* … *|` block
    Comment,

    /// Variable or field name
    Identifier,

    /// `string` type declaration
    String,
    /// `logical` (boolean) type declaration
    Logical,
    /// `number` type declaration
    Number,
    /// `date` type declaration
    Date,

    /// `"`-delimited string constant
    StringConstant,
    /// `$`-delimited string constant which may span multiple lines
    StringMultilineConstant,
    /// Integer constant
    IntegerConstant,
    /// Decimal constant
    DecimalConstant,
    /// `'`-delimited date or time constant, possibly empty
    DateOrTimeConstant,

    /// `,`
    Comma,
    /// `=`
    Equals,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `[`
    LeftSquare,
    /// `]`
    RightSquare,
    /// `<`
    LeftAngle,
    /// `>`
    RightAngle,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Multiply,
    /// `/`
    Divide,
    /// `^`
    Power,
    /// `&`
    Ampersand,
    /// `\`
    Backslash,
    /// `.`
    Dot,
    /// `;`
    Semicolon,

    // Database and file statements
    /// `subtable`
    Subtable,
    /// `findrecord`
    FindRecord,
    /// `firstrecord`
    FirstRecord,
    /// `lastrecord`
    LastRecord,
    /// `nextrecord`
    NextRecord,
    /// `prevrecord`
    PrevRecord,
    /// `setindex`
    SetIndex,
    /// `lookup`
    Lookup,
    /// `fileopen`
    FileOpen,
    /// `fileclose`
    FileClose,
    /// `fileprint`
    FilePrint,
    /// `text`
    Text,
    /// `alert`
    Alert,

    // Declarations
    /// `method`
    Method,
    /// `procedure`
    Procedure,
    /// `return`
    Return,

    // Control flow
    /// `if`
    If,
    /// `then`
    Then,
    /// `else`
    Else,
    /// `endif`
    EndIf,
    /// `while`
    While,
    /// `end`
    End,
    /// `repeat`
    Repeat,
    /// `until`
    Until,
    /// `for`
    For,
    /// `next`
    Next,
    /// `step`
    Step,
    /// `block`
    Block,
    /// `switch`
    Switch,
    /// `case`
    Case,
    /// `default`
    Default,

    // Operators and values
    /// `not`
    Not,
    /// `and`
    And,
    /// `or`
    Or,
    /// `xor`
    Xor,
    /// `true`
    True,
    /// `false`
    False,
    /// `today`
    Today,
    /// `syserror`
    SysError,
}

/// Upper-case spelling of every reserved word.
const KEYWORD_LIST: &[(&str, TokenKind)] = &[
    ("STRING", TokenKind::String),
    ("LOGICAL", TokenKind::Logical),
    ("NUMBER", TokenKind::Number),
    ("DATE", TokenKind::Date),
    ("SUBTABLE", TokenKind::Subtable),
    ("FINDRECORD", TokenKind::FindRecord),
    ("FIRSTRECORD", TokenKind::FirstRecord),
    ("LASTRECORD", TokenKind::LastRecord),
    ("NEXTRECORD", TokenKind::NextRecord),
    ("PREVRECORD", TokenKind::PrevRecord),
    ("SETINDEX", TokenKind::SetIndex),
    ("LOOKUP", TokenKind::Lookup),
    ("FILEOPEN", TokenKind::FileOpen),
    ("FILECLOSE", TokenKind::FileClose),
    ("FILEPRINT", TokenKind::FilePrint),
    ("TEXT", TokenKind::Text),
    ("ALERT", TokenKind::Alert),
    ("METHOD", TokenKind::Method),
    ("PROCEDURE", TokenKind::Procedure),
    ("RETURN", TokenKind::Return),
    ("IF", TokenKind::If),
    ("THEN", TokenKind::Then),
    ("ELSE", TokenKind::Else),
    ("ENDIF", TokenKind::EndIf),
    ("WHILE", TokenKind::While),
    ("END", TokenKind::End),
    ("REPEAT", TokenKind::Repeat),
    ("UNTIL", TokenKind::Until),
    ("FOR", TokenKind::For),
    ("NEXT", TokenKind::Next),
    ("STEP", TokenKind::Step),
    ("BLOCK", TokenKind::Block),
    ("SWITCH", TokenKind::Switch),
    ("CASE", TokenKind::Case),
    ("DEFAULT", TokenKind::Default),
    ("NOT", TokenKind::Not),
    ("AND", TokenKind::And),
    ("OR", TokenKind::Or),
    ("XOR", TokenKind::Xor),
    ("TRUE", TokenKind::True),
    ("FALSE", TokenKind::False),
    ("TODAY", TokenKind::Today),
    ("SYSERROR", TokenKind::SysError),
];

static KEYWORDS: LazyLock<FxHashMap<&'static str, TokenKind>> =
    LazyLock::new(|| KEYWORD_LIST.iter().copied().collect());

/// Looks up a reserved word, ignoring ASCII case.
///
/// # Example
///
/// ```
/// use equilex_lex::{keyword_from_ident, TokenKind};
///
/// assert_eq!(keyword_from_ident("EndIf"), Some(TokenKind::EndIf));
/// assert_eq!(keyword_from_ident("endiff"), None);
/// ```
pub fn keyword_from_ident(ident: &str) -> Option<TokenKind> {
    KEYWORDS.get(ident.to_ascii_uppercase().as_str()).copied()
}

/// Maps a character to its single-character punctuation token.
pub fn punctuation(c: char) -> Option<TokenKind> {
    let kind = match c {
        ',' => TokenKind::Comma,
        '=' => TokenKind::Equals,
        '(' => TokenKind::LeftParen,
        ')' => TokenKind::RightParen,
        '[' => TokenKind::LeftSquare,
        ']' => TokenKind::RightSquare,
        '<' => TokenKind::LeftAngle,
        '>' => TokenKind::RightAngle,
        '+' => TokenKind::Plus,
        '-' => TokenKind::Minus,
        '*' => TokenKind::Multiply,
        '/' => TokenKind::Divide,
        '^' => TokenKind::Power,
        '&' => TokenKind::Ampersand,
        '\\' => TokenKind::Backslash,
        '.' => TokenKind::Dot,
        ';' => TokenKind::Semicolon,
        _ => return None,
    };
    Some(kind)
}

impl TokenKind {
    /// Returns true for reserved words, including type declarations.
    pub fn is_keyword(self) -> bool {
        KEYWORD_LIST.iter().any(|&(_, kind)| kind == self)
    }

    /// Returns true for tokens a parser usually skips.
    pub fn is_trivia(self) -> bool {
        matches!(self, TokenKind::Whitespace | TokenKind::NewLine | TokenKind::Comment)
    }

    /// Returns true for constants.
    pub fn is_literal(self) -> bool {
        matches!(
            self,
            TokenKind::StringConstant
                | TokenKind::StringMultilineConstant
                | TokenKind::IntegerConstant
                | TokenKind::DecimalConstant
                | TokenKind::DateOrTimeConstant
        )
    }

    /// Stable human-readable name.
    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::Illegal => "illegal character",
            TokenKind::Eof => "end of input",
            TokenKind::Whitespace => "whitespace",
            TokenKind::NewLine => "newline",
            TokenKind::Comment => "comment",
            TokenKind::Identifier => "identifier",
            TokenKind::String => "string",
            TokenKind::Logical => "logical",
            TokenKind::Number => "number",
            TokenKind::Date => "date",
            TokenKind::StringConstant => "string constant",
            TokenKind::StringMultilineConstant => "multi-line string constant",
            TokenKind::IntegerConstant => "integer constant",
            TokenKind::DecimalConstant => "decimal constant",
            TokenKind::DateOrTimeConstant => "date or time constant",
            TokenKind::Comma => ",",
            TokenKind::Equals => "=",
            TokenKind::LeftParen => "(",
            TokenKind::RightParen => ")",
            TokenKind::LeftSquare => "[",
            TokenKind::RightSquare => "]",
            TokenKind::LeftAngle => "<",
            TokenKind::RightAngle => ">",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Multiply => "*",
            TokenKind::Divide => "/",
            TokenKind::Power => "^",
            TokenKind::Ampersand => "&",
            TokenKind::Backslash => "\\",
            TokenKind::Dot => ".",
            TokenKind::Semicolon => ";",
            TokenKind::Subtable => "subtable",
            TokenKind::FindRecord => "findrecord",
            TokenKind::FirstRecord => "firstrecord",
            TokenKind::LastRecord => "lastrecord",
            TokenKind::NextRecord => "nextrecord",
            TokenKind::PrevRecord => "prevrecord",
            TokenKind::SetIndex => "setindex",
            TokenKind::Lookup => "lookup",
            TokenKind::FileOpen => "fileopen",
            TokenKind::FileClose => "fileclose",
            TokenKind::FilePrint => "fileprint",
            TokenKind::Text => "text",
            TokenKind::Alert => "alert",
            TokenKind::Method => "method",
            TokenKind::Procedure => "procedure",
            TokenKind::Return => "return",
            TokenKind::If => "if",
            TokenKind::Then => "then",
            TokenKind::Else => "else",
            TokenKind::EndIf => "endif",
            TokenKind::While => "while",
            TokenKind::End => "end",
            TokenKind::Repeat => "repeat",
            TokenKind::Until => "until",
            TokenKind::For => "for",
            TokenKind::Next => "next",
            TokenKind::Step => "step",
            TokenKind::Block => "block",
            TokenKind::Switch => "switch",
            TokenKind::Case => "case",
            TokenKind::Default => "default",
            TokenKind::Not => "not",
            TokenKind::And => "and",
            TokenKind::Or => "or",
            TokenKind::Xor => "xor",
            TokenKind::True => "true",
            TokenKind::False => "false",
            TokenKind::Today => "today",
            TokenKind::SysError => "syserror",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A scanned token: its kind, the exact source text, and where it was found.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    /// Classification
    pub kind: TokenKind,
    /// Source text, delimiters included
    pub literal: String,
    /// Location in the input
    pub span: Span,
}

impl Token {
    /// Creates a token.
    pub fn new(kind: TokenKind, literal: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            literal: literal.into(),
            span,
        }
    }

    /// Returns true for the end-of-input token.
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?} at {}", self.kind, self.literal, self.span)
    }
}
