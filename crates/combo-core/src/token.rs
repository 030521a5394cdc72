//! Input token vocabulary: the closed set of classified controller actions plus
//! one freeform passthrough.
//!
//! Every token has a canonical string (what persisted records and the share
//! codec store) and a notation glyph (what the serializer prints). The parser
//! reads glyphs back through a separate, case-insensitive alias table.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

/// Numpad direction. `Neutral` (5) is elided whenever it precedes a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    DownBack,
    Down,
    DownForward,
    Back,
    Neutral,
    Forward,
    UpBack,
    Up,
    UpForward,
}

impl Direction {
    pub const ALL: [Direction; 9] = [
        Self::DownBack,
        Self::Down,
        Self::DownForward,
        Self::Back,
        Self::Neutral,
        Self::Forward,
        Self::UpBack,
        Self::Up,
        Self::UpForward,
    ];

    pub fn from_digit(c: char) -> Option<Self> {
        let n = c.to_digit(10)?;
        match n {
            1..=9 => Some(Self::ALL[(n - 1) as usize]),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::DownBack => "1",
            Self::Down => "2",
            Self::DownForward => "3",
            Self::Back => "4",
            Self::Neutral => "5",
            Self::Forward => "6",
            Self::UpBack => "7",
            Self::Up => "8",
            Self::UpForward => "9",
        }
    }

    pub fn is_neutral(self) -> bool {
        self == Self::Neutral
    }
}

/// Jump-cancel variants of the upward diagonals, plus the bare `jc` marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JumpCancel {
    UpBack,
    UpForward,
    Bare,
}

impl JumpCancel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::UpBack => "7jc",
            Self::UpForward => "9jc",
            Self::Bare => "jc",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    L,
    M,
    H,
    S1,
    S2,
}

impl Button {
    pub const ALL: [Button; 5] = [Self::L, Self::M, Self::H, Self::S1, Self::S2];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::L => "L",
            Self::M => "M",
            Self::H => "H",
            Self::S1 => "S1",
            Self::S2 => "S2",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Movement {
    Dash,
    BackDash,
}

/// Modifiers change how the following unit renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modifier {
    Air,
    Delay,
    Whiff,
    Hold,
}

impl Modifier {
    /// Dot-prefix letter used in notation. `Hold` renders as brackets instead.
    pub fn prefix(self) -> Option<&'static str> {
        match self {
            Self::Air => Some("j"),
            Self::Delay => Some("d"),
            Self::Whiff => Some("w"),
            Self::Hold => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Connector {
    /// `+`: simultaneous.
    Plus,
    /// `>`: sequential.
    Then,
    /// `T`: legacy link marker.
    Link,
    /// `~`: chained.
    Chain,
    /// `or`: alternative, rendered `/`.
    Or,
    /// `,`: separator split off a trailing comma.
    Comma,
}

/// Verbatim text for anything the vocabulary does not classify.
///
/// The inner text never equals the canonical string of a classified token.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Freeform(String);

impl Freeform {
    /// Returns `None` when `text` is the canonical string of a classified token.
    pub fn new(text: impl Into<String>) -> Option<Self> {
        let text = text.into();
        if CANONICAL.contains_key(text.as_str()) {
            None
        } else {
            Some(Self(text))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Grouping used by the serializer and parser to decide merge/split behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenClass {
    Directional,
    Button,
    Movement,
    Modifier,
    Connector,
    Marker,
    Freeform,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum InputToken {
    Direction(Direction),
    JumpCancel(JumpCancel),
    Button(Button),
    Movement(Movement),
    Modifier(Modifier),
    Connector(Connector),
    /// `tag`: tag-in marker.
    Tag,
    Other(Freeform),
}

/// Every classified token, in no particular order.
pub fn vocabulary() -> Vec<InputToken> {
    let mut v: Vec<InputToken> = Direction::ALL.iter().map(|d| InputToken::Direction(*d)).collect();
    v.extend([JumpCancel::UpBack, JumpCancel::UpForward, JumpCancel::Bare].map(InputToken::JumpCancel));
    v.extend(Button::ALL.map(InputToken::Button));
    v.extend([Movement::Dash, Movement::BackDash].map(InputToken::Movement));
    v.extend([Modifier::Air, Modifier::Delay, Modifier::Whiff, Modifier::Hold].map(InputToken::Modifier));
    v.extend(
        [Connector::Plus, Connector::Then, Connector::Link, Connector::Chain, Connector::Or, Connector::Comma]
            .map(InputToken::Connector),
    );
    v.push(InputToken::Tag);
    v
}

static CANONICAL: LazyLock<HashMap<&'static str, InputToken>> = LazyLock::new(|| {
    vocabulary()
        .into_iter()
        .filter_map(|t| t.static_canonical().map(|s| (s, t)))
        .collect()
});

/// Lowercased notation glyphs and aliases → token, for the parser.
static GLYPHS: LazyLock<HashMap<&'static str, InputToken>> = LazyLock::new(|| {
    let mut m: HashMap<&'static str, InputToken> = HashMap::new();
    for d in Direction::ALL {
        m.insert(d.as_str(), InputToken::Direction(d));
    }
    m.insert("7jc", InputToken::JumpCancel(JumpCancel::UpBack));
    m.insert("9jc", InputToken::JumpCancel(JumpCancel::UpForward));
    m.insert("jc", InputToken::JumpCancel(JumpCancel::Bare));
    m.insert("l", InputToken::Button(Button::L));
    m.insert("m", InputToken::Button(Button::M));
    m.insert("h", InputToken::Button(Button::H));
    m.insert("s1", InputToken::Button(Button::S1));
    m.insert("s2", InputToken::Button(Button::S2));
    m.insert("t", InputToken::Connector(Connector::Link));
    m.insert("+", InputToken::Connector(Connector::Plus));
    m.insert(">", InputToken::Connector(Connector::Then));
    m.insert("~", InputToken::Connector(Connector::Chain));
    m.insert("or", InputToken::Connector(Connector::Or));
    m.insert("/", InputToken::Connector(Connector::Or));
    m.insert(",", InputToken::Connector(Connector::Comma));
    m.insert("66", InputToken::Movement(Movement::Dash));
    m.insert("44", InputToken::Movement(Movement::BackDash));
    m.insert("tag", InputToken::Tag);
    m.insert("dl", InputToken::Modifier(Modifier::Delay));
    m.insert("d", InputToken::Modifier(Modifier::Delay));
    m
});

impl InputToken {
    /// Build a token from its canonical string; unknown text becomes `Other`.
    pub fn from_canonical(text: &str) -> Self {
        match CANONICAL.get(text) {
            Some(t) => t.clone(),
            None => Self::Other(Freeform(text.to_string())),
        }
    }

    /// Case-insensitive lookup in the notation glyph table.
    pub fn from_glyph(text: &str) -> Option<Self> {
        GLYPHS.get(text.to_lowercase().as_str()).cloned()
    }

    fn static_canonical(&self) -> Option<&'static str> {
        Some(match self {
            Self::Direction(d) => d.as_str(),
            Self::JumpCancel(j) => j.as_str(),
            Self::Button(b) => b.as_str(),
            Self::Movement(Movement::Dash) => "D",
            Self::Movement(Movement::BackDash) => "BD",
            Self::Modifier(Modifier::Air) => "air",
            Self::Modifier(Modifier::Delay) => "delay",
            Self::Modifier(Modifier::Whiff) => "whiff",
            Self::Modifier(Modifier::Hold) => "hold",
            Self::Connector(Connector::Plus) => "+",
            Self::Connector(Connector::Then) => ">",
            Self::Connector(Connector::Link) => "T",
            Self::Connector(Connector::Chain) => "~",
            Self::Connector(Connector::Or) => "or",
            Self::Connector(Connector::Comma) => ",",
            Self::Tag => "tag",
            Self::Other(_) => return None,
        })
    }

    pub fn canonical(&self) -> &str {
        match self {
            Self::Other(f) => f.as_str(),
            _ => self.static_canonical().unwrap_or_default(),
        }
    }

    /// Notation glyph for a standalone token.
    pub fn glyph(&self) -> Cow<'static, str> {
        let s = match self {
            Self::Movement(Movement::Dash) => "66",
            Self::Movement(Movement::BackDash) => "44",
            Self::Modifier(Modifier::Air) => "j.",
            Self::Modifier(Modifier::Delay) => "d.",
            Self::Modifier(Modifier::Whiff) => "w.",
            Self::Modifier(Modifier::Hold) => "[HOLD]",
            Self::Connector(Connector::Plus) => " + ",
            Self::Connector(Connector::Then) => " > ",
            Self::Connector(Connector::Or) => "/",
            Self::Connector(Connector::Comma) => ", ",
            Self::Tag => "TAG",
            Self::Other(f) => return Cow::Owned(f.as_str().to_uppercase()),
            _ => return Cow::Borrowed(self.static_canonical().unwrap_or_default()),
        };
        Cow::Borrowed(s)
    }

    pub fn class(&self) -> TokenClass {
        match self {
            Self::Direction(_) | Self::JumpCancel(_) => TokenClass::Directional,
            Self::Button(_) => TokenClass::Button,
            Self::Movement(_) => TokenClass::Movement,
            Self::Modifier(_) => TokenClass::Modifier,
            Self::Connector(_) => TokenClass::Connector,
            Self::Tag => TokenClass::Marker,
            Self::Other(_) => TokenClass::Freeform,
        }
    }

    pub fn is_directional(&self) -> bool {
        self.class() == TokenClass::Directional
    }

    pub fn is_connector(&self) -> bool {
        self.class() == TokenClass::Connector
    }

    pub fn is_neutral(&self) -> bool {
        matches!(self, Self::Direction(Direction::Neutral))
    }

    pub fn modifier(&self) -> Option<Modifier> {
        match self {
            Self::Modifier(m) => Some(*m),
            _ => None,
        }
    }

    /// Whether a directional token immediately before this one fuses with it
    /// into a single `<dir><btn>` segment.
    pub fn merges_after_direction(&self) -> bool {
        !matches!(
            self.class(),
            TokenClass::Directional | TokenClass::Modifier | TokenClass::Connector
        )
    }
}

impl fmt::Display for InputToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical())
    }
}

impl From<&str> for InputToken {
    fn from(text: &str) -> Self {
        Self::from_canonical(text)
    }
}

impl From<String> for InputToken {
    fn from(text: String) -> Self {
        match CANONICAL.get(text.as_str()) {
            Some(t) => t.clone(),
            None => Self::Other(Freeform(text)),
        }
    }
}

impl From<InputToken> for String {
    fn from(token: InputToken) -> Self {
        match token {
            InputToken::Other(Freeform(text)) => text,
            other => other.canonical().to_string(),
        }
    }
}
