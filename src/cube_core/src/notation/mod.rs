//! Move notation: the values a move is made of, the `Move` type itself, and
//! the parser that turns text into moves and algorithms.

use std::{fmt, ops::Neg, str::FromStr};
use thiserror::Error;

pub mod algorithm;
pub mod parse;

pub use algorithm::Algorithm;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid move: {0}")]
    InvalidMove(String),
    #[error("Invalid algorithm: {algorithm}\nwith reason: {reason}")]
    InvalidAlgorithm {
        algorithm: String,
        reason: AlgorithmIssue,
    },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AlgorithmIssue {
    #[error("Mismatched parentheses: a `)` has no matching `(`")]
    UnmatchedClose,
    #[error("Unmatched `(` in algorithm string")]
    UnmatchedOpen,
    #[error("Invalid multiplier `{0}`, expected a positive integer")]
    InvalidRepeatCount(String),
    #[error("Repeated groups expand to more moves than fit in memory")]
    ExpansionTooLarge,
}

/// One of the six faces of the cube. The discriminants index per-face arrays.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Face {
    U,
    F,
    R,
    B,
    L,
    D,
}

impl Face {
    pub const ALL: [Self; 6] = {
        use Face::*;
        let v = [U, F, R, B, L, D];

        let mut i = 0;
        while i < v.len() {
            assert!(i == v[i] as usize);
            i += 1;
        }

        v
    };

    pub const fn letter(self) -> char {
        match self {
            Face::U => 'U',
            Face::F => 'F',
            Face::R => 'R',
            Face::B => 'B',
            Face::L => 'L',
            Face::D => 'D',
        }
    }

    pub const fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'U' => Some(Face::U),
            'F' => Some(Face::F),
            'R' => Some(Face::R),
            'B' => Some(Face::B),
            'L' => Some(Face::L),
            'D' => Some(Face::D),
            _ => None,
        }
    }
}

impl FromStr for Face {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next().and_then(Face::from_letter), chars.next()) {
            (Some(face), None) => Ok(face),
            _ => Err(ParseError::InvalidMove(s.to_owned())),
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// The axis of a whole cube rotation. `X` follows R, `Y` follows U and `Z`
/// follows F.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// A middle slice. `M` follows L, `E` follows D and `S` follows F.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Slice {
    M,
    E,
    S,
}

/// The letter a move is written with.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Base {
    /// An outer face turn. This is the only base that may be wide.
    Face(Face),
    /// The lowercase moves (`u`, `r`, ...), which turn two layers on a 3x3.
    Thick(Face),
    /// A rotation of the whole cube.
    Rotation(Axis),
    /// A middle slice turn.
    Slice(Slice),
}

impl Base {
    pub const fn letter(self) -> char {
        match self {
            Base::Face(face) => face.letter(),
            Base::Thick(face) => face.letter().to_ascii_lowercase(),
            Base::Rotation(Axis::X) => 'x',
            Base::Rotation(Axis::Y) => 'y',
            Base::Rotation(Axis::Z) => 'z',
            Base::Slice(Slice::M) => 'M',
            Base::Slice(Slice::E) => 'E',
            Base::Slice(Slice::S) => 'S',
        }
    }

    pub const fn from_letter(letter: char) -> Option<Self> {
        if let Some(face) = Face::from_letter(letter) {
            return Some(Base::Face(face));
        }

        match letter {
            'u' | 'f' | 'r' | 'b' | 'l' | 'd' => match Face::from_letter(letter.to_ascii_uppercase()) {
                Some(face) => Some(Base::Thick(face)),
                None => None,
            },
            'x' => Some(Base::Rotation(Axis::X)),
            'y' => Some(Base::Rotation(Axis::Y)),
            'z' => Some(Base::Rotation(Axis::Z)),
            'M' => Some(Base::Slice(Slice::M)),
            'E' => Some(Base::Slice(Slice::E)),
            'S' => Some(Base::Slice(Slice::S)),
            _ => None,
        }
    }
}

/// How far and in which direction a move turns.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Modifier {
    Clockwise,
    CounterClockwise,
    Half,
}

impl Modifier {
    pub const ALL: [Self; 3] = [
        Modifier::Clockwise,
        Modifier::CounterClockwise,
        Modifier::Half,
    ];

    #[must_use]
    pub const fn inverse(self) -> Self {
        match self {
            Modifier::Clockwise => Modifier::CounterClockwise,
            Modifier::CounterClockwise => Modifier::Clockwise,
            Modifier::Half => Modifier::Half,
        }
    }

    /// The number of clockwise quarter turns this modifier amounts to
    pub const fn quarter_turns(self) -> usize {
        match self {
            Modifier::Clockwise => 1,
            Modifier::Half => 2,
            Modifier::CounterClockwise => 3,
        }
    }

    pub const fn suffix(self) -> &'static str {
        match self {
            Modifier::Clockwise => "",
            Modifier::CounterClockwise => "'",
            Modifier::Half => "2",
        }
    }

    pub fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix {
            "" => Some(Modifier::Clockwise),
            "'" => Some(Modifier::CounterClockwise),
            "2" => Some(Modifier::Half),
            _ => None,
        }
    }
}

/// A single move such as `U`, `R'`, `x2` or `3Fw'`.
///
/// `width` is the number of layers turned from the outer face. Anything above
/// one makes the move wide, which only outer face letters allow.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Move {
    width: usize,
    base: Base,
    modifier: Modifier,
}

impl Move {
    /// A single layer move. Always valid.
    pub const fn single(base: Base, modifier: Modifier) -> Move {
        Move {
            width: 1,
            base,
            modifier,
        }
    }

    /// # Errors
    ///
    /// If `width` is zero, or if `width` is above one for a base that cannot
    /// be wide.
    pub fn new(width: usize, base: Base, modifier: Modifier) -> Result<Move, ParseError> {
        let wide_capable = matches!(base, Base::Face(_));

        if width == 0 || (width > 1 && !wide_capable) {
            return Err(ParseError::InvalidMove(format!(
                "{width}{}w{}",
                base.letter(),
                modifier.suffix()
            )));
        }

        Ok(Move {
            width,
            base,
            modifier,
        })
    }

    /// Parse a single move token like `3Rw2`.
    ///
    /// # Errors
    ///
    /// If the token does not follow `[width] letter ['w'] ['2' | ''']`.
    pub fn parse(token: &str) -> Result<Move, ParseError> {
        parse::parse_move(token)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn base(&self) -> Base {
        self.base
    }

    pub fn modifier(&self) -> Modifier {
        self.modifier
    }

    pub fn is_wide(&self) -> bool {
        self.width > 1
    }

    #[must_use]
    pub fn with_modifier(self, modifier: Modifier) -> Move {
        Move { modifier, ..self }
    }

    #[must_use]
    pub fn inverse(self) -> Move {
        self.with_modifier(self.modifier.inverse())
    }
}

impl Neg for Move {
    type Output = Move;

    fn neg(self) -> Self::Output {
        self.inverse()
    }
}

impl FromStr for Move {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Move::parse(s)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `Rw` is implicitly two layers wide
        if self.width > 2 {
            write!(f, "{}", self.width)?;
        }

        write!(f, "{}", self.base.letter())?;

        if self.is_wide() {
            f.write_str("w")?;
        }

        f.write_str(self.modifier.suffix())
    }
}
