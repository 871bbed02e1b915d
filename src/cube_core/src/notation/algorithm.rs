use super::{AlgorithmIssue, Move, ParseError, parse::parse_algorithm};
use itertools::Itertools;
use std::{
    fmt,
    ops::{Add, AddAssign, Neg},
    str::FromStr,
};

/// An ordered sequence of moves. Insertion order is execution order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Algorithm {
    moves: Vec<Move>,
}

impl Algorithm {
    pub fn new(moves: Vec<Move>) -> Algorithm {
        Algorithm { moves }
    }

    /// Parse notation such as `U R2 F' 3Rw2 (R U')3 D`.
    ///
    /// # Errors
    ///
    /// See [`parse_algorithm`].
    pub fn parse(notation: &str) -> Result<Algorithm, ParseError> {
        parse_algorithm(notation)
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }

    /// The algorithm that undoes this one: the moves in reverse order, each
    /// inverted.
    #[must_use]
    pub fn inverse(&self) -> Algorithm {
        self.moves.iter().rev().map(|move_| move_.inverse()).collect()
    }

    /// This algorithm performed `times` times in a row.
    ///
    /// # Errors
    ///
    /// If `times` is zero.
    pub fn repeat(&self, times: usize) -> Result<Algorithm, ParseError> {
        if times == 0 {
            return Err(ParseError::InvalidAlgorithm {
                algorithm: self.to_string(),
                reason: AlgorithmIssue::InvalidRepeatCount(times.to_string()),
            });
        }

        Ok(Algorithm::new(self.moves.repeat(times)))
    }

    /// This algorithm followed by the parsed `notation`.
    ///
    /// # Errors
    ///
    /// If `notation` fails to parse.
    pub fn concat_notation(&self, notation: &str) -> Result<Algorithm, ParseError> {
        Ok(self.clone() + Algorithm::parse(notation)?)
    }
}

impl Neg for Algorithm {
    type Output = Algorithm;

    fn neg(self) -> Self::Output {
        self.inverse()
    }
}

impl Neg for &Algorithm {
    type Output = Algorithm;

    fn neg(self) -> Self::Output {
        self.inverse()
    }
}

impl Add<Move> for Algorithm {
    type Output = Algorithm;

    fn add(mut self, rhs: Move) -> Self::Output {
        self.moves.push(rhs);
        self
    }
}

impl Add<Algorithm> for Algorithm {
    type Output = Algorithm;

    fn add(mut self, rhs: Algorithm) -> Self::Output {
        self.moves.extend(rhs.moves);
        self
    }
}

impl Add<&Algorithm> for Algorithm {
    type Output = Algorithm;

    fn add(mut self, rhs: &Algorithm) -> Self::Output {
        self.moves.extend_from_slice(&rhs.moves);
        self
    }
}

impl AddAssign<Move> for Algorithm {
    fn add_assign(&mut self, rhs: Move) {
        self.moves.push(rhs);
    }
}

impl AddAssign<&Algorithm> for Algorithm {
    fn add_assign(&mut self, rhs: &Algorithm) {
        self.moves.extend_from_slice(&rhs.moves);
    }
}

impl From<Move> for Algorithm {
    fn from(value: Move) -> Self {
        Algorithm::new(vec![value])
    }
}

impl From<Vec<Move>> for Algorithm {
    fn from(value: Vec<Move>) -> Self {
        Algorithm::new(value)
    }
}

impl FromIterator<Move> for Algorithm {
    fn from_iter<T: IntoIterator<Item = Move>>(iter: T) -> Self {
        Algorithm::new(iter.into_iter().collect())
    }
}

impl Extend<Move> for Algorithm {
    fn extend<T: IntoIterator<Item = Move>>(&mut self, iter: T) {
        self.moves.extend(iter);
    }
}

impl IntoIterator for Algorithm {
    type Item = Move;
    type IntoIter = std::vec::IntoIter<Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.into_iter()
    }
}

impl<'a> IntoIterator for &'a Algorithm {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

impl FromStr for Algorithm {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::parse(s)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.moves.iter().join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notation::{Base, Face, Modifier};

    #[test]
    fn test_display() {
        let alg = Algorithm::new(vec![
            Move::single(Base::Face(Face::U), Modifier::Clockwise),
            Move::single(Base::Face(Face::R), Modifier::CounterClockwise),
        ]);
        assert_eq!(alg.to_string(), "U R'");
        assert_eq!(alg.len(), 2);
        assert_eq!(Algorithm::default().to_string(), "");
    }

    #[test]
    fn test_add_move() {
        let alg = Algorithm::parse("U").unwrap() + Move::parse("R").unwrap();
        assert_eq!(alg.to_string(), "U R");
    }

    #[test]
    fn test_add_notation() {
        let alg = Algorithm::parse("U").unwrap();
        assert_eq!(alg.concat_notation("R2 F'").unwrap().to_string(), "U R2 F'");
        assert!(alg.concat_notation("R2 (F'").is_err());
    }

    #[test]
    fn test_add_algorithm() {
        let a1 = Algorithm::parse("U R").unwrap();
        let a2 = Algorithm::parse("F2 U'").unwrap();
        assert_eq!((a1.clone() + &a2).to_string(), "U R F2 U'");
        assert_eq!((a1 + a2).to_string(), "U R F2 U'");
    }

    #[test]
    fn test_repeat() {
        let alg = Algorithm::parse("R U").unwrap();
        assert_eq!(alg.repeat(3).unwrap().to_string(), "R U R U R U");
        assert_eq!(alg.repeat(1).unwrap(), alg);
        assert!(matches!(
            alg.repeat(0),
            Err(ParseError::InvalidAlgorithm {
                reason: AlgorithmIssue::InvalidRepeatCount(_),
                ..
            })
        ));
    }

    #[test]
    fn test_inverse() {
        let alg = Algorithm::parse("U R' F2").unwrap();
        assert_eq!(alg.inverse().to_string(), "F2 R U'");

        let alg = Algorithm::parse("U R 3Lw' x").unwrap();
        assert_eq!((-&alg).to_string(), "x' 3Lw R' U'");
        assert_eq!(-(-alg.clone()), alg);
    }
}
