//! Executing moves. Whole cube rotations and the U layer turn are the only
//! primitives; every other move is a fixed sequence of them.

use crate::{
    cube::{CubeError, CubeN, CubeState},
    notation::{Algorithm, Axis, Base, Face, Modifier, Move, Slice},
};
use log::trace;

const fn rotation(axis: Axis, modifier: Modifier) -> Move {
    Move::single(Base::Rotation(axis), modifier)
}

const fn face(face: Face, modifier: Modifier) -> Move {
    Move::single(Base::Face(face), modifier)
}

/// The rotations that bring `face` to the top and take it back again. `None`
/// for U, which needs no setup.
const fn conjugation(face: Face) -> Option<(Move, Move)> {
    use Axis::*;
    use Modifier::*;

    match face {
        Face::U => None,
        Face::D => Some((rotation(X, Half), rotation(X, Half))),
        Face::L => Some((rotation(Z, Clockwise), rotation(Z, CounterClockwise))),
        Face::R => Some((rotation(Z, CounterClockwise), rotation(Z, Clockwise))),
        Face::F => Some((rotation(X, Clockwise), rotation(X, CounterClockwise))),
        Face::B => Some((rotation(X, CounterClockwise), rotation(X, Clockwise))),
    }
}

/// A middle slice is both outer layers turned against each other, followed by
/// a rotation that puts the centers back.
const fn slice_recipe(slice: Slice) -> [Move; 3] {
    use Modifier::*;

    match slice {
        Slice::M => [
            face(Face::L, CounterClockwise),
            face(Face::R, Clockwise),
            rotation(Axis::X, CounterClockwise),
        ],
        Slice::E => [
            face(Face::U, Clockwise),
            face(Face::D, CounterClockwise),
            rotation(Axis::Y, CounterClockwise),
        ],
        Slice::S => [
            face(Face::F, CounterClockwise),
            face(Face::B, Clockwise),
            rotation(Axis::Z, Clockwise),
        ],
    }
}

/// A lowercase move is a rotation plus a turn of the opposite outer layer.
const fn thick_recipe(thick: Face) -> [Move; 2] {
    use Modifier::*;

    match thick {
        Face::U => [rotation(Axis::Y, Clockwise), face(Face::D, Clockwise)],
        Face::D => [rotation(Axis::Y, CounterClockwise), face(Face::U, Clockwise)],
        Face::L => [rotation(Axis::X, CounterClockwise), face(Face::R, Clockwise)],
        Face::R => [rotation(Axis::X, Clockwise), face(Face::L, Clockwise)],
        Face::F => [rotation(Axis::Z, Clockwise), face(Face::B, Clockwise)],
        Face::B => [rotation(Axis::Z, CounterClockwise), face(Face::F, Clockwise)],
    }
}

impl CubeState {
    /// Apply a move whose width is already known to fit the cube.
    pub(crate) fn execute(&mut self, move_: Move) {
        for _ in 0..move_.modifier().quarter_turns() {
            self.quarter_turn(move_.width(), move_.base());
        }
    }

    fn quarter_turn(&mut self, width: usize, base: Base) {
        match base {
            Base::Rotation(axis) => self.rotate(axis),
            Base::Face(face) => match conjugation(face) {
                None => self.u_turn_unchecked(width),
                Some((setup, undo)) => {
                    self.execute(setup);
                    self.u_turn_unchecked(width);
                    self.execute(undo);
                }
            },
            Base::Slice(slice) => {
                for move_ in slice_recipe(slice) {
                    self.execute(move_);
                }
            }
            Base::Thick(face) => {
                for move_ in thick_recipe(face) {
                    self.execute(move_);
                }
            }
        }
    }
}

impl CubeN {
    /// Apply a single move.
    ///
    /// # Errors
    ///
    /// If the move is at least as wide as the cube. The cube is untouched in
    /// that case.
    pub fn turn(&mut self, move_: Move) -> Result<&mut Self, CubeError> {
        self.check_layers(move_.width())?;
        self.state.execute(move_);
        Ok(self)
    }

    /// Apply every move of `algorithm` in order. Returns the cube so calls
    /// can be chained.
    ///
    /// # Errors
    ///
    /// If any move is at least as wide as the cube. Every move is checked
    /// before the first one is applied, so a failing algorithm leaves the
    /// cube untouched.
    pub fn apply(&mut self, algorithm: &Algorithm) -> Result<&mut Self, CubeError> {
        for move_ in algorithm {
            self.check_layers(move_.width())?;
        }

        trace!("Applying {} moves", algorithm.len());

        for &move_ in algorithm {
            self.state.execute(move_);
        }

        Ok(self)
    }

    /// Parse `notation` and apply it.
    ///
    /// # Errors
    ///
    /// If the notation fails to parse or [`CubeN::apply`] fails.
    pub fn apply_str(&mut self, notation: &str) -> Result<&mut Self, CubeError> {
        let algorithm = Algorithm::parse(notation)?;
        self.apply(&algorithm)
    }
}
