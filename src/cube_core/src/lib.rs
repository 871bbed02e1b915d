#![warn(clippy::pedantic)]
#![allow(clippy::missing_panics_doc, clippy::enum_glob_use)]

pub mod cube;
mod display;
pub mod face;
pub mod notation;
pub mod scramble;
mod turn;
pub mod validate;

pub use cube::{ConfigError, CubeError, CubeN, CubeState};
pub use face::FaceGrid;
pub use notation::{
    Algorithm, AlgorithmIssue, Axis, Base, Face, Modifier, Move, ParseError, Slice,
};
pub use validate::{ColorScheme, InvalidState};
