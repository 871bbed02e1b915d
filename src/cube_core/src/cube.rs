//! The cube itself: six face grids, the three whole cube rotations and the
//! single primitive layer turn that every other move is derived from.

use crate::{
    face::FaceGrid,
    notation::{Axis, Face, Modifier, ParseError},
};
use itertools::Itertools;
use std::{collections::BTreeMap, mem, ops::Index};
use thiserror::Error;

pub const DEFAULT_SIZE: usize = 3;
pub const DEFAULT_COLORS: [char; 6] = ['w', 'g', 'r', 'b', 'o', 'y'];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Cube size must be at least 2, got {0}")]
    SizeTooSmall(usize),
    #[error("There must be exactly 6 colors for the cube faces, got {0}")]
    WrongColorCount(usize),
    #[error("Colors for the cube faces must be unique, `{0}` is repeated")]
    DuplicateColor(char),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CubeError {
    #[error("Layer count must be at least 1 and less than the cube size {size}, got {layers}")]
    InvalidLayerCount { layers: usize, size: usize },
    #[error("Invalid cube configuration: {0}")]
    InvalidCubeConfig(#[from] ConfigError),
    #[error("{0}")]
    Parse(#[from] ParseError),
}

/// For each destination face in `Face::ALL` order, the face it is taken from
/// and how that face is turned on the way.
type RotationTable = [(Face, Option<Modifier>); 6];

const fn rotation_table(axis: Axis) -> RotationTable {
    use Face::*;
    use Modifier::*;

    match axis {
        Axis::X => [
            (F, None),
            (D, None),
            (R, Some(Clockwise)),
            (U, Some(Half)),
            (L, Some(CounterClockwise)),
            (B, Some(Half)),
        ],
        Axis::Y => [
            (U, Some(Clockwise)),
            (R, None),
            (B, None),
            (L, None),
            (F, None),
            (D, Some(CounterClockwise)),
        ],
        Axis::Z => [
            (L, Some(Clockwise)),
            (F, Some(Clockwise)),
            (U, Some(Clockwise)),
            (B, Some(CounterClockwise)),
            (D, Some(Clockwise)),
            (R, Some(Clockwise)),
        ],
    }
}

/// The stickers of all six faces, indexed by `Face`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CubeState {
    pub(crate) faces: [FaceGrid; 6],
}

impl CubeState {
    /// Every face filled with its own color, `colors` given in `Face::ALL`
    /// order.
    pub fn solved(size: usize, colors: [char; 6]) -> CubeState {
        CubeState {
            faces: colors.map(|color| FaceGrid::filled(size, color)),
        }
    }

    pub fn size(&self) -> usize {
        self.faces[Face::U as usize].size()
    }

    pub fn faces(&self) -> impl Iterator<Item = (Face, &FaceGrid)> {
        Face::ALL.into_iter().zip(&self.faces)
    }

    /// True if every face shows a single color. A rotated solved cube is
    /// still solved.
    pub fn is_solved(&self) -> bool {
        self.faces.iter().all(FaceGrid::is_uniform)
    }

    pub fn to_face_map(&self) -> BTreeMap<Face, Vec<Vec<char>>> {
        self.faces()
            .map(|(face, grid)| (face, grid.to_rows()))
            .collect()
    }

    /// Rotate the whole cube a quarter turn clockwise about `axis`.
    pub(crate) fn rotate(&mut self, axis: Axis) {
        let mut old = mem::take(&mut self.faces);

        // Every source face appears in the table exactly once
        self.faces = rotation_table(axis)
            .map(|(source, turn)| mem::take(&mut old[source as usize]).turned(turn));
    }

    /// Turn the top `layers` layers clockwise. The caller guarantees
    /// `1 <= layers < size`.
    pub(crate) fn u_turn_unchecked(&mut self, layers: usize) {
        let [u, f, r, b, l, _] = &mut self.faces;

        *u = u.rotated_cw();

        for row in 0..layers {
            // F takes R, R takes B, B takes L and L takes the old F
            f.row_mut(row).swap_with_slice(r.row_mut(row));
            r.row_mut(row).swap_with_slice(b.row_mut(row));
            b.row_mut(row).swap_with_slice(l.row_mut(row));
        }
    }
}

impl Index<Face> for CubeState {
    type Output = FaceGrid;

    fn index(&self, face: Face) -> &Self::Output {
        &self.faces[face as usize]
    }
}

/// An NxNxN cube together with the solved state it was created in.
///
/// ```
/// use cube_core::CubeN;
///
/// let mut cube = CubeN::new(4, "abcdef").unwrap();
/// cube.apply_str("Rw U2 (R U R' U')2").unwrap();
/// assert!(!cube.is_solved());
/// cube.reset();
/// assert!(cube.is_solved());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CubeN {
    size: usize,
    colors: [char; 6],
    pub(crate) state: CubeState,
    solved: CubeState,
}

impl CubeN {
    /// Create a solved cube. `colors` holds one symbol per face in
    /// `U F R B L D` order.
    ///
    /// # Errors
    ///
    /// `CubeError::InvalidCubeConfig` if the size is below 2 or the colors
    /// aren't six distinct symbols.
    pub fn new(size: usize, colors: &str) -> Result<CubeN, CubeError> {
        if size < 2 {
            return Err(ConfigError::SizeTooSmall(size).into());
        }

        let colors: [char; 6] = colors
            .chars()
            .collect::<Vec<_>>()
            .try_into()
            .map_err(|colors: Vec<char>| ConfigError::WrongColorCount(colors.len()))?;

        if let Some(&duplicate) = colors.iter().duplicates().next() {
            return Err(ConfigError::DuplicateColor(duplicate).into());
        }

        Ok(CubeN::from_valid_parts(size, colors))
    }

    fn from_valid_parts(size: usize, colors: [char; 6]) -> CubeN {
        let solved = CubeState::solved(size, colors);

        CubeN {
            size,
            colors,
            state: solved.clone(),
            solved,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn colors(&self) -> [char; 6] {
        self.colors
    }

    pub fn state(&self) -> &CubeState {
        &self.state
    }

    pub fn is_solved(&self) -> bool {
        self.state.is_solved()
    }

    /// Restore the state the cube was created in.
    pub fn reset(&mut self) {
        self.state.clone_from(&self.solved);
    }

    /// A hash of every sticker on the cube. Equal states hash equally.
    pub fn state_hash(&self) -> u64 {
        fxhash::hash64(&self.state)
    }

    pub fn to_face_map(&self) -> BTreeMap<Face, Vec<Vec<char>>> {
        self.state.to_face_map()
    }

    /// Rotate the whole cube a quarter turn clockwise about `axis`.
    pub fn rotate(&mut self, axis: Axis) -> &mut Self {
        self.state.rotate(axis);
        self
    }

    /// Turn the top `layers` layers clockwise. `u_turn(1)` is `U` and
    /// `u_turn(3)` is `3Uw`.
    ///
    /// # Errors
    ///
    /// If `layers` is zero or not less than the cube size.
    pub fn u_turn(&mut self, layers: usize) -> Result<&mut Self, CubeError> {
        self.check_layers(layers)?;
        self.state.u_turn_unchecked(layers);
        Ok(self)
    }

    pub(crate) fn check_layers(&self, layers: usize) -> Result<(), CubeError> {
        if layers == 0 || layers >= self.size {
            return Err(CubeError::InvalidLayerCount {
                layers,
                size: self.size,
            });
        }

        Ok(())
    }
}

impl Default for CubeN {
    fn default() -> Self {
        CubeN::from_valid_parts(DEFAULT_SIZE, DEFAULT_COLORS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn facelets(cube: &CubeN) -> String {
        [Face::U, Face::R, Face::F, Face::D, Face::L, Face::B]
            .into_iter()
            .flat_map(|face| cube.state()[face].stickers().to_vec())
            .collect()
    }

    #[test]
    fn test_new_rejects_bad_config() {
        let config_error = |size, colors| match CubeN::new(size, colors) {
            Err(CubeError::InvalidCubeConfig(err)) => err,
            other => panic!("expected a config error, got {other:?}"),
        };

        assert_eq!(config_error(1, "wgrboy"), ConfigError::SizeTooSmall(1));
        assert_eq!(config_error(0, "wgrboy"), ConfigError::SizeTooSmall(0));
        assert_eq!(config_error(3, "wgrbo"), ConfigError::WrongColorCount(5));
        assert_eq!(config_error(3, "wgrboyp"), ConfigError::WrongColorCount(7));
        assert_eq!(config_error(3, "wgrbow"), ConfigError::DuplicateColor('w'));

        assert_eq!(
            CubeN::new(1, "wgrboy").unwrap_err().to_string(),
            "Invalid cube configuration: Cube size must be at least 2, got 1"
        );
    }

    #[test]
    fn test_default_is_solved_three_by_three() {
        let cube = CubeN::default();
        assert_eq!(cube.size(), 3);
        assert_eq!(cube.colors(), DEFAULT_COLORS);
        assert!(cube.is_solved());
        assert_eq!(cube.state()[Face::R][(1, 1)], 'r');
        assert_eq!(cube, CubeN::new(3, "wgrboy").unwrap());
    }

    #[test]
    fn test_whole_cube_rotations() {
        let mut cube = CubeN::new(3, "UFRBLD").unwrap();
        cube.rotate(Axis::X);
        assert_eq!(
            facelets(&cube),
            "FFFFFFFFFRRRRRRRRRDDDDDDDDDBBBBBBBBBLLLLLLLLLUUUUUUUUU"
        );
        assert!(cube.is_solved());

        let mut cube = CubeN::new(3, "UFRBLD").unwrap();
        cube.rotate(Axis::Y);
        assert_eq!(
            facelets(&cube),
            "UUUUUUUUUBBBBBBBBBRRRRRRRRRDDDDDDDDDFFFFFFFFFLLLLLLLLL"
        );

        let mut cube = CubeN::new(3, "UFRBLD").unwrap();
        cube.rotate(Axis::Z);
        assert_eq!(
            facelets(&cube),
            "LLLLLLLLLUUUUUUUUUFFFFFFFFFRRRRRRRRRDDDDDDDDDBBBBBBBBB"
        );
    }

    #[test]
    fn test_four_rotations_are_identity() {
        let mut cube = CubeN::new(4, "UFRBLD").unwrap();
        cube.u_turn(1).unwrap().u_turn(2).unwrap();
        let before = cube.clone();

        for axis in [Axis::X, Axis::Y, Axis::Z] {
            for _ in 0..4 {
                cube.rotate(axis);
            }
            assert_eq!(cube, before);
        }
    }

    #[test]
    fn test_u_turn() {
        let mut cube = CubeN::new(3, "UFRBLD").unwrap();
        cube.u_turn(1).unwrap();
        assert_eq!(
            facelets(&cube),
            "UUUUUUUUUBBBRRRRRRRRRFFFFFFDDDDDDDDDFFFLLLLLLLLLBBBBBB"
        );

        for _ in 0..3 {
            cube.u_turn(1).unwrap();
        }
        assert!(cube.is_solved());
    }

    #[test]
    fn test_u_turn_layer_bounds() {
        let mut cube = CubeN::new(4, "UFRBLD").unwrap();
        assert_eq!(
            cube.u_turn(0).err(),
            Some(CubeError::InvalidLayerCount { layers: 0, size: 4 })
        );
        assert_eq!(
            cube.u_turn(4).err(),
            Some(CubeError::InvalidLayerCount { layers: 4, size: 4 })
        );
        assert!(cube.is_solved());
        assert!(cube.u_turn(3).is_ok());
    }

    #[test]
    fn test_reset_does_not_alias_solved() {
        let mut cube = CubeN::default();
        let solved_hash = cube.state_hash();

        cube.u_turn(1).unwrap();
        assert!(!cube.is_solved());
        assert_ne!(cube.state_hash(), solved_hash);

        cube.reset();
        assert!(cube.is_solved());
        assert_eq!(cube.state_hash(), solved_hash);

        cube.u_turn(1).unwrap();
        cube.reset();
        assert_eq!(cube.state_hash(), solved_hash);
    }

    #[test]
    fn test_face_map() {
        let cube = CubeN::new(2, "abcdef").unwrap();
        let map = cube.to_face_map();
        assert_eq!(map.len(), 6);
        assert_eq!(map[&Face::B], vec![vec!['d', 'd'], vec!['d', 'd']]);
    }
}
