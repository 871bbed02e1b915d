//! Checks that a sticker layout could belong to a real cube. Works on the
//! plain face map from [`CubeN::to_face_map`](crate::CubeN::to_face_map) so
//! layouts from anywhere can be checked.
//!
//! Corner twist and permutation parity are not checked.

use crate::notation::Face;
use fxhash::FxHashMap;
use itertools::Itertools;
use std::collections::{BTreeMap, BTreeSet};
use thiserror::Error;

pub type FaceMap = BTreeMap<Face, Vec<Vec<char>>>;

/// One color per face in `Face::ALL` order.
pub type ColorScheme = [char; 6];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidState {
    #[error("Cube size must be at least 2, got {0}")]
    SizeTooSmall(usize),
    #[error("Face {0} is missing")]
    MissingFace(Face),
    #[error("Face {face} is not a {size}x{size} grid")]
    WrongShape { face: Face, size: usize },
    #[error("Center color `{0}` appears on more than one face")]
    DuplicateCenters(char),
    #[error("Expected 6 colors, found {0}")]
    WrongColorCount(usize),
    #[error("Color `{color}` appears {count} times instead of {expected}")]
    UnbalancedColor {
        color: char,
        count: usize,
        expected: usize,
    },
    #[error("Color `{0}` has no single opposite color")]
    NoOppositeColor(char),
    #[error("The corner at {corner} shows {colors:?}, which no corner piece has")]
    InvalidCorner { corner: String, colors: [char; 3] },
    #[error("The corner piece {0:?} appears more than once")]
    DuplicateCorner([char; 3]),
    #[error("Opposite centers `{0}` and `{1}` are not opposite colors")]
    MismatchedCenters(char, char),
}

/// The eight corner slots, each listing its faces clockwise as seen from
/// outside the cube. The first slot, URF, defines the color scheme.
const CORNERS: [[Face; 3]; 8] = {
    use Face::*;
    [
        [U, R, F],
        [U, F, L],
        [U, L, B],
        [U, B, R],
        [D, F, R],
        [D, L, F],
        [D, B, L],
        [D, R, B],
    ]
};

/// The faces along the top, bottom, left and right edges of `face` as it is
/// laid out in a grid.
const fn borders(face: Face) -> [Face; 4] {
    use Face::*;

    match face {
        U => [B, F, L, R],
        D => [F, B, L, R],
        F => [U, D, L, R],
        R => [U, D, F, B],
        B => [U, D, R, L],
        L => [U, D, B, F],
    }
}

const fn opposite(face: Face) -> Face {
    match face {
        Face::U => Face::D,
        Face::D => Face::U,
        Face::F => Face::B,
        Face::B => Face::F,
        Face::R => Face::L,
        Face::L => Face::R,
    }
}

/// The grid position on `face` of the corner it shares with `a` and `b`.
fn corner_position(face: Face, a: Face, b: Face, size: usize) -> (usize, usize) {
    let [top, _, left, _] = borders(face);
    let touches = |edge| a == edge || b == edge;

    let row = if touches(top) { 0 } else { size - 1 };
    let col = if touches(left) { 0 } else { size - 1 };

    (row, col)
}

fn read_corner(state: &FaceMap, slot: [Face; 3], size: usize) -> [char; 3] {
    let [a, b, c] = slot;

    [(a, b, c), (b, c, a), (c, a, b)].map(|(face, x, y)| {
        let (row, col) = corner_position(face, x, y, size);
        state[&face][row][col]
    })
}

fn slot_name(slot: [Face; 3]) -> String {
    slot.iter().map(|face| face.letter()).collect()
}

/// Whether `a` is `b` read starting from another sticker.
fn is_rotation_of(a: [char; 3], b: [char; 3]) -> bool {
    (0..3).any(|shift| {
        let mut rotated = b;
        rotated.rotate_left(shift);
        rotated == a
    })
}

/// Check that every face is present as a `size`x`size` grid, that the centers
/// of an odd cube differ, and that six colors each cover one face's worth of
/// stickers.
///
/// # Errors
///
/// The first problem found.
pub fn validate_shape(state: &FaceMap, size: usize) -> Result<(), InvalidState> {
    if size < 2 {
        return Err(InvalidState::SizeTooSmall(size));
    }

    for face in Face::ALL {
        let grid = state.get(&face).ok_or(InvalidState::MissingFace(face))?;

        if grid.len() != size || grid.iter().any(|row| row.len() != size) {
            return Err(InvalidState::WrongShape { face, size });
        }
    }

    if size % 2 == 1 {
        let mid = size / 2;
        if let Some(center) = state.values().map(|grid| grid[mid][mid]).duplicates().next() {
            return Err(InvalidState::DuplicateCenters(center));
        }
    }

    let mut counts = FxHashMap::<char, usize>::default();
    for &sticker in state.values().flatten().flatten() {
        *counts.entry(sticker).or_default() += 1;
    }

    if counts.len() != 6 {
        return Err(InvalidState::WrongColorCount(counts.len()));
    }

    let expected = size * size;
    if let Some((&color, &count)) = counts
        .iter()
        .sorted()
        .find(|&(_, &count)| count != expected)
    {
        return Err(InvalidState::UnbalancedColor {
            color,
            count,
            expected,
        });
    }

    Ok(())
}

/// Derive the color of every face from the corners. The URF corner fixes the
/// colors of U, R and F. The remaining faces take the one color that never
/// shares a corner with the color of the face opposite them.
///
/// A cube that was rotated as a whole gives the scheme as seen in its
/// current orientation.
///
/// # Errors
///
/// If the shape is invalid, or the corners don't pair every color with
/// exactly one opposite.
pub fn color_scheme(state: &FaceMap, size: usize) -> Result<ColorScheme, InvalidState> {
    validate_shape(state, size)?;

    let readings = CORNERS.map(|slot| read_corner(state, slot, size));
    let colors = state
        .values()
        .flatten()
        .flatten()
        .copied()
        .collect::<BTreeSet<_>>();

    let opposite_color = |color: char| {
        let neighbours = readings
            .iter()
            .filter(|reading| reading.contains(&color))
            .flatten()
            .copied()
            .collect::<BTreeSet<_>>();

        colors
            .iter()
            .filter(|&&other| other != color && !neighbours.contains(&other))
            .exactly_one()
            .copied()
            .map_err(|_| InvalidState::NoOppositeColor(color))
    };

    let [u, r, f] = readings[0];
    let mut scheme = ['\0'; 6];

    for (face, color) in [(Face::U, u), (Face::R, r), (Face::F, f)] {
        scheme[face as usize] = color;
        scheme[opposite(face) as usize] = opposite_color(color)?;
    }

    if !scheme.iter().all_unique() {
        return Err(InvalidState::NoOppositeColor(u));
    }

    Ok(scheme)
}

/// Fully validate a layout and return its color scheme.
///
/// On top of [`color_scheme`], every corner slot must hold a real corner piece
/// of that scheme, read in the right rotational order, with no piece
/// appearing twice. On odd cubes opposite centers must be opposite colors.
///
/// # Errors
///
/// The first problem found.
pub fn validate(state: &FaceMap, size: usize) -> Result<ColorScheme, InvalidState> {
    let scheme = color_scheme(state, size)?;
    let pieces = CORNERS.map(|slot| slot.map(|face| scheme[face as usize]));
    let mut used = [false; 8];

    for slot in CORNERS {
        let colors = read_corner(state, slot, size);

        let piece = pieces
            .iter()
            .position(|&piece| is_rotation_of(colors, piece))
            .ok_or_else(|| InvalidState::InvalidCorner {
                corner: slot_name(slot),
                colors,
            })?;

        if used[piece] {
            return Err(InvalidState::DuplicateCorner(pieces[piece]));
        }
        used[piece] = true;
    }

    if size % 2 == 1 {
        let mid = size / 2;
        let opposite_of = |color: char| {
            scheme
                .iter()
                .position(|&c| c == color)
                .map(|i| scheme[opposite(Face::ALL[i]) as usize])
        };

        for face in [Face::U, Face::F, Face::R] {
            let a = state[&face][mid][mid];
            let b = state[&opposite(face)][mid][mid];

            if opposite_of(a) != Some(b) {
                return Err(InvalidState::MismatchedCenters(a, b));
            }
        }
    }

    Ok(scheme)
}

pub fn is_valid(state: &FaceMap, size: usize) -> bool {
    validate(state, size).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CubeN;

    #[test]
    fn test_solved_scheme() {
        for size in 2..=7 {
            let cube = CubeN::new(size, "wgrboy").unwrap();
            assert_eq!(
                validate(&cube.to_face_map(), size),
                Ok(['w', 'g', 'r', 'b', 'o', 'y'])
            );
        }
    }

    #[test]
    fn test_corner_positions() {
        assert_eq!(corner_position(Face::U, Face::R, Face::F, 3), (2, 2));
        assert_eq!(corner_position(Face::U, Face::L, Face::B, 3), (0, 0));
        assert_eq!(corner_position(Face::B, Face::U, Face::R, 3), (0, 0));
        assert_eq!(corner_position(Face::L, Face::D, Face::F, 3), (2, 2));
        assert_eq!(corner_position(Face::D, Face::F, Face::R, 3), (0, 2));
        assert_eq!(corner_position(Face::R, Face::U, Face::B, 3), (0, 2));
    }

    #[test]
    fn test_rotation_of() {
        assert!(is_rotation_of(['a', 'b', 'c'], ['c', 'a', 'b']));
        assert!(is_rotation_of(['a', 'b', 'c'], ['a', 'b', 'c']));
        assert!(!is_rotation_of(['a', 'c', 'b'], ['a', 'b', 'c']));
    }

    #[test]
    fn test_rotated_cube_keeps_valid() {
        let mut cube = CubeN::new(3, "wgrboy").unwrap();
        cube.apply_str("x y").unwrap();
        let scheme = validate(&cube.to_face_map(), 3).unwrap();

        // The centers now read green on top and red in front
        assert_eq!(scheme[Face::U as usize], 'g');
        assert_eq!(scheme[Face::F as usize], 'r');
    }

    #[test]
    fn test_missing_face() {
        let mut map = CubeN::default().to_face_map();
        map.remove(&Face::L);
        assert_eq!(validate_shape(&map, 3), Err(InvalidState::MissingFace(Face::L)));
    }

    #[test]
    fn test_wrong_shape() {
        let mut map = CubeN::default().to_face_map();
        map.get_mut(&Face::D).unwrap()[1].pop();
        assert_eq!(
            validate_shape(&map, 3),
            Err(InvalidState::WrongShape {
                face: Face::D,
                size: 3
            })
        );
        assert_eq!(
            validate_shape(&CubeN::default().to_face_map(), 4),
            Err(InvalidState::WrongShape {
                face: Face::U,
                size: 4
            })
        );
    }

    #[test]
    fn test_duplicate_centers() {
        let mut map = CubeN::default().to_face_map();
        map.get_mut(&Face::F).unwrap()[1][1] = 'w';
        map.get_mut(&Face::U).unwrap()[0][0] = 'g';
        assert_eq!(validate_shape(&map, 3), Err(InvalidState::DuplicateCenters('w')));
    }

    #[test]
    fn test_color_counts() {
        let mut map = CubeN::new(2, "wgrboy").unwrap().to_face_map();
        map.get_mut(&Face::U).unwrap()[0][0] = 'g';
        assert_eq!(
            validate_shape(&map, 2),
            Err(InvalidState::UnbalancedColor {
                color: 'g',
                count: 5,
                expected: 4
            })
        );

        map.get_mut(&Face::U).unwrap()[0][0] = 'p';
        assert_eq!(validate_shape(&map, 2), Err(InvalidState::WrongColorCount(7)));
    }

    #[test]
    fn test_swapped_stickers_are_invalid() {
        // Swapping two stickers of one corner mirrors the piece
        let mut map = CubeN::default().to_face_map();
        map.get_mut(&Face::U).unwrap()[2][2] = 'r';
        map.get_mut(&Face::R).unwrap()[0][0] = 'w';
        assert!(validate_shape(&map, 3).is_ok());
        assert_eq!(
            validate(&map, 3),
            Err(InvalidState::InvalidCorner {
                corner: "UFL".to_owned(),
                colors: ['w', 'g', 'o'],
            })
        );
        assert!(!is_valid(&map, 3));
    }

    #[test]
    fn test_duplicate_corner() {
        // Two URF pieces and no ULB piece on a 2x2 with balanced colors
        let mut map = CubeN::new(2, "wgrboy").unwrap().to_face_map();
        map.get_mut(&Face::L).unwrap()[0][0] = 'r';
        map.get_mut(&Face::B).unwrap()[0][1] = 'g';
        map.get_mut(&Face::F).unwrap()[1][1] = 'b';
        map.get_mut(&Face::R).unwrap()[1][0] = 'o';
        assert!(validate_shape(&map, 2).is_ok());
        assert_eq!(
            validate(&map, 2),
            Err(InvalidState::DuplicateCorner(['w', 'r', 'g']))
        );
    }
}
