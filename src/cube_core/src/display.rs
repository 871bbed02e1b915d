use crate::{
    cube::{CubeN, CubeState},
    face::FaceGrid,
    notation::Face,
};
use itertools::Itertools;
use std::fmt;

fn spaced(stickers: &[char]) -> String {
    stickers.iter().join(" ")
}

impl fmt::Display for FaceGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let border = "─".repeat(2 * self.size() + 1);

        writeln!(f, "┌{border}┐")?;
        for row in self.rows() {
            writeln!(f, "│ {} │", spaced(row))?;
        }
        write!(f, "└{border}┘")
    }
}

/// An unfolded net: U on top, then L F R B side by side, then D.
impl fmt::Display for CubeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = self.size();
        let pad = " ".repeat(2 * size + 2);
        let border = "─".repeat(2 * size + 1);

        writeln!(f, "{pad}┌{border}┐")?;
        for row in self[Face::U].rows() {
            writeln!(f, "{pad}│ {} │", spaced(row))?;
        }

        writeln!(f, "┌{border}┼{border}┼{border}┬{border}┐")?;
        for i in 0..size {
            let [left, front, right, back] =
                [Face::L, Face::F, Face::R, Face::B].map(|face| spaced(self[face].row(i)));
            writeln!(f, "│ {left} │ {front} │ {right} │ {back} │")?;
        }
        writeln!(f, "└{border}┼{border}┼{border}┴{border}┘")?;

        for row in self[Face::D].rows() {
            writeln!(f, "{pad}│ {} │", spaced(row))?;
        }
        write!(f, "{pad}└{border}┘")
    }
}

impl fmt::Display for CubeN {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.state(), f)
    }
}

impl CubeN {
    /// A single face drawn in a box.
    pub fn show_face(&self, face: Face) -> String {
        self.state()[face].to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_face() {
        let mut cube = CubeN::new(3, "UFRBLD").unwrap();
        cube.apply_str("R").unwrap();

        assert_eq!(
            cube.show_face(Face::U),
            "┌───────┐\n│ U U F │\n│ U U F │\n│ U U F │\n└───────┘"
        );
    }

    #[test]
    fn test_net() {
        let cube = CubeN::new(2, "UFRBLD").unwrap();
        let expected = [
            "      ┌─────┐",
            "      │ U U │",
            "      │ U U │",
            "┌─────┼─────┼─────┬─────┐",
            "│ L L │ F F │ R R │ B B │",
            "│ L L │ F F │ R R │ B B │",
            "└─────┼─────┼─────┴─────┘",
            "      │ D D │",
            "      │ D D │",
            "      └─────┘",
        ]
        .join("\n");

        assert_eq!(cube.to_string(), expected);
    }
}
