use crate::{
    cube::CubeN,
    notation::{Algorithm, Base, Face, Modifier, Move},
};
use fastrand::Rng;
use fxhash::FxHashSet;
use log::{debug, info};

/// Scrambles are this many moves per layer unless told otherwise.
pub const MOVES_PER_LAYER: usize = 8;

/// The moves a scramble is drawn from, all clockwise. A 2x2 only uses R, U
/// and F. Bigger cubes add every wide move up to half the cube.
pub fn scramble_moves(size: usize) -> Vec<Move> {
    let faces: &[Face] = if size == 2 {
        &[Face::R, Face::U, Face::F]
    } else {
        &Face::ALL
    };

    (1..=(size / 2).max(1))
        .flat_map(|width| {
            faces.iter().filter_map(move |&face| {
                Move::new(width, Base::Face(face), Modifier::Clockwise).ok()
            })
        })
        .collect()
}

impl CubeN {
    /// A uniformly random scramble move with a uniformly random modifier.
    pub fn random_move(&self, rng: &mut Rng) -> Move {
        let moves = scramble_moves(self.size());
        pick(rng, &moves)
    }

    /// Scramble the cube with `length` random moves, `8 × size` if `None`.
    /// Returns the moves that were applied.
    pub fn scramble(&mut self, length: Option<usize>) -> Algorithm {
        self.scramble_with(&mut Rng::new(), length)
    }

    /// [`CubeN::scramble`] drawing from the given generator, so a seeded
    /// generator gives a reproducible scramble.
    ///
    /// No move repeats the face of the move before it, and no move returns
    /// the cube to a state it was already in during this scramble, including
    /// the starting state.
    pub fn scramble_with(&mut self, rng: &mut Rng, length: Option<usize>) -> Algorithm {
        let length = length.unwrap_or(MOVES_PER_LAYER * self.size());
        let moves = scramble_moves(self.size());

        let mut seen = FxHashSet::default();
        seen.insert(self.state_hash());

        let mut scramble = Algorithm::default();
        let mut last_base = None;

        while scramble.len() < length {
            let candidate = pick(rng, &moves);

            if last_base == Some(candidate.base()) {
                continue;
            }

            self.state.execute(candidate);

            if !seen.insert(self.state_hash()) {
                debug!("Rejecting {candidate}, it revisits an earlier state");
                self.state.execute(candidate.inverse());
                continue;
            }

            last_base = Some(candidate.base());
            scramble += candidate;
        }

        info!(
            "Scrambled the {0}x{0}x{0} cube with {length} moves",
            self.size()
        );
        debug!("Scramble: {scramble}");

        scramble
    }
}

fn pick(rng: &mut Rng, moves: &[Move]) -> Move {
    let modifier = Modifier::ALL[rng.usize(..Modifier::ALL.len())];
    moves[rng.usize(..moves.len())].with_modifier(modifier)
}
