//! Initial-conformation generators: the linear walk and the uniform-ish
//! random self-avoiding walk.

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::RngCore;

use crate::conformation::Conformation;
use crate::position::Position;

/// Returns `[(0,0), (1,0), ..., (n-1,0)]`, the trivial unfolded walk.
pub fn linear(n: usize) -> Conformation {
    Conformation::new((0..n as i32).map(|x| Position::new(x, 0)).collect())
}

/// Generates a uniform-ish self-avoiding walk of length `n` starting at
/// `(0, 0)`.
///
/// Depth-first backtracking: at each step the four lattice directions are
/// tried in random order, recursing into the first unvisited target; on a
/// full dead end the search backtracks to the parent residue. If the root
/// call itself exhausts every branch, the whole search restarts, continuing
/// to draw from the same RNG stream. Terminates for the short chains this
/// engine targets.
pub fn random_saw(n: usize, rng: &mut impl RngCore) -> Conformation {
    if n == 0 {
        return Conformation::new(Vec::new());
    }
    loop {
        let mut path = vec![Position::new(0, 0)];
        let mut visited = HashSet::new();
        visited.insert(path[0]);
        if backtrack(&mut path, &mut visited, n - 1, rng) {
            return Conformation::new(path);
        }
    }
}

fn backtrack(
    path: &mut Vec<Position>,
    visited: &mut HashSet<Position>,
    remaining: usize,
    rng: &mut impl RngCore,
) -> bool {
    if remaining == 0 {
        return true;
    }
    let mut directions = Position::DIRECTIONS;
    directions.shuffle(rng);
    let last = *path.last().expect("path always has a head residue");
    for dir in directions {
        let candidate = last + dir;
        if visited.contains(&candidate) {
            continue;
        }
        path.push(candidate);
        visited.insert(candidate);
        if backtrack(path, visited, remaining - 1, rng) {
            return true;
        }
        path.pop();
        visited.remove(&candidate);
    }
    false
}
