//! The four local moves: end, corner, crankshaft, pull.
//!
//! All moves are total: they always return `(applied, conformation)`. When
//! `applied` is `false` the returned conformation is identical to the input.
//! On `applied = true` the returned conformation satisfies I1 and I2.

use rand::seq::SliceRandom;
use rand::RngCore;

use crate::conformation::Conformation;
use crate::position::{adjacent, Position};

/// Bound on how many tie-break retries [`pull_move`] attempts before giving
/// up, per the "retry up to max_try random tie-breaks, then return
/// not-applied" decision for the chain-drag pull.
pub const PULL_MOVE_MAX_RETRIES: u32 = 4;

/// Applies the end move to residue `k`, which must be `0` or `n-1`.
///
/// Enumerates the four lattice cells adjacent to `k`'s sole chain neighbor
/// in random order and relocates `k` to the first unoccupied one.
pub fn end_move(c: &Conformation, k: usize, rng: &mut impl RngCore) -> (bool, Conformation) {
    let n = c.len();
    debug_assert!(k == 0 || k == n - 1, "end_move requires k at a chain end");
    let neighbour = if k == 0 { c.position(1) } else { c.position(n - 2) };

    let mut directions = Position::DIRECTIONS;
    directions.shuffle(rng);
    for dir in directions {
        let candidate = neighbour + dir;
        if c.is_free(candidate) {
            return (true, c.with_updates(&[(k, candidate)]));
        }
    }
    (false, c.clone())
}

/// Applies the corner move to residue `k`, which must satisfy `1 <= k <= n-2`.
///
/// Applicable only when `C[k-1]`, `C[k]`, `C[k+1]` form an L. The unique
/// mirrored corner of the bounding rectangle is taken if free.
pub fn corner_move(c: &Conformation, k: usize, _rng: &mut impl RngCore) -> (bool, Conformation) {
    let prev = c.position(k - 1);
    let next = c.position(k + 1);

    if prev.x == next.x || prev.y == next.y {
        return (false, c.clone());
    }

    let mirrored = if prev.x == c.position(k).x {
        Position::new(next.x, prev.y)
    } else {
        Position::new(prev.x, next.y)
    };

    if c.is_free(mirrored) {
        (true, c.with_updates(&[(k, mirrored)]))
    } else {
        (false, c.clone())
    }
}

/// Applies the crankshaft move to residue `k`, which must satisfy
/// `1 <= k <= n-3`.
///
/// Requires a U-shape over residues `k-1, k, k+1, k+2` and reflects residues
/// `k` and `k+1` across the `C[k-1]`-`C[k+2]` line if both reflected
/// positions are free.
pub fn crankshaft_move(
    c: &Conformation,
    k: usize,
    _rng: &mut impl RngCore,
) -> (bool, Conformation) {
    let prev = c.position(k - 1);
    let cur = c.position(k);
    let next = c.position(k + 1);
    let next2 = c.position(k + 2);

    if prev.x == next2.x && cur.x == next.x {
        let (reflected_cur, reflected_next) = if cur.x == prev.x + 1 {
            (
                Position::new(cur.x - 2, cur.y),
                Position::new(next.x - 2, next.y),
            )
        } else if cur.x == prev.x - 1 {
            (
                Position::new(cur.x + 2, cur.y),
                Position::new(next.x + 2, next.y),
            )
        } else {
            return (false, c.clone());
        };
        if c.is_free(reflected_cur) && c.is_free(reflected_next) {
            return (
                true,
                c.with_updates(&[(k, reflected_cur), (k + 1, reflected_next)]),
            );
        }
    } else if prev.y == next2.y && cur.y == next.y {
        let (reflected_cur, reflected_next) = if cur.y == prev.y + 1 {
            (
                Position::new(cur.x, cur.y - 2),
                Position::new(next.x, next.y - 2),
            )
        } else if cur.y == prev.y - 1 {
            (
                Position::new(cur.x, cur.y + 2),
                Position::new(next.x, next.y + 2),
            )
        } else {
            return (false, c.clone());
        };
        if c.is_free(reflected_cur) && c.is_free(reflected_next) {
            return (
                true,
                c.with_updates(&[(k, reflected_cur), (k + 1, reflected_next)]),
            );
        }
    }
    (false, c.clone())
}

/// Applies the Lesh-Mitzenmacher-Whitesides pull move to residue `k`.
///
/// Attempts the forward pull first; on failure tries the backward pull
/// (forward pull on the reversed chain); gives up after
/// [`PULL_MOVE_MAX_RETRIES`] random tie-break retries.
pub fn pull_move(c: &Conformation, k: usize, rng: &mut impl RngCore) -> (bool, Conformation) {
    for _ in 0..PULL_MOVE_MAX_RETRIES {
        let (applied, moved) = pull_forward(c, k, rng);
        if applied {
            return (true, moved);
        }
        let reversed_c = reverse(c);
        let reversed_k = c.len() - 1 - k;
        let (applied, reversed_moved) = pull_forward(&reversed_c, reversed_k, rng);
        if applied {
            return (true, reverse(&reversed_moved));
        }
    }
    (false, c.clone())
}

fn pull_forward(c: &Conformation, k: usize, rng: &mut impl RngCore) -> (bool, Conformation) {
    let n = c.len();
    if k == 0 || k >= n - 1 {
        return (false, c.clone());
    }
    let anchor = c.position(k - 1);
    let pivot = c.position(k);
    let chain_next = c.position(k + 1);

    let l1 = Position::new(anchor.x + (anchor.y - pivot.y), anchor.y + (pivot.x - anchor.x));
    let corner1 = Position::new(pivot.x - (pivot.y - anchor.y), pivot.y - (anchor.x - pivot.x));
    let l2 = Position::new(anchor.x - (anchor.y - pivot.y), anchor.y - (pivot.x - anchor.x));
    let corner2 = Position::new(pivot.x + (pivot.y - anchor.y), pivot.y + (anchor.x - pivot.x));

    let mut candidates = [(l1, corner1), (l2, corner2)];
    candidates.shuffle(rng);

    for (l, corner) in candidates {
        if !c.is_free(l) {
            continue;
        }
        if corner == chain_next {
            let moved = c.with_updates(&[(k, l)]);
            if moved.valid() {
                return (true, moved);
            }
            continue;
        }
        if c.is_free(corner) {
            let mut updates = vec![(k, l), (k + 1, corner)];
            let mut prev_new_pos = corner;
            let mut j = k + 2;
            while j < n {
                if adjacent(c.position(j), prev_new_pos) {
                    break;
                }
                let drag_target = c.position(j - 2);
                updates.push((j, drag_target));
                prev_new_pos = drag_target;
                j += 1;
            }
            let moved = c.with_updates(&updates);
            if moved.valid() {
                return (true, moved);
            }
        }
    }
    (false, c.clone())
}

fn reverse(c: &Conformation) -> Conformation {
    let mut positions = c.positions().to_vec();
    positions.reverse();
    Conformation::new(positions)
}
