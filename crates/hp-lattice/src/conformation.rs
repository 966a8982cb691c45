//! Ordered sequence of lattice positions, one per residue, with O(1)
//! occupancy lookup.

use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::position::{adjacent, Position};

/// A conformation: residue-indexed positions plus an occupancy index.
///
/// Invariants (I1 self-avoidance, I2 chain-connectivity) are expected to
/// hold for every conformation that escapes a move's internal scratch; see
/// [`Conformation::valid`].
///
/// Serializes as the bare residue-ordered position sequence described in the
/// external conformation format (no occupancy index on the wire);
/// deserializing rebuilds the occupancy index from that sequence.
#[derive(Debug, Clone)]
pub struct Conformation {
    positions: Vec<Position>,
    occupancy: HashMap<Position, usize>,
}

impl Serialize for Conformation {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.positions.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Conformation {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let positions = Vec::<Position>::deserialize(deserializer)?;
        Ok(Conformation::new(positions))
    }
}

impl Conformation {
    /// Builds a conformation from a residue-ordered position sequence.
    ///
    /// Does not itself enforce I1/I2; callers that build a conformation from
    /// an untrusted source should check [`Conformation::valid`] afterwards.
    pub fn new(positions: Vec<Position>) -> Self {
        let occupancy = build_occupancy(&positions);
        Self {
            positions,
            occupancy,
        }
    }

    /// Number of residues.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Whether this conformation holds no residues.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Position of residue `i`.
    pub fn position(&self, i: usize) -> Position {
        self.positions[i]
    }

    /// Full position slice, residue-ordered.
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    /// The residue index occupying `pos`, if any.
    pub fn occupant_at(&self, pos: Position) -> Option<usize> {
        self.occupancy.get(&pos).copied()
    }

    /// Whether `pos` is free in this conformation.
    pub fn is_free(&self, pos: Position) -> bool {
        !self.occupancy.contains_key(&pos)
    }

    /// Checks invariants I1 (self-avoidance) and I2 (chain connectivity).
    pub fn valid(&self) -> bool {
        if self.occupancy.len() != self.positions.len() {
            return false;
        }
        self.positions
            .windows(2)
            .all(|pair| adjacent(pair[0], pair[1]))
    }

    /// Returns a new conformation with the listed `(residue, new_position)`
    /// updates applied, leaving `self` untouched.
    ///
    /// Used by the move set to materialize a candidate conformation before
    /// re-checking I1/I2; does not itself validate the result.
    pub fn with_updates(&self, updates: &[(usize, Position)]) -> Conformation {
        let mut positions = self.positions.clone();
        for &(residue, pos) in updates {
            positions[residue] = pos;
        }
        Conformation::new(positions)
    }
}

fn build_occupancy(positions: &[Position]) -> HashMap<Position, usize> {
    let mut occupancy = HashMap::with_capacity(positions.len());
    for (idx, &pos) in positions.iter().enumerate() {
        occupancy.insert(pos, idx);
    }
    occupancy
}
