//! The HP sequence: a finite string over the {H, P} alphabet.

use hp_core::HpError;
use serde::{Deserialize, Serialize};

/// A single residue kind: hydrophobic or polar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Residue {
    /// Hydrophobic residue.
    H,
    /// Polar residue.
    P,
}

impl Residue {
    fn from_char(c: char) -> Option<Residue> {
        match c {
            'H' => Some(Residue::H),
            'P' => Some(Residue::P),
            _ => None,
        }
    }

    /// Returns true iff this residue is hydrophobic.
    pub fn is_hydrophobic(self) -> bool {
        matches!(self, Residue::H)
    }
}

/// A validated HP sequence: length >= 2, every character in {H, P}.
///
/// Compact notations (e.g. `P3H2P2H2`, `(PH)3`) are expanded by callers
/// before construction; this type only accepts a plain `{H,P}*` string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HpString {
    residues: Vec<Residue>,
}

impl HpString {
    /// Parses and validates a plain HP string.
    ///
    /// Rejects empty strings, single-residue strings, and any character
    /// outside `{H, P}`.
    pub fn parse(s: &str) -> Result<Self, HpError> {
        if s.len() < 2 {
            return Err(HpError::invalid(
                "E_HP_TOO_SHORT",
                "HP string must have length >= 2",
            ));
        }
        let mut residues = Vec::with_capacity(s.len());
        for (idx, c) in s.chars().enumerate() {
            match Residue::from_char(c) {
                Some(r) => residues.push(r),
                None => {
                    return Err(HpError::invalid(
                        "E_HP_BAD_CHAR",
                        format!("character '{c}' at position {idx} is not H or P"),
                    ))
                }
            }
        }
        Ok(Self { residues })
    }

    /// Number of residues in the sequence.
    pub fn len(&self) -> usize {
        self.residues.len()
    }

    /// Whether the sequence is empty. Never true for a successfully parsed
    /// [`HpString`]; provided for API completeness.
    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }

    /// The residue at index `i`.
    pub fn residue(&self, i: usize) -> Residue {
        self.residues[i]
    }

    /// Indices of all hydrophobic residues, in ascending order.
    pub fn hydrophobic_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.residues
            .iter()
            .enumerate()
            .filter(|(_, r)| r.is_hydrophobic())
            .map(|(i, _)| i)
    }

    /// Full residue slice.
    pub fn residues(&self) -> &[Residue] {
        &self.residues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_valid_string() {
        let hp = HpString::parse("HPHPPH").unwrap();
        assert_eq!(hp.len(), 6);
        assert_eq!(hp.residue(0), Residue::H);
        assert_eq!(hp.residue(1), Residue::P);
    }

    #[test]
    fn rejects_too_short() {
        assert!(HpString::parse("H").is_err());
        assert!(HpString::parse("").is_err());
    }

    #[test]
    fn rejects_bad_character() {
        assert!(HpString::parse("HPX").is_err());
    }

    #[test]
    fn hydrophobic_indices_are_correct() {
        let hp = HpString::parse("HPPHHPHPPH").unwrap();
        let indices: Vec<usize> = hp.hydrophobic_indices().collect();
        assert_eq!(indices, vec![0, 3, 4, 6, 9]);
    }
}
