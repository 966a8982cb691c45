//! H-H topological contact energy.

use crate::conformation::Conformation;
use crate::position::adjacent;
use crate::sequence::HpString;

/// Counts non-sequential H-H topological contacts and returns their
/// negative count.
///
/// `energy(C, S) = -|{(i, j) : i<j, S[i]=S[j]='H', j-i>1, adjacent(C[i], C[j])}|`.
/// Pure function of `(conformation, sequence)`; `O(h^2)` where `h` is the
/// number of hydrophobic residues.
pub fn energy(conformation: &Conformation, sequence: &HpString) -> i64 {
    let h_indices: Vec<usize> = sequence.hydrophobic_indices().collect();
    let mut contacts = 0i64;
    for (a, &i) in h_indices.iter().enumerate() {
        for &j in &h_indices[a + 1..] {
            if j - i > 1 && adjacent(conformation.position(i), conformation.position(j)) {
                contacts += 1;
            }
        }
    }
    -contacts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;

    fn conformation(coords: &[(i32, i32)]) -> Conformation {
        Conformation::new(coords.iter().map(|&(x, y)| Position::new(x, y)).collect())
    }

    #[test]
    fn scenario_s1_single_contact() {
        let c = conformation(&[(0, 0), (1, 0), (1, 1), (0, 1)]);
        let hp = HpString::parse("HHHH").unwrap();
        assert_eq!(energy(&c, &hp), -1);
    }

    #[test]
    fn scenario_s2_two_contacts() {
        let c = conformation(&[
            (0, 0),
            (1, 0),
            (1, 1),
            (0, 1),
            (0, 2),
            (1, 2),
            (1, 3),
            (0, 3),
            (0, 4),
            (1, 4),
        ]);
        let hp = HpString::parse("HPPHHPHPPH").unwrap();
        assert_eq!(energy(&c, &hp), -2);
    }

    #[test]
    fn property_p6_energy_bound() {
        let c = conformation(&[(0, 0), (1, 0), (1, 1), (0, 1)]);
        let hp = HpString::parse("HHHH").unwrap();
        let h = hp.hydrophobic_indices().count() as i64;
        let lower_bound = -(h * (h - 2)) / 2;
        let e = energy(&c, &hp);
        assert!(e <= 0);
        assert!(e >= lower_bound);
    }

    #[test]
    fn property_p5_deterministic() {
        let c = conformation(&[(0, 0), (1, 0), (1, 1), (0, 1)]);
        let hp = HpString::parse("HHHH").unwrap();
        assert_eq!(energy(&c, &hp), energy(&c, &hp));
    }

    #[test]
    fn all_polar_has_zero_energy() {
        let c = conformation(&[(0, 0), (1, 0), (1, 1), (0, 1)]);
        let hp = HpString::parse("PPPP").unwrap();
        assert_eq!(energy(&c, &hp), 0);
    }
}
