use crate::geometry::neighbors;
use crate::spins::Lattice;

/// Interaction energy of the spin at `(row, col)` with its four periodic
/// nearest neighbors: `-2 * s * (s_up + s_down + s_left + s_right)`.
///
/// Flipping that spin changes the total energy by exactly `-local_energy`.
/// The result is always one of −8, −4, 0, 4, 8. On a 1×1 lattice every
/// neighbor is the site itself, so this is always −8.
#[inline]
pub fn local_energy(lattice: &Lattice, row: usize, col: usize) -> f64 {
    let neighbor_sum: i32 = neighbors(row, col, lattice.size())
        .iter()
        .map(|&(r, c)| lattice.spin(r, c) as i32)
        .sum();
    (-2 * lattice.spin(row, col) as i32 * neighbor_sum) as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spins::InitialState;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256StarStar;

    #[test]
    fn test_uniform_site() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(0);
        let lat = Lattice::build(InitialState::Uniform, 4, 1.0, &mut rng).unwrap();
        for row in 0..4 {
            for col in 0..4 {
                assert_eq!(local_energy(&lat, row, col), -8.0);
            }
        }
    }

    #[test]
    fn test_wrapped_neighbors_counted() {
        // 3x3 with only (2,0) and (0,2) down; site (0,0) sees both through the
        // periodic boundary (up and left).
        #[rustfmt::skip]
        let spins = vec![
             1, 1, -1,
             1, 1,  1,
            -1, 1,  1,
        ];
        let lat = Lattice::from_spins(3, 1.0, spins).unwrap();
        // neighbor sum = -1 (up) + 1 (down) + -1 (left) + 1 (right) = 0
        assert_eq!(local_energy(&lat, 0, 0), 0.0);
        // (2,2): up (1,2)=1, down (0,2)=-1, left (2,1)=1, right (2,0)=-1
        assert_eq!(local_energy(&lat, 2, 2), 0.0);
        // (0,2) = -1: up (2,2)=1, down (1,2)=1, left (0,1)=1, right (0,0)=1
        assert_eq!(local_energy(&lat, 0, 2), 8.0);
    }

    #[test]
    fn test_single_site_lattice() {
        let lat = Lattice::from_spins(1, 1.0, vec![-1]).unwrap();
        assert_eq!(local_energy(&lat, 0, 0), -8.0);
    }

    proptest! {
        #[test]
        fn local_energy_takes_allowed_values(
            size in 1usize..8,
            seed in any::<u64>(),
        ) {
            let mut rng = Xoshiro256StarStar::seed_from_u64(seed);
            let lat = Lattice::build(InitialState::Random, size, 1.0, &mut rng).unwrap();
            for row in 0..size {
                for col in 0..size {
                    let e = local_energy(&lat, row, col);
                    prop_assert!([-8.0, -4.0, 0.0, 4.0, 8.0].contains(&e), "e={}", e);
                }
            }
        }
    }
}
