use rand::Rng;

use crate::spins::{local_energy, Lattice};

/// Boltzmann acceptance test for a proposed flip costing `delta_e`.
///
/// Downhill and neutral moves (`delta_e <= 0`) are always taken; otherwise the
/// move is taken iff `exp(-delta_e / temperature) > u`, where `u` is a uniform
/// draw from `[0, 1)`.
#[inline]
pub fn accept(delta_e: f64, temperature: f64, u: f64) -> bool {
    delta_e <= 0.0 || (-delta_e / temperature).exp() > u
}

/// Metropolis decision for one chosen site, flipping it if accepted.
///
/// `rng` is only consulted when the flip would raise the energy.
/// Returns whether the spin was flipped.
#[inline]
pub fn try_flip<R: Rng + ?Sized>(
    lattice: &mut Lattice,
    row: usize,
    col: usize,
    rng: &mut R,
) -> bool {
    let delta_e = -local_energy(lattice, row, col);
    let accepted = delta_e <= 0.0 || accept(delta_e, lattice.temperature(), rng.gen::<f64>());
    if accepted {
        lattice.flip(row, col);
    }
    accepted
}

/// One epoch: pick a site uniformly (row, then column) and run the Metropolis
/// test on it.
///
/// Touches only the chosen site and its four neighbors. Returns whether the
/// spin was flipped.
#[cfg_attr(feature = "profile", inline(never))]
pub fn step<R: Rng + ?Sized>(lattice: &mut Lattice, rng: &mut R) -> bool {
    let size = lattice.size();
    let row = rng.gen_range(0..size);
    let col = rng.gen_range(0..size);
    try_flip(lattice, row, col, rng)
}
