use crate::spins::{local_energy, Lattice};

/// Mean site energy and mean squared site energy over the whole lattice.
///
/// Returns `(U, U2)` with `U = Σ e / N` and `U2 = Σ e² / N`, where
/// `e = local_energy(row, col)` and `N = size²`.
pub fn internal_energy(lattice: &Lattice) -> (f64, f64) {
    let size = lattice.size();
    let mut e_sum = 0.0f64;
    let mut e2_sum = 0.0f64;

    for row in 0..size {
        for col in 0..size {
            let e = local_energy(lattice, row, col);
            e_sum += e;
            e2_sum += e * e;
        }
    }

    let n = lattice.n_spins() as f64;
    (e_sum / n, e2_sum / n)
}

/// Site-energy fluctuation `U2 - U²`.
///
/// No `1 / T²` factor is applied; values are in arbitrary units.
pub fn heat_capacity(lattice: &Lattice) -> f64 {
    let (u, u2) = internal_energy(lattice);
    fluctuation(u, u2)
}

#[inline]
pub(crate) fn fluctuation(u: f64, u2: f64) -> f64 {
    u2 - u * u
}

/// Absolute mean spin per site, in `[0, 1]`.
pub fn magnetization(lattice: &Lattice) -> f64 {
    let sum: i64 = lattice.spins().iter().map(|&s| s as i64).sum();
    (sum as f64 / lattice.n_spins() as f64).abs()
}
