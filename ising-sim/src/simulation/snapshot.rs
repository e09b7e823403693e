use crate::spins::Lattice;

/// Owned copy of the spin configuration at a given epoch.
///
/// Renderers read snapshots while the lattice keeps evolving, so a snapshot
/// never borrows the live spin array.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub epoch: usize,
    pub size: usize,
    pub spins: Vec<i8>,
}

impl Snapshot {
    pub fn capture(lattice: &Lattice, epoch: usize) -> Self {
        Self {
            epoch,
            size: lattice.size(),
            spins: lattice.snapshot(),
        }
    }

    #[inline]
    pub fn spin(&self, row: usize, col: usize) -> i8 {
        self.spins[row * self.size + col]
    }
}
