pub mod energy;
pub mod lattice;

pub use energy::local_energy;
pub use lattice::{InitialState, Lattice};
