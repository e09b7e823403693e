pub mod metropolis;

pub use metropolis::{accept, step, try_flip};
