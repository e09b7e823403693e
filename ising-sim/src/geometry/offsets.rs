/// Nearest-neighbor offsets of the square lattice as `(d_row, d_col)`.
///
/// Order is up, down, left, right.
pub const SQUARE: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
