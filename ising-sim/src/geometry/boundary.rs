use super::offsets::SQUARE;

/// Resolve a coordinate onto the torus of linear extent `size`.
///
/// This is a true modulo: the result lies in `[0, size)` for negative inputs
/// too, so `wrap(-1, size) == size - 1` and `wrap(size, size) == 0`.
/// `size` must be non-zero.
#[inline]
pub fn wrap(coord: isize, size: usize) -> usize {
    coord.rem_euclid(size as isize) as usize
}

/// The four nearest neighbors of `(row, col)` under periodic boundaries.
///
/// Returned in [`SQUARE`] order: up, down, left, right. On lattices with
/// `size < 3` some entries coincide, and for `size == 1` all four are the
/// site itself.
#[inline]
pub fn neighbors(row: usize, col: usize, size: usize) -> [(usize, usize); 4] {
    SQUARE.map(|(d_row, d_col)| {
        (
            wrap(row as isize + d_row, size),
            wrap(col as isize + d_col, size),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_wrap_negative_one() {
        for size in 1..20 {
            assert_eq!(wrap(-1, size), size - 1);
        }
    }

    #[test]
    fn test_wrap_size_is_zero() {
        for size in 1..20 {
            assert_eq!(wrap(size as isize, size), 0);
        }
    }

    #[test]
    fn test_wrap_far_out_of_range() {
        assert_eq!(wrap(-7, 5), 3);
        assert_eq!(wrap(12, 5), 2);
        assert_eq!(wrap(-10, 5), 0);
    }

    #[test]
    fn test_neighbors_corner() {
        // 4x4, site (0,0): up and left wrap around
        let n = neighbors(0, 0, 4);
        assert_eq!(n, [(3, 0), (1, 0), (0, 3), (0, 1)]);
    }

    #[test]
    fn test_neighbors_far_corner() {
        let n = neighbors(3, 3, 4);
        assert_eq!(n, [(2, 3), (0, 3), (3, 2), (3, 0)]);
    }

    #[test]
    fn test_neighbors_single_site() {
        assert_eq!(neighbors(0, 0, 1), [(0, 0); 4]);
    }

    proptest! {
        #[test]
        fn wrap_lands_in_range(coord in -1000isize..1000, size in 1usize..64) {
            let w = wrap(coord, size);
            prop_assert!(w < size);
            prop_assert_eq!((w as isize - coord).rem_euclid(size as isize), 0);
        }

        #[test]
        fn neighbors_are_symmetric(size in 1usize..16, row in 0usize..16, col in 0usize..16) {
            let (row, col) = (row % size, col % size);
            for (r, c) in neighbors(row, col, size) {
                prop_assert!(neighbors(r, c, size).contains(&(row, col)));
            }
        }
    }
}
