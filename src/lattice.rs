use log::debug;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::{internal_util::wrap, NoiseParameters};

/// Values attached to the points of a periodic 1D lattice.
#[derive(Debug, Clone, PartialEq)]
pub struct Lattice1D<T> {
    mask: usize,
    values: Vec<T>,
}

/// Values attached to the points of a periodic 2D lattice, row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct Lattice2D<T> {
    mask: usize,
    values: Vec<T>,
}

fn rng_from(params: &NoiseParameters) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(params.seed())
}

impl<T> Lattice1D<T> {
    /// Fill a table of `table_size` entries, drawing each from a generator
    /// seeded with `params.seed()`. Equal parameters give equal tables.
    pub fn generate(params: NoiseParameters, mut f: impl FnMut(&mut ChaCha8Rng) -> T) -> Self {
        let mut rng = rng_from(&params);
        let values = (0..params.table_size())
            .map(|_| f(&mut rng))
            .collect::<Vec<_>>();

        debug!(
            "generated 1D lattice: size={}, seed={}",
            params.table_size(),
            params.seed()
        );

        Self {
            mask: params.mask(),
            values,
        }
    }

    pub fn get(&self, i: i64) -> &T {
        &self.values[wrap(i, self.mask)]
    }

    /// Lookup by a non-negative index, wrapped with the mask.
    pub fn get_wrapped(&self, i: usize) -> &T {
        &self.values[i & self.mask]
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn mask(&self) -> usize {
        self.mask
    }

    pub fn values(&self) -> &[T] {
        &self.values
    }
}

impl<T> Lattice2D<T> {
    /// Fill a `table_size × table_size` table row by row.
    pub fn generate(params: NoiseParameters, mut f: impl FnMut(&mut ChaCha8Rng) -> T) -> Self {
        let mut rng = rng_from(&params);
        let size = params.table_size();
        // bounded by MAX_TABLE_SIZE at validation
        let count = size
            .checked_mul(size)
            .unwrap_or_else(|| panic!("2D lattice of side {} overflows usize", size));
        let values = (0..count)
            .map(|_| f(&mut rng))
            .collect::<Vec<_>>();

        debug!(
            "generated 2D lattice: size={}x{}, seed={}",
            size,
            size,
            params.seed()
        );

        Self {
            mask: params.mask(),
            values,
        }
    }

    pub fn get(&self, x: i64, y: i64) -> &T {
        self.get_wrapped(wrap(x, self.mask), wrap(y, self.mask))
    }

    pub fn get_wrapped(&self, x: usize, y: usize) -> &T {
        let stride = self.mask + 1;
        &self.values[(y & self.mask) * stride + (x & self.mask)]
    }

    /// Number of lattice points along one axis.
    pub fn side(&self) -> usize {
        self.mask + 1
    }

    pub fn mask(&self) -> usize {
        self.mask
    }

    pub fn values(&self) -> &[T] {
        &self.values
    }
}
