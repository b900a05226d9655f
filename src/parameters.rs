use thiserror::Error;

pub const DEFAULT_TABLE_SIZE: usize = 256;
pub const DEFAULT_SEED: u64 = 16;
/// Largest accepted table size. A 2D table holds `table_size²` entries.
pub const MAX_TABLE_SIZE: usize = 1 << 12;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterError {
    #[error("Table size must be a non-zero power of two, got {0}")]
    TableSizeNotPowerOfTwo(usize),
    #[error("Table size {0} exceeds the maximum of {max}", max = MAX_TABLE_SIZE)]
    TableSizeTooLarge(usize),
}

/// Parameters shared by every lattice table.
///
/// `table_size` is the number of lattice points per axis. Lookups wrap with
/// `table_size - 1` as a bitmask, which is why it must be a power of two. It is
/// also capped at [`MAX_TABLE_SIZE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serialize",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawNoiseParameters")
)]
pub struct NoiseParameters {
    table_size: usize,
    seed: u64,
}

impl NoiseParameters {
    pub fn new(table_size: usize, seed: u64) -> Result<Self, ParameterError> {
        if !table_size.is_power_of_two() {
            return Err(ParameterError::TableSizeNotPowerOfTwo(table_size));
        }
        if table_size > MAX_TABLE_SIZE {
            return Err(ParameterError::TableSizeTooLarge(table_size));
        }
        Ok(Self { table_size, seed })
    }

    /// Default table size with the given seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            table_size: DEFAULT_TABLE_SIZE,
            seed,
        }
    }

    pub fn table_size(&self) -> usize {
        self.table_size
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn mask(&self) -> usize {
        self.table_size - 1
    }
}

impl Default for NoiseParameters {
    fn default() -> Self {
        Self::with_seed(DEFAULT_SEED)
    }
}

#[cfg(feature = "serialize")]
#[derive(serde::Deserialize)]
struct RawNoiseParameters {
    table_size: usize,
    seed: u64,
}

#[cfg(feature = "serialize")]
impl TryFrom<RawNoiseParameters> for NoiseParameters {
    type Error = ParameterError;

    fn try_from(raw: RawNoiseParameters) -> Result<Self, Self::Error> {
        Self::new(raw.table_size, raw.seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let params = NoiseParameters::new(64, 3).unwrap();
        assert_eq!(params.table_size(), 64);
        assert_eq!(params.seed(), 3);
        assert_eq!(params.mask(), 63);

        assert_eq!(
            NoiseParameters::new(100, 0),
            Err(ParameterError::TableSizeNotPowerOfTwo(100))
        );
        assert_eq!(
            NoiseParameters::new(0, 0),
            Err(ParameterError::TableSizeNotPowerOfTwo(0))
        );
        assert!(NoiseParameters::new(1, 0).is_ok());
    }

    #[test]
    fn test_table_size_limit() {
        assert!(NoiseParameters::new(MAX_TABLE_SIZE, 0).is_ok());
        assert_eq!(
            NoiseParameters::new(MAX_TABLE_SIZE * 2, 0),
            Err(ParameterError::TableSizeTooLarge(MAX_TABLE_SIZE * 2))
        );
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn test_table_size_square_overflow() {
        // its square would not fit in usize
        assert_eq!(
            NoiseParameters::new(1 << 32, 0),
            Err(ParameterError::TableSizeTooLarge(1 << 32))
        );
        assert_eq!(
            NoiseParameters::new(1 << 63, 0),
            Err(ParameterError::TableSizeTooLarge(1 << 63))
        );
    }

    #[test]
    fn test_default() {
        let params = NoiseParameters::default();
        assert_eq!(params.table_size(), 256);
        assert_eq!(params.seed(), 16);
        assert_eq!(params.mask(), 255);
    }

    #[cfg(feature = "serialize")]
    #[test]
    fn test_serde_roundtrip() {
        let params = NoiseParameters::new(32, 7).unwrap();
        let bytes = serde_cbor::to_vec(&params).unwrap();
        let decoded: NoiseParameters = serde_cbor::from_slice(&bytes).unwrap();
        assert_eq!(params, decoded);

        #[derive(serde::Serialize)]
        struct Invalid {
            table_size: usize,
            seed: u64,
        }
        let bytes = serde_cbor::to_vec(&Invalid {
            table_size: 30,
            seed: 7,
        })
        .unwrap();
        assert!(serde_cbor::from_slice::<NoiseParameters>(&bytes).is_err());
    }
}
