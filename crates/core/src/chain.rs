//! Chain time: block heights and the block-rate constants.

use std::fmt::Display;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Number of blocks produced in one day, assuming ten-minute blocks.
pub const BLOCKS_PER_DAY: u64 = 144;

/// Number of blocks produced in one hour.
pub const BLOCKS_PER_HOUR: u64 = 6;

/// Height of a block, i.e. the level.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
)]
pub struct BlockHeight(pub u64);

impl Display for BlockHeight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for BlockHeight {
    fn from(height: u64) -> Self {
        BlockHeight(height)
    }
}

impl From<BlockHeight> for u64 {
    fn from(height: BlockHeight) -> Self {
        height.0
    }
}

impl FromStr for BlockHeight {
    type Err = ParseIntError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self(s.parse::<u64>()?))
    }
}

impl BlockHeight {
    /// The first block height 1.
    pub const fn first() -> Self {
        Self(1)
    }

    /// Checked block height addition.
    #[must_use = "this returns the result of the operation, without modifying \
                  the original"]
    pub fn checked_add(self, rhs: impl Into<BlockHeight>) -> Option<Self> {
        let BlockHeight(rhs) = rhs.into();
        Some(Self(self.0.checked_add(rhs)?))
    }

    /// Checked block height subtraction.
    #[must_use = "this returns the result of the operation, without modifying \
                  the original"]
    pub fn checked_sub(self, rhs: impl Into<BlockHeight>) -> Option<Self> {
        let BlockHeight(rhs) = rhs.into();
        Some(Self(self.0.checked_sub(rhs)?))
    }

    /// Subtraction that returns the zero height instead of underflowing.
    #[must_use = "this returns the result of the operation, without modifying \
                  the original"]
    pub fn sub_or_default(self, rhs: impl Into<BlockHeight>) -> Self {
        self.checked_sub(rhs).unwrap_or_default()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_height_checked_arithmetics() {
        let height = BlockHeight(12800);
        assert_eq!(
            height.checked_add(BlockHeight(658)),
            Some(BlockHeight(13458))
        );
        assert_eq!(BlockHeight(u64::MAX).checked_add(1_u64), None);
        assert_eq!(
            BlockHeight(13458).checked_sub(height),
            Some(BlockHeight(658))
        );
        assert_eq!(height.checked_sub(BlockHeight(13458)), None);
        assert_eq!(
            height.sub_or_default(BlockHeight(13458)),
            BlockHeight::default()
        );
    }

    #[test]
    fn test_height_string_roundtrip() {
        let height: BlockHeight = "12450".parse().expect("Test failed");
        assert_eq!(height, BlockHeight(12450));
        assert_eq!(height.to_string(), "12450");
        assert!("not-a-height".parse::<BlockHeight>().is_err());
    }

    #[test]
    fn test_block_rate_constants() {
        assert_eq!(BLOCKS_PER_DAY, 144);
        assert_eq!(BLOCKS_PER_HOUR, 6);
        // Ten-minute blocks: one day of blocks spans 24 hours.
        assert_eq!(BLOCKS_PER_DAY / BLOCKS_PER_HOUR, 24);
    }
}
