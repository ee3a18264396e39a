use serde::{Deserialize, Serialize};

/// One side of a trading pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PoolSide {
    X,
    Y,
}

impl PoolSide {
    /// The opposite side of the pair.
    #[must_use]
    pub fn other(self) -> Self {
        match self {
            Self::X => Self::Y,
            Self::Y => Self::X,
        }
    }
}

/// Token-2022 extensions the pool understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenExtension {
    TransferFee,
    TransferHook,
    Metadata,
    InterestBearing,
}
