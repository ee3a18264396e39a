/// Constant-product swap curve.
pub mod constant_product;
/// LP share issuance and redemption math.
pub mod liquidity;
/// Token-2022 transfer-fee arithmetic.
pub mod transfer_fee;
