use crate::aliases::ItemIv12;
use crate::consts::IV_LEN;
use crate::error::CryptoError;

/// Fresh random IV from the OS RNG — never derived from prior state
#[inline]
pub fn generate_iv() -> ItemIv12 {
    ItemIv12::random()
}

/// Rebuild a stored IV, rejecting anything that is not exactly 12 bytes
pub fn iv_from_slice(bytes: &[u8]) -> Result<ItemIv12, CryptoError> {
    let arr: [u8; IV_LEN] = bytes.try_into().map_err(|_| CryptoError::InvalidIvLength {
        expected: IV_LEN,
        actual: bytes.len(),
    })?;
    Ok(ItemIv12::new(arr))
}
