//! Gas constants consulted by the intrinsic-gas calculator and the executor's creation path.

/// The base cost of any transaction, regardless of payload.
pub const TX_BASE_GAS: u64 = 21_000;

/// The additional base cost of a contract-creation transaction once EIP-2 is active.
pub const TX_CREATE_GAS: u64 = 32_000;

/// The cost of each zero byte in the transaction's data or init-code payload.
pub const TX_DATA_ZERO_GAS: u64 = 4;

/// The cost of each non-zero byte in the transaction's data or init-code payload.
pub const TX_DATA_NON_ZERO_GAS: u64 = 68;

/// The cost, per byte of returned init-code output, of depositing a new contract's code.
pub const CODE_DEPOSIT_PER_BYTE: u64 = 200;

/// The largest permitted deployed contract code size once EIP-170 is active.
pub const MAX_CODE_SIZE: usize = 0x6000;

/// The refund granted per account destroyed by `SELFDESTRUCT`, before the refund cap is applied.
pub const DESTROY_REFUND: u64 = 24_000;

/// The number of reserved precompile addresses, `0x0000...01` through `0x0000...09`.
///
/// The executor only needs to recognize that an address is precompiled and hand it to the VM as
/// [`ResolvedCode::Precompile`](tx_primitives::ResolvedCode); implementing the precompiles
/// themselves is the VM's concern.
pub const PRECOMPILE_ADDRESS_COUNT: u8 = 9;

/// Returns `true` if `address` falls in the reserved precompile range.
pub fn is_precompile(address: alloy_primitives::Address) -> bool {
    let bytes = address.into_array();
    bytes[..19] == [0u8; 19] && bytes[19] >= 1 && bytes[19] <= PRECOMPILE_ADDRESS_COUNT
}
