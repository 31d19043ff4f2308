use soroban_sdk::contracterror;

/// Failure kinds surfaced by the vault and its math library.
///
/// Every variant aborts the whole invocation; the host rolls back any
/// storage or balance change made before the error was returned.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum VaultError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    /// Zero amounts, negative amounts or a malformed tick range
    InvalidInput = 3,
    /// Tick outside [MIN_TICK, MAX_TICK]
    OutOfRange = 4,
    /// A share or liquidity computation came out as zero where a positive result is required
    ZeroShares = 5,
    InsufficientBalance = 6,
    /// State-changing entry point called while another one is still running
    Reentrant = 7,
    /// Position manager, price source or token contract call failed
    ExternalCallFailed = 8,
    SlippageExceeded = 9,
    MathOverflow = 10,
    DivisionByZero = 11,
}
