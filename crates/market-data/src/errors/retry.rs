/// Classification for retry policy.
///
/// Used by the key rotation to decide whether a failed trial should move on
/// to the next credential or abort the whole fetch cycle.
///
/// # Behavior Summary
///
/// | Class | Try Next Credential? | Ends the Cycle? |
/// |-------|----------------------|-----------------|
/// | `Never` | No | Yes |
/// | `NextCredential` | Yes | No |
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RetryClass {
    /// Never retry - no credentials, exhausted pool, or invalid data.
    /// Retrying within the same cycle won't help.
    Never,

    /// Try the next credential in the shuffled order.
    ///
    /// Used for transport failures (network, timeout) and logical API errors
    /// (quota exhausted, invalid key). The failing credential is not tried again
    /// in the same cycle and no state about it survives the cycle.
    NextCredential,
}
