/// PDA seeds used for account derivation
pub mod seeds {
    /// Seed for the per-mint faucet config account, combined with the mint address
    pub const CONFIG: &[u8] = b"config";
}
