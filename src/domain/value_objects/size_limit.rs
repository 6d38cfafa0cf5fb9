//! Size limit for filtered file transfers
//!
//! Developer pulls skip large uploads by default. The limit is expressed in
//! KiB so it maps 1:1 onto rsync's `--max-size=<n>K`.

/// Upper bound on the size of a transferred file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SizeLimit {
    kib: u64,
}

impl SizeLimit {
    /// Default filter for non-full syncs
    pub const DEFAULT_KIB: u64 = 100;

    pub fn kib(kib: u64) -> Self {
        Self { kib }
    }

    /// Filter to apply for a request: `None` means transfer everything
    pub fn for_sync(full_sync: bool) -> Option<Self> {
        if full_sync {
            None
        } else {
            Some(Self::default())
        }
    }

    pub fn max_bytes(&self) -> u64 {
        self.kib.saturating_mul(1024)
    }

    /// Files at exactly the limit are still transferred.
    ///
    /// Mirrors rsync's `--max-size`, which skips only files strictly larger
    /// than the limit and reads a `K` suffix as 1024 bytes. Keep in step with
    /// `rsync_arg`.
    pub fn admits(&self, len: u64) -> bool {
        len <= self.max_bytes()
    }

    /// The rsync option that applies this limit; `admits` models its effect
    pub fn rsync_arg(&self) -> String {
        format!("--max-size={}K", self.kib)
    }
}

impl Default for SizeLimit {
    fn default() -> Self {
        Self::kib(Self::DEFAULT_KIB)
    }
}
