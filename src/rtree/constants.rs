/// Side length of the square grid the Hilbert mapper covers. Coordinates passed to
/// [`hilbert_distance`][crate::rtree::sort::hilbert_distance] must lie in
/// `0..HILBERT_RESOLUTION`.
///
/// This is the smallest power of two that covers the `0..=500_000` benchmark grid.
pub const HILBERT_RESOLUTION: u32 = 1 << 19;

/// Magic byte at the start of every paged tree buffer.
pub(crate) const PAGED_MAGIC: u8 = 0xb7;

/// Format version of paged tree buffers.
pub(crate) const VERSION: u8 = 1;
