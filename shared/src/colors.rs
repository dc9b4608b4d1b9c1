/// Deterministic palette slot for `key` via CRC32 of its bytes.
/// Returns 0 for an empty palette.
pub fn palette_index(key: &str, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    crc32fast::hash(key.as_bytes()) as usize % len
}
