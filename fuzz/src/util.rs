/// Reinterprets the input bytes as little-endian `u32` values, dropping a trailing partial chunk.
pub fn u8_as_u32(data: &[u8]) -> Vec<u32> {
    data.chunks_exact(4)
        .map(|c| u32::from_le_bytes([c[0], c[1], c[2], c[3]]))
        .collect()
}
