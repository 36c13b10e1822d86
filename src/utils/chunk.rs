use crate::error::ChunkError;

/// Splits `items` into consecutive groups of `size`, the last group holding the remainder.
///
/// Concatenating the groups in order gives back `items` exactly.
pub fn chunk<T: Clone>(items: &[T], size: usize) -> Result<Vec<Vec<T>>, ChunkError> {
    if size == 0 {
        return Err(ChunkError(size));
    }
    Ok(items.chunks(size).map(<[T]>::to_vec).collect())
}
