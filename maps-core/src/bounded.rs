//! Length-bounded string fields.
//!
//! Text fields such as road names carry a per-field byte limit. Input longer
//! than the limit is cut at the last character boundary that fits. Setters
//! accept the shortened value; over-long input is never an error.

use log::debug;

use crate::{MapsError, Result};

/// Copy `input`, keeping at most `max_len` bytes.
///
/// The cut never splits a UTF-8 sequence.
///
/// # Errors
/// Returns [`MapsError::OutOfMemory`] when the copy cannot be allocated.
///
/// # Examples
/// ```
/// use maps_core::bounded::copy_bounded;
///
/// assert_eq!(copy_bounded("road", "Main Street", 4)?, "Main");
/// assert_eq!(copy_bounded("road", "Straße", 5)?, "Stra");
/// # Ok::<(), maps_core::MapsError>(())
/// ```
pub fn copy_bounded(field: &'static str, input: &str, max_len: usize) -> Result<String> {
    let kept = prefix_within(input, max_len);
    if kept.len() < input.len() {
        debug!(
            "{field} truncated from {} to {} bytes",
            input.len(),
            kept.len()
        );
    }
    let mut copy = String::new();
    copy.try_reserve_exact(kept.len())
        .map_err(|_| MapsError::OutOfMemory)?;
    copy.push_str(kept);
    Ok(copy)
}

fn prefix_within(input: &str, max_len: usize) -> &str {
    let mut end = input.len().min(max_len);
    while !input.is_char_boundary(end) {
        end = end.saturating_sub(1);
    }
    input.get(..end).unwrap_or_default()
}
