use crate::error::{PrlError, Result};
use crate::template::ValueSequence;

/// Check that there is something to expand and that every value list has the
/// same length.
///
/// Each sequence is compared with the one before it, so the first mismatch
/// reported names the neighbouring pair where the lengths diverge.
pub fn validate(sequences: &[ValueSequence]) -> Result<()> {
    if sequences.is_empty() {
        return Err(PrlError::NoPlaceholders);
    }

    for pair in sequences.windows(2) {
        let (previous, current) = (&pair[0], &pair[1]);
        if current.len() != previous.len() {
            return Err(PrlError::ArgumentCountMismatch {
                placeholder: current.placeholder.to_string(),
                previous: previous.placeholder.to_string(),
                expected: previous.len(),
                found: current.len(),
            });
        }
    }

    Ok(())
}
