use crate::scheduler::Job;
use crate::template::ValueSequence;

/// Build one job per value index by substituting every placeholder token.
///
/// The number of jobs is one less than the number of values in the first
/// sequence: newline-split source output ends in an empty value, and the last
/// index is never expanded. Input text without a trailing newline therefore
/// loses its final value. Callers must have run
/// [`validate`](crate::template::validate) first so every sequence is long
/// enough.
pub fn expand(template: &str, sequences: &[ValueSequence]) -> Vec<Job> {
    let Some(first) = sequences.first() else {
        return Vec::new();
    };
    let count = first.len().saturating_sub(1);

    (0..count)
        .map(|index| {
            let command = sequences.iter().fold(template.to_string(), |cmd, seq| {
                cmd.replace(seq.placeholder.token(), &seq.values[index])
            });
            Job::new(index, command)
        })
        .collect()
}
