use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

pub type DocumentId = String;
pub type Frequency = u32;

/// A keyword's frequency within a single document.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct Occurrence {
    pub document: DocumentId,
    pub frequency: Frequency,
}

impl Occurrence {
    pub const fn new(document: DocumentId, frequency: Frequency) -> Self {
        Self {
            document,
            frequency,
        }
    }
}

/// Occurrences of one keyword, kept in descending order of frequency.
pub type OccurrenceList = Vec<Occurrence>;

/// Moves the last occurrence of `occurrences` into its sorted position.
///
/// Elements `0..n-1` must already be in descending order of frequency. The
/// insertion point is found by binary search over that prefix: on an equal
/// frequency the search stops and the new occurrence goes right before the
/// midpoint it hit, otherwise it lands at the final lower bound.
///
/// Returns the frequencies of the midpoints examined, in order. A
/// single-element list needs no comparisons and yields an empty trace.
///
/// # Errors
///
/// Returns [`Error::InvalidState`] if `occurrences` is empty.
pub fn insert_last_occurrence(occurrences: &mut OccurrenceList) -> Result<Vec<Frequency>> {
    let Some(last) = occurrences.pop() else {
        return Err(Error::InvalidState(
            "cannot insert into an empty occurrence list".to_string(),
        ));
    };

    let mut trace = Vec::new();

    // Half-open [left, right) over the sorted prefix; the midpoint matches
    // an inclusive search with right = n - 2.
    let mut left = 0;
    let mut right = occurrences.len();

    let position = loop {
        if left >= right {
            break left;
        }

        let mid = (left + right - 1) / 2;
        let mid_frequency = occurrences[mid].frequency;
        trace.push(mid_frequency);

        match last.frequency.cmp(&mid_frequency) {
            std::cmp::Ordering::Equal => break mid,
            std::cmp::Ordering::Less => left = mid + 1,
            std::cmp::Ordering::Greater => right = mid,
        }
    };

    debug!(
        document = %last.document,
        frequency = last.frequency,
        position,
        ?trace,
        "Inserted occurrence"
    );

    occurrences.insert(position, last);

    Ok(trace)
}

/// Whether `occurrences` is in descending order of frequency.
pub fn is_sorted_descending(occurrences: &[Occurrence]) -> bool {
    occurrences
        .windows(2)
        .all(|pair| pair[0].frequency >= pair[1].frequency)
}
