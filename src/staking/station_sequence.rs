use crate::misc::FloatingPoint;

/// Computes the ordered staking stations between `start` and `end`.
///
/// The first candidate is the smallest multiple of `max_step` at or above
/// `start`; stations then advance by `max_step` while strictly below `end`.
/// `end` itself is always the final element, so the terminal segment may be
/// shorter than `max_step`. When `start` falls exactly on an increment it is
/// returned as well; the caller is expected to skip the resulting
/// zero-length segment.
///
/// Preconditions (`start < end`, `max_step > 0`) are validated by the
/// solvers before calling.
pub fn station_sequence<T: FloatingPoint>(start: T, end: T, max_step: T) -> Vec<T> {
    let first = (start / max_step).ceil() * max_step;
    let mut stations = if first < end { vec![first] } else { vec![] };

    while let Some(&last) = stations.last() {
        if last + max_step < end {
            stations.push(last + max_step);
        } else {
            break;
        }
    }

    if stations.last().map_or(true, |&last| last < end) {
        stations.push(end);
    }

    stations
}
