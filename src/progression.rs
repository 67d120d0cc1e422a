//! Arithmetic progression analysis
//!
//! A progression is a run of sorted frames separated by one constant gap.
//! Lists of fewer than three frames are always progressions. Gaps that do
//! not fit in an `i64` (e.g. from `i64::MIN` to `i64::MAX`) never match
//! any other gap.

/// Gap from `a` to `b`, `None` if it overflows
fn gap(a: i64, b: i64) -> Option<i64> {
    b.checked_sub(a)
}

/// Check whether the whole list shares a single gap
pub fn is_progression(frames: &[i64]) -> bool {
    if frames.len() < 3 {
        return true;
    }
    let Some(first_gap) = gap(frames[0], frames[1]) else {
        return false;
    };
    frames.windows(2).all(|w| gap(w[0], w[1]) == Some(first_gap))
}

/// Gap of a progression.
///
/// Lists of zero or one frame report a step of 1. Returns `None` when the
/// list is not a progression or its gap overflows.
pub fn step(frames: &[i64]) -> Option<i64> {
    if !is_progression(frames) {
        return None;
    }
    match frames {
        [first, second, ..] => gap(*first, *second),
        _ => Some(1),
    }
}

/// Whether `next` can be appended to `run` without breaking its gap
pub(crate) fn extends(run: &[i64], next: i64) -> bool {
    match run {
        [] => true,
        [only] => gap(*only, next).is_some(),
        [first, second, rest @ ..] => {
            let last = *rest.last().unwrap_or(second);
            gap(*first, *second).is_some() && gap(last, next) == gap(*first, *second)
        },
    }
}

/// Split a list into maximal consecutive progressions.
///
/// The input is sorted first. Runs are grown greedily from the left; a new
/// run starts whenever the next frame would break the gap fixed by the
/// current run's first two frames.
pub fn partition(frames: &[i64]) -> Vec<Vec<i64>> {
    let mut sorted = frames.to_vec();
    sorted.sort_unstable();

    let mut runs: Vec<Vec<i64>> = Vec::new();
    let mut current: Vec<i64> = Vec::new();
    for frame in sorted {
        if !extends(&current, frame) {
            runs.push(std::mem::take(&mut current));
        }
        current.push(frame);
    }
    if !current.is_empty() {
        runs.push(current);
    }
    runs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trivial_progressions() {
        assert!(is_progression(&[]));
        assert!(is_progression(&[4]));
        assert!(is_progression(&[4, 100]));
        assert_eq!(step(&[]), Some(1));
        assert_eq!(step(&[4]), Some(1));
        assert_eq!(step(&[4, 100]), Some(96));
    }

    #[test]
    fn test_is_progression() {
        assert!(is_progression(&[1, 3, 5, 7]));
        assert!(is_progression(&[-6, -4, -2, 0]));
        assert!(!is_progression(&[1, 2, 4]));
        assert_eq!(step(&[1, 2, 4]), None);
        assert_eq!(step(&[10, 20, 30]), Some(10));
    }

    #[test]
    fn test_extends() {
        assert!(extends(&[], 5));
        assert!(extends(&[1], 5));
        assert!(extends(&[1, 3], 5));
        assert!(!extends(&[1, 3], 6));
        assert!(extends(&[1, 3, 5], 7));
    }

    #[test]
    fn test_partition() {
        let runs = partition(&[1, 2, 3, 5, 7, 20]);
        assert_eq!(runs, vec![vec![1, 2, 3], vec![5, 7], vec![20]]);
    }

    #[test]
    fn test_partition_sorts_input() {
        let runs = partition(&[9, 1, 5, 3, 7]);
        assert_eq!(runs, vec![vec![1, 3, 5, 7, 9]]);
    }

    #[test]
    fn test_partition_single_outliers() {
        let runs = partition(&[0, 10, 11, 12, 40]);
        assert_eq!(runs, vec![vec![0, 10], vec![11, 12], vec![40]]);
    }

    #[test]
    fn test_overflowing_gap() {
        let extremes = [i64::MIN, i64::MAX];
        assert!(is_progression(&extremes));
        assert_eq!(step(&extremes), None);
        assert!(!extends(&[i64::MIN], i64::MAX));
        assert!(!is_progression(&[i64::MIN, 0, i64::MAX]));
        assert_eq!(partition(&extremes), vec![vec![i64::MIN], vec![i64::MAX]]);
        assert_eq!(
            partition(&[i64::MIN, 0, i64::MAX]),
            vec![vec![i64::MIN], vec![0, i64::MAX]]
        );
        assert_eq!(
            partition(&[i64::MIN, -1, i64::MAX]),
            vec![vec![i64::MIN, -1], vec![i64::MAX]]
        );
    }

    #[test]
    fn test_partition_empty() {
        assert!(partition(&[]).is_empty());
    }
}
