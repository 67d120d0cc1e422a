//! Property-based tests for frame sequences

use frameseq::{progression, Sequence};
use proptest::prelude::*;

fn frames_strategy() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(-500i64..500, 0..80)
}

fn is_canonical(frames: &[i64]) -> bool {
    frames.windows(2).all(|w| w[0] < w[1])
}

proptest! {
    #[test]
    fn test_spec_roundtrip(frames in frames_strategy()) {
        let seq = Sequence::from(frames);
        let parsed = Sequence::parse(&seq.spec()).unwrap();
        prop_assert_eq!(parsed.frames(), seq.frames());
    }

    #[test]
    fn test_canonical_form(frames in frames_strategy(), factor in -3.0f64..3.0, delta in -50i64..50) {
        let seq = Sequence::from(frames);
        prop_assert!(is_canonical(seq.frames()));
        prop_assert!(is_canonical(seq.scale(factor).unwrap().frames()));
        prop_assert!(is_canonical(seq.offset(delta).frames()));
        prop_assert!(is_canonical(seq.fill(2).frames()));
    }

    #[test]
    fn test_ranges_parse_canonical(first in -100i64..100, last in -100i64..100, step in 1i64..20) {
        let spec = format!("{}-{}x{}", first, last, step);
        let seq = Sequence::parse(&spec).unwrap();
        prop_assert!(!seq.is_empty());
        prop_assert!(is_canonical(seq.frames()));
        prop_assert_eq!(seq.first(), Some(first.min(last)));
        prop_assert_eq!(seq, Sequence::range_step(first, last, step));
    }

    #[test]
    fn test_chunk_coverage(frames in frames_strategy(), size in 1usize..12, enforce in any::<bool>()) {
        let seq = Sequence::from(frames).with_chunk_size(size);
        let chunks = seq.chunks(enforce);
        let joined: Vec<i64> = chunks.iter().flat_map(|c| c.iter()).collect();
        prop_assert_eq!(&joined[..], seq.frames());
        for chunk in &chunks {
            prop_assert!(!chunk.is_empty());
            prop_assert!(chunk.len() <= size);
            if enforce {
                prop_assert!(chunk.is_progression());
            }
        }
    }

    #[test]
    fn test_set_algebra(a in frames_strategy(), b in frames_strategy()) {
        let a = Sequence::from(a);
        let b = Sequence::from(b);

        let mut merged: Vec<i64> = a.iter().chain(b.iter()).collect();
        merged.sort_unstable();
        merged.dedup();
        let union = a.union(&b);
        prop_assert_eq!(union.frames(), &merged[..]);

        prop_assert_eq!(a.intersection(&b), b.intersection(&a));
        prop_assert!(a.difference(&a).is_empty());
        prop_assert_eq!(a.intersects(&b), !a.intersection(&b).is_empty());
        prop_assert_eq!(a.difference(&b).union(&a.intersection(&b)), a.clone());
    }

    #[test]
    fn test_subsample(frames in frames_strategy(), count in 0usize..100) {
        let seq = Sequence::from(frames);
        let sampled = seq.subsample(count);
        prop_assert!(is_canonical(sampled.frames()));
        prop_assert!(sampled.iter().all(|f| seq.contains(f)));
        if seq.is_empty() {
            prop_assert!(sampled.is_empty());
        } else if count >= seq.len() {
            prop_assert_eq!(sampled.frames(), seq.frames());
        } else {
            prop_assert_eq!(sampled.len(), count.max(1));
        }
    }

    #[test]
    fn test_partition_runs_are_progressions(frames in frames_strategy()) {
        let seq = Sequence::from(frames);
        let runs = progression::partition(seq.frames());
        let joined: Vec<i64> = runs.iter().flatten().copied().collect();
        prop_assert_eq!(&joined[..], seq.frames());
        for pair in runs.windows(2) {
            // each run is maximal: the next run's head cannot extend it
            prop_assert!(progression::is_progression(&pair[0]));
            let mut extended = pair[0].clone();
            extended.push(pair[1][0]);
            prop_assert!(pair[0].len() < 2 || !progression::is_progression(&extended));
        }
    }
}

#[test]
fn test_progression_conventions() {
    assert!(progression::is_progression(&[]));
    assert!(progression::is_progression(&[42]));
    assert_eq!(progression::step(&[]), Some(1));
    assert_eq!(progression::step(&[42]), Some(1));
}
