use rand::seq::SliceRandom;
use rand::Rng;

/// Returns a shuffled copy of `items`.
pub fn shuffle<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut shuffled = items.to_vec();
    shuffled.shuffle(rng);
    shuffled
}

/// Picks up to `n` distinct elements in random order.
pub fn sample_size<T: Clone, R: Rng + ?Sized>(items: &[T], n: usize, rng: &mut R) -> Vec<T> {
    let mut picked = shuffle(items, rng);
    picked.truncate(n);
    picked
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn shuffle_keeps_elements() {
        let mut rng = StdRng::seed_from_u64(7);
        let items: Vec<u32> = (0..50).collect();
        let mut shuffled = shuffle(&items, &mut rng);
        assert_eq!(shuffled.len(), items.len());
        shuffled.sort();
        assert_eq!(shuffled, items);
    }

    #[test]
    fn same_seed_same_order() {
        let items: Vec<u32> = (0..50).collect();
        let a = shuffle(&items, &mut StdRng::seed_from_u64(42));
        let b = shuffle(&items, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn sample_size_is_capped_and_distinct() {
        let mut rng = StdRng::seed_from_u64(1);
        let items = [1, 2, 3, 4, 5];
        let mut three = sample_size(&items, 3, &mut rng);
        assert_eq!(three.len(), 3);
        three.sort();
        three.dedup();
        assert_eq!(three.len(), 3);

        assert_eq!(sample_size(&items[..2], 3, &mut rng).len(), 2);
        assert!(sample_size::<u8, _>(&[], 3, &mut rng).is_empty());
    }
}
