use crate::catalog::{Catalog, CountryId, Filter};
use crate::random::shuffle;
use log::{debug, warn};
use rand::Rng;
use std::collections::VecDeque;

/// The countries still to be asked, front first.
#[derive(Debug, Clone, Default)]
pub struct Queue {
    ids: VecDeque<CountryId>,
}

impl Queue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the contents with a fresh shuffle of every country the filter allows.
    pub fn refill<R: Rng + ?Sized>(&mut self, catalog: &Catalog, filter: &Filter, rng: &mut R) {
        let all: Vec<CountryId> = catalog.ids().collect();
        self.ids = shuffle(&all, rng)
            .into_iter()
            .filter(|id| catalog.get(*id).is_some_and(|c| filter.matches(c)))
            .collect();
        debug!("[Queue] Refilled with {} countries for {:?}.", self.ids.len(), filter);
    }

    /// Pops the front country, refilling once if the queue ran dry.
    ///
    /// `None` means the filter excludes every country.
    pub fn next<R: Rng + ?Sized>(
        &mut self,
        catalog: &Catalog,
        filter: &Filter,
        rng: &mut R,
    ) -> Option<CountryId> {
        if self.ids.is_empty() {
            self.refill(catalog, filter, rng);
        }
        let next = self.ids.pop_front();
        if next.is_none() {
            warn!("[Queue] No countries match {:?}.", filter);
        }
        next
    }

    pub fn push_front(&mut self, id: CountryId) {
        self.ids.push_front(id);
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = CountryId> + '_ {
        self.ids.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tests::small_catalog;
    use crate::catalog::{Continent, Region};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn all_filters() -> Vec<Filter> {
        let mut regions = vec![Region::World];
        regions.extend(Continent::ALL.map(Region::Continent));
        regions
            .into_iter()
            .flat_map(|region| {
                [true, false].map(|geoguessr_only| Filter {
                    region,
                    geoguessr_only,
                })
            })
            .collect()
    }

    #[test]
    fn refill_respects_every_filter() {
        let catalog = small_catalog();
        let mut rng = StdRng::seed_from_u64(3);
        for filter in all_filters() {
            let mut queue = Queue::new();
            queue.refill(&catalog, &filter, &mut rng);
            assert_eq!(queue.len(), catalog.filtered(&filter).len());
            for id in queue.iter() {
                assert!(filter.matches(catalog.get(id).unwrap()), "{filter:?}");
            }
        }
    }

    #[test]
    fn next_cycles_through_everything_then_refills() {
        let catalog = small_catalog();
        let mut rng = StdRng::seed_from_u64(11);
        let filter = Filter {
            region: Region::World,
            geoguessr_only: false,
        };
        let mut queue = Queue::new();
        let mut seen: Vec<CountryId> = (0..catalog.len())
            .map(|_| queue.next(&catalog, &filter, &mut rng).unwrap())
            .collect();
        assert!(queue.is_empty());
        seen.sort();
        assert_eq!(seen, catalog.ids().collect::<Vec<_>>());

        assert!(queue.next(&catalog, &filter, &mut rng).is_some());
        assert_eq!(queue.len(), catalog.len() - 1);
    }

    #[test]
    fn empty_filter_returns_none() {
        let catalog = small_catalog();
        let mut rng = StdRng::seed_from_u64(5);
        let filter = Filter {
            region: Region::Continent(Continent::Africa),
            geoguessr_only: false,
        };
        let mut queue = Queue::new();
        assert_eq!(queue.next(&catalog, &filter, &mut rng), None);
        assert_eq!(queue.next(&catalog, &filter, &mut rng), None);
        assert!(queue.is_empty());
    }

    #[test]
    fn push_front_comes_next() {
        let catalog = small_catalog();
        let mut rng = StdRng::seed_from_u64(5);
        let filter = Filter {
            region: Region::World,
            geoguessr_only: true,
        };
        let mut queue = Queue::new();
        queue.refill(&catalog, &filter, &mut rng);
        queue.push_front(CountryId(5));
        assert_eq!(queue.len(), catalog.filtered(&filter).len() + 1);
        assert_eq!(queue.next(&catalog, &filter, &mut rng), Some(CountryId(5)));
    }
}
