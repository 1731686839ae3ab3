use chrono::Utc;
use rand::rngs::ThreadRng;
use rand::Rng;

/// Upper bound (exclusive) of the random offset added to the clock
pub const JITTER_MS: i64 = 1000;

/// Hands out entry ids for one import run.
///
/// Ids are the current UNIX time in milliseconds plus a random offset, and
/// are strictly increasing within a generator, so no two entries from the
/// same run share an id.
#[derive(Debug)]
pub struct IdGenerator<R = ThreadRng> {
    rng: R,
    last: Option<i64>,
}

impl IdGenerator<ThreadRng> {
    pub fn new() -> Self {
        Self::with_rng(rand::thread_rng())
    }
}

impl Default for IdGenerator<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> IdGenerator<R> {
    pub fn with_rng(rng: R) -> Self {
        IdGenerator { rng, last: None }
    }

    pub fn next_id(&mut self) -> i64 {
        let candidate = Utc::now().timestamp_millis() + self.rng.gen_range(0..JITTER_MS);
        let id = match self.last {
            Some(last) if candidate <= last => last + 1,
            _ => candidate,
        };
        self.last = Some(id);
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn ids_never_repeat_in_a_burst() {
        let mut ids = IdGenerator::with_rng(StdRng::seed_from_u64(7));
        let drawn: Vec<i64> = (0..5000).map(|_| ids.next_id()).collect();
        let unique: HashSet<_> = drawn.iter().collect();
        assert_eq!(unique.len(), drawn.len());
        assert!(drawn.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn first_id_is_near_the_clock() {
        let before = Utc::now().timestamp_millis();
        let id = IdGenerator::new().next_id();
        let after = Utc::now().timestamp_millis();
        assert!(id >= before);
        assert!(id < after + JITTER_MS);
    }
}
