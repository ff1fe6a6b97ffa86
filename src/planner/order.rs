//! Play order planning

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::domain::errors::StitchResult;
use crate::domain::model::{Clip, PlayOrder};

/// Build the generator that drives one shuffle
///
/// A seed always yields the same generator; without one the generator is
/// seeded from OS entropy so every run differs.
pub fn play_rng(seed: Option<i64>) -> StdRng {
    match seed {
        Some(seed) => {
            debug!("Seeding play order generator with {}", seed);
            StdRng::seed_from_u64(seed as u64)
        }
        None => StdRng::from_entropy(),
    }
}

/// Planner that fixes the start clip and shuffles the rest
pub struct OrderPlanner;

impl OrderPlanner {
    /// Produce the play order for `clips` opening with `start`
    ///
    /// `clips` must be in a deterministic order (the catalog sorts by name) so
    /// that equal seeds give equal permutations.
    pub fn plan<R: Rng + ?Sized>(
        clips: &[Clip],
        start: &Clip,
        rng: &mut R,
    ) -> StitchResult<PlayOrder> {
        let mut rest: Vec<Clip> = clips.iter().filter(|clip| *clip != start).cloned().collect();
        rest.shuffle(rng);

        let order = PlayOrder::new(start.clone(), rest)?;
        info!(
            "Play order: {} clips, starting with {}",
            order.len(),
            order.start()
        );
        debug!("Play order: {:?}", order.names());
        Ok(order)
    }

    /// Plan with a generator built from an optional seed
    pub fn plan_seeded(clips: &[Clip], start: &Clip, seed: Option<i64>) -> StitchResult<PlayOrder> {
        let mut rng = play_rng(seed);
        Self::plan(clips, start, &mut rng)
    }
}
