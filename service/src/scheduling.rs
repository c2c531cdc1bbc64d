use chrono::{Duration, NaiveTime};
use rand::seq::SliceRandom;
use rand::Rng;

pub const GROUP_SIZE: usize = 4;

/// Shuffles both queues and places the women's block at a random group
/// boundary of the men's queue before cutting it into groups of four.
pub fn arrange_players<T, R>(mut men: Vec<T>, mut women: Vec<T>, rng: &mut R) -> Vec<Vec<T>>
where
    T: Clone,
    R: Rng + ?Sized,
{
    men.shuffle(rng);
    women.shuffle(rng);

    let total = men.len() + women.len();
    let boundaries: Vec<usize> = (GROUP_SIZE..=total).step_by(GROUP_SIZE).collect();
    let at = boundaries
        .choose(rng)
        .copied()
        .unwrap_or(0)
        .min(men.len());

    let mut queue = men;
    queue.splice(at..at, women);
    queue.chunks(GROUP_SIZE).map(<[T]>::to_vec).collect()
}

pub fn tee_times(first: NaiveTime, interval_minutes: u32, groups: usize) -> Vec<NaiveTime> {
    (0..groups)
        .map(|k| first + Duration::minutes(k as i64 * interval_minutes as i64))
        .collect()
}
