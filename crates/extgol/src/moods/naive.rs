//! NAIVE acting: takes healing, gets bitten by vampires.

use crate::api::PairApi;
use crate::cell::Mood;

pub fn act_naive(api: &mut PairApi) -> bool {
    if api.actor.life_points < 0 {
        return false;
    }
    match api.other.mood {
        Mood::Healer => api.actor.life_points = api.actor.life_points.saturating_add(1),
        Mood::Vampire => {
            api.actor.naive_to_vampire = true;
            api.feed_other(1);
        }
        Mood::Naive => return false,
    }
    true
}
