//! HEALER acting: heals naive cells, feeds vampires at its own expense.

use crate::api::PairApi;
use crate::cell::Mood;

pub fn act_healer(api: &mut PairApi) -> bool {
    match api.other.mood {
        Mood::Naive => api.other.life_points = api.other.life_points.saturating_add(1),
        Mood::Vampire => {
            api.feed_other(1);
            if api.actor.empowered {
                api.actor.healer_to_vampire = true;
            }
        }
        Mood::Healer => return false,
    }
    true
}
