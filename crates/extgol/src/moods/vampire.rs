//! VAMPIRE acting: bites non-vampires that still have energy.

use crate::api::PairApi;
use crate::cell::Mood;

pub fn act_vampire(api: &mut PairApi) -> bool {
    if api.other.life_points < 0 {
        return false;
    }
    match api.other.mood {
        Mood::Naive => {
            api.drain_other(1);
            api.other.naive_to_vampire = true;
        }
        Mood::Healer => {
            api.drain_other(1);
            if api.actor.empowered {
                api.other.healer_to_vampire = true;
            }
        }
        Mood::Vampire => return false,
    }
    true
}
