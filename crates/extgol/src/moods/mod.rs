//! Per-mood interaction effects dispatched from the interaction phase.

mod healer;
mod naive;
mod vampire;

use crate::api::PairApi;
use crate::cell::Mood;

pub use healer::act_healer;
pub use naive::act_naive;
pub use vampire::act_vampire;

/// Run one interaction with `api.actor` acting. Returns whether either cell
/// changed: dead pairs, shared moods, exhausted prey and exhausted naive
/// actors all leave both cells untouched.
pub fn interact(api: &mut PairApi) -> bool {
    if !api.actor.alive || !api.other.alive || api.actor.mood == api.other.mood {
        return false;
    }
    match api.actor.mood {
        Mood::Healer => act_healer(api),
        Mood::Vampire => act_vampire(api),
        Mood::Naive => act_naive(api),
    }
}
