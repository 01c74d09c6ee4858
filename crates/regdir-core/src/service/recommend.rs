//! Recommendation ranking over component search results

use lazy_static::lazy_static;
use regex::Regex;

use crate::domain::ComponentMatch;

/// Maximum number of recommendations returned
pub const MAX_RECOMMENDATIONS: usize = 8;

/// Registry that always ranks first
pub const PREFERRED_REGISTRY: &str = "shadcn/ui";

lazy_static! {
    static ref ANIMATION_REGISTRY: Regex =
        Regex::new(r"(?i)magic|animate|aceternity|react bits").expect("valid regex");
}

/// Rank search results for a free-text requirement and keep the top
/// [`MAX_RECOMMENDATIONS`].
///
/// Tiers: `shadcn/ui` first; then, only when the requirement mentions
/// "anim", registries with an animation-focused name; then everything else.
/// The sort is stable, so each tier keeps search order.
pub fn rank_recommendations(
    requirement: &str,
    mut matches: Vec<ComponentMatch>,
) -> Vec<ComponentMatch> {
    let wants_animation = requirement.to_lowercase().contains("anim");

    matches.sort_by_key(|m| tier(m, wants_animation));
    matches.truncate(MAX_RECOMMENDATIONS);
    matches
}

fn tier(m: &ComponentMatch, wants_animation: bool) -> u8 {
    if m.registry_name == PREFERRED_REGISTRY {
        0
    } else if wants_animation && ANIMATION_REGISTRY.is_match(&m.registry_name) {
        1
    } else {
        2
    }
}
