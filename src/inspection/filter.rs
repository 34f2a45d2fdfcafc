//! Filtering scene objects by name and by component origin.

use super::scene_query::{SceneComponent, SceneObject};

/// Default minimum similarity for a "did you mean" suggestion.
pub const DEFAULT_SUGGESTION_THRESHOLD: f64 = 0.5;

/// The user's filter settings.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InspectorFilter {
    /// Case-insensitive substring to look for in object names. Empty matches everything.
    pub search: String,
    /// Only show user-authored scripts, and objects that have at least one.
    pub scripts_only: bool,
}

impl InspectorFilter {
    pub fn new(search: impl Into<String>, scripts_only: bool) -> Self {
        Self {
            search: search.into(),
            scripts_only,
        }
    }

    pub fn name_matches(&self, name: &str) -> bool {
        name_matches(name, &self.search)
    }

    /// The origin predicate at object granularity.
    pub fn origin_passes(&self, object: &SceneObject) -> bool {
        !self.scripts_only || object.has_user_script()
    }

    /// Whether the object is shown at all.
    pub fn object_passes(&self, object: &SceneObject) -> bool {
        self.name_matches(&object.name) && self.origin_passes(object)
    }

    /// Whether a component of a shown object is listed.
    ///
    /// Uses the same classification as [`Self::origin_passes`], so a shown object
    /// always lists at least one component in scripts-only mode.
    pub fn component_passes(&self, component: &SceneComponent) -> bool {
        !self.scripts_only || component.origin.is_user_authored()
    }
}

/// Case-insensitive substring match. An empty search matches every name.
pub fn name_matches(name: &str, search: &str) -> bool {
    search.is_empty() || name.to_lowercase().contains(&search.to_lowercase())
}

/// Picks the candidate name most similar to `search`.
///
/// Similarity is the normalized Damerau-Levenshtein distance of the lowercased strings.
/// Returns `None` when no candidate reaches `threshold`. Ties keep the earliest candidate.
pub fn suggest_name<'a>(
    candidates: impl IntoIterator<Item = &'a str>,
    search: &str,
    threshold: f64,
) -> Option<&'a str> {
    let search = search.to_lowercase();
    let mut best: Option<(&'a str, f64)> = None;

    for candidate in candidates {
        let score = strsim::normalized_damerau_levenshtein(&candidate.to_lowercase(), &search);
        if score < threshold {
            continue;
        }
        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((candidate, score));
        }
    }

    best.map(|(name, _)| name)
}
