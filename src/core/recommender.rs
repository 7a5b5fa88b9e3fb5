use crate::core::scoring::count_matches;
use crate::models::{PreferenceSet, Product, Recommendation, TieBreak};
use tracing::{debug, info};

/// Ranks catalog products by how many tags they share with the preferences
///
/// # Pipeline Stages
/// 1. Deduplicate preferences into a set
/// 2. Count shared tags per product, dropping products with none
/// 3. Sort by match count (descending), then by the tie-break policy
#[derive(Debug, Clone, Copy, Default)]
pub struct Recommender {
    tie_break: TieBreak,
}

impl Recommender {
    pub fn new(tie_break: TieBreak) -> Self {
        Self { tie_break }
    }

    pub fn tie_break(&self) -> TieBreak {
        self.tie_break
    }

    /// Recommend products for the given preferences
    ///
    /// Preferences are expected to be normalized already; only duplicates
    /// are removed here.
    ///
    /// # Returns
    /// One entry per product with at least one shared tag, non-increasing in
    /// `matches`
    pub fn recommend<S: AsRef<str>>(
        &self,
        catalog: &[Product],
        preferences: &[S],
    ) -> Vec<Recommendation> {
        let preference_set: PreferenceSet = preferences.iter().collect();

        debug!(
            received = preferences.len(),
            distinct = preference_set.len(),
            "Deduplicated preferences"
        );

        if preference_set.is_empty() {
            return Vec::new();
        }

        let mut recommendations: Vec<Recommendation> = catalog
            .iter()
            .filter_map(|product| {
                let matches = count_matches(&product.tags, &preference_set);
                debug!(product = %product.name, matches, "Scored product");

                (matches > 0).then(|| Recommendation {
                    name: product.name.clone(),
                    matches,
                })
            })
            .collect();

        // sort_by is stable, so CatalogOrder needs no secondary key
        match self.tie_break {
            TieBreak::CatalogOrder => {
                recommendations.sort_by(|a, b| b.matches.cmp(&a.matches));
            }
            TieBreak::Name => {
                recommendations.sort_by(|a, b| {
                    b.matches
                        .cmp(&a.matches)
                        .then_with(|| a.name.cmp(&b.name))
                });
            }
        }

        info!(
            catalog_size = catalog.len(),
            recommended = recommendations.len(),
            "Recommendations computed"
        );

        recommendations
    }
}

/// Recommend with the default (catalog order) tie-break
pub fn recommend<S: AsRef<str>>(catalog: &[Product], preferences: &[S]) -> Vec<Recommendation> {
    Recommender::default().recommend(catalog, preferences)
}
