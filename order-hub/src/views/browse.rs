//! Chef browsing: search and filters

use super::contains_ci;
use shared::models::{Chef, PrepWindow};
use std::collections::BTreeSet;

/// Filters applied on the browse screen; the default matches every chef
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChefFilter {
    /// Matched against chef name and cuisine, case-insensitive
    pub search: String,
    /// Exact cuisine
    pub cuisine: Option<String>,
    pub prep_window: Option<PrepWindow>,
    /// Only chefs holding every verified badge
    pub verified_only: bool,
    pub online_only: bool,
}

impl ChefFilter {
    pub fn matches(&self, chef: &Chef) -> bool {
        let query = self.search.trim().to_lowercase();
        if !(contains_ci(&chef.name, &query) || contains_ci(&chef.cuisine, &query)) {
            return false;
        }
        if let Some(cuisine) = &self.cuisine
            && &chef.cuisine != cuisine
        {
            return false;
        }
        if let Some(prep) = self.prep_window
            && chef.default_prep_window_hours != prep
        {
            return false;
        }
        if self.verified_only && !chef.is_fully_verified() {
            return false;
        }
        !self.online_only || chef.is_online
    }
}

/// Chefs matching `filter`, in seed order
pub fn filter_chefs<'a>(chefs: &'a [Chef], filter: &ChefFilter) -> Vec<&'a Chef> {
    chefs.iter().filter(|c| filter.matches(c)).collect()
}

/// Distinct cuisines, sorted
pub fn cuisines(chefs: &[Chef]) -> Vec<String> {
    chefs
        .iter()
        .map(|c| c.cuisine.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
