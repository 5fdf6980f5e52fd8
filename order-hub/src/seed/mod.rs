//! Seed dataset
//!
//! The initial chefs (with menus, reviews, planned meals and weekly plans)
//! come from a JSON document of the form `{ "chefs": [...] }`. A copy is
//! compiled into the binary; `SEED_PATH` points at a replacement file.

use crate::core::Config;
use crate::utils::validation::{MAX_PRICE, validate_price};
use serde::Deserialize;
use shared::models::Chef;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

const DEFAULT_SEED: &str = include_str!("default_seed.json");

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Failed to read seed file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse seed: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid seed: {0}")]
    Invalid(String),
}

#[derive(Debug, Deserialize)]
struct SeedFile {
    chefs: Vec<Chef>,
}

/// Parse and validate a seed document
pub fn parse_seed(json: &str) -> Result<Vec<Chef>, SeedError> {
    let seed: SeedFile = serde_json::from_str(json)?;
    validate_chefs(&seed.chefs)?;
    Ok(seed.chefs)
}

/// The built-in seed
pub fn default_chefs() -> Result<Vec<Chef>, SeedError> {
    parse_seed(DEFAULT_SEED)
}

/// Load chefs from a seed file on disk
pub fn load_chefs(path: impl AsRef<Path>) -> Result<Vec<Chef>, SeedError> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_seed(&json)
}

/// Load the seed named by `config.seed_path`, or the built-in one
pub fn load_seed(config: &Config) -> Result<Vec<Chef>, SeedError> {
    let chefs = match &config.seed_path {
        Some(path) => {
            tracing::info!(path = %path, "Loading seed file");
            load_chefs(path)?
        }
        None => default_chefs()?,
    };
    tracing::info!(chefs = chefs.len(), "Seed loaded");
    Ok(chefs)
}

fn validate_chefs(chefs: &[Chef]) -> Result<(), SeedError> {
    let mut chef_ids = HashSet::new();
    for chef in chefs {
        if chef.id.trim().is_empty() {
            return Err(SeedError::Invalid(format!("chef '{}' has an empty id", chef.name)));
        }
        if !chef_ids.insert(chef.id.as_str()) {
            return Err(SeedError::Invalid(format!("duplicate chef id {}", chef.id)));
        }
        if !(1..=3).contains(&chef.price_level) {
            return Err(SeedError::Invalid(format!(
                "chef {} has price level {}, expected 1-3",
                chef.id, chef.price_level
            )));
        }

        let mut item_ids = HashSet::new();
        for item in &chef.menu_items {
            if !item_ids.insert(item.id.as_str()) {
                return Err(SeedError::Invalid(format!(
                    "duplicate menu item {} on chef {}",
                    item.id, chef.id
                )));
            }
            validate_price(item.price, &format!("menu item {} price", item.id))
                .map_err(|e| SeedError::Invalid(e.to_string()))?;
            for option in item.modifiers.iter().flat_map(|m| &m.options) {
                let adjustment = option.price_adjustment;
                if !adjustment.is_finite() || adjustment.abs() > MAX_PRICE {
                    return Err(SeedError::Invalid(format!(
                        "menu item {} option {} has invalid price adjustment {adjustment}",
                        item.id, option.label
                    )));
                }
            }
        }

        for meal in &chef.planned_meals {
            if meal.current_orders > meal.max_orders {
                return Err(SeedError::Invalid(format!(
                    "planned meal {} has {} orders but a limit of {}",
                    meal.id, meal.current_orders, meal.max_orders
                )));
            }
            validate_price(meal.price, &format!("planned meal {} price", meal.id))
                .map_err(|e| SeedError::Invalid(e.to_string()))?;
        }
    }
    Ok(())
}
