use std::collections::HashMap;

use crate::{dj::Dj, error::CatalogError, source::TextSource};

pub trait TestDj {
    fn with_rounds(name: &str, rounds: [Option<u32>; 4], total_id: Option<u32>) -> Dj;
}

impl TestDj for Dj {
    fn with_rounds(name: &str, rounds: [Option<u32>; 4], total_id: Option<u32>) -> Dj {
        return Dj {
            name: name.to_string(),
            round_id_1: rounds[0],
            round_id_2: rounds[1],
            round_id_3: rounds[2],
            round_id_4: rounds[3],
            total_id,
        };
    }
}

pub fn fields(raw: &[&str]) -> Vec<String> {
    return raw.iter().map(|f| f.to_string()).collect();
}

pub struct StaticSource {
    resources: HashMap<String, String>,
}

impl StaticSource {
    pub fn new(resources: &[(&str, &str)]) -> StaticSource {
        return StaticSource {
            resources: resources
                .iter()
                .map(|(name, text)| (name.to_string(), text.to_string()))
                .collect(),
        };
    }
}

impl TextSource for StaticSource {
    fn fetch_text(&self, name: &str) -> Result<String, CatalogError> {
        return match self.resources.get(name) {
            Some(text) => Ok(text.to_string()),
            None => Err(CatalogError::Fetch(name.to_string())),
        };
    }
}
