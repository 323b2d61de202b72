use std::collections::HashMap;

use crate::{
    dj::Dj,
    error::CatalogError,
    parse::{load_djs, load_songs},
    song::Song,
    source::TextSource,
};

/// Both lookup structures behind one load.  Nothing is cached, every
/// load fetches and parses the resources again.
#[derive(Debug)]
pub struct Catalog {
    pub songs: HashMap<u32, Song>,
    pub djs: Vec<Dj>,
}

impl Catalog {
    pub fn load(source: &impl TextSource) -> Result<Catalog, CatalogError> {
        return Ok(Catalog {
            songs: load_songs(source)?,
            djs: load_djs(source)?,
        });
    }

    pub fn song(&self, id: u32) -> Option<&Song> {
        return self.songs.get(&id);
    }
}
