use std::collections::HashMap;

use log::{debug, info};

use crate::{
    dj::Dj,
    error::CatalogError,
    fields::{split_plain, split_quoted},
    rows::{decode_rows, RowReport},
    song::Song,
    source::TextSource,
};

pub const SONGS_RESOURCE: &str = "data/songs.csv";
pub const DJS_RESOURCE: &str = "data/djs.csv";

pub fn parse_songs(text: &str) -> HashMap<u32, Song> {
    let report: RowReport<Song> = decode_rows(text, split_quoted);
    log_skipped("songs", &report);

    let mut songs = HashMap::new();
    for song in report.records {
        // a later row with the same id wins
        songs.insert(song.id, song);
    }

    return songs;
}

pub fn parse_djs(text: &str) -> Vec<Dj> {
    let report: RowReport<Dj> = decode_rows(text, split_plain);
    log_skipped("djs", &report);

    return report.records;
}

pub fn load_songs(source: &impl TextSource) -> Result<HashMap<u32, Song>, CatalogError> {
    info!("about to parse songs from {}", SONGS_RESOURCE);
    let text = source.fetch_text(SONGS_RESOURCE)?;

    return Ok(parse_songs(&text));
}

pub fn load_djs(source: &impl TextSource) -> Result<Vec<Dj>, CatalogError> {
    info!("about to parse djs from {}", DJS_RESOURCE);
    let text = source.fetch_text(DJS_RESOURCE)?;

    return Ok(parse_djs(&text));
}

fn log_skipped<T>(what: &str, report: &RowReport<T>) {
    for row in &report.skipped {
        debug!(
            "{}: dropped line {}: {:?} ({})",
            what, row.line, row.reason, row.text
        );
    }
}
