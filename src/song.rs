use serde::{Deserialize, Serialize};

use crate::{fields::parse_leading_int, rows::RowSkip};

pub const SONG_FIELDS: usize = 9;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    pub id: u32,
    pub title: String,
    pub artist: String,
    pub artist_localized: String,
    pub work: String,
    pub work_localized: String,
    pub credit: String,
    pub info: String,
    pub spotify_link: String,
}

impl TryFrom<&[String]> for Song {
    type Error = RowSkip;

    fn try_from(fields: &[String]) -> Result<Self, Self::Error> {
        if fields.len() < SONG_FIELDS {
            return Err(RowSkip::TooFewFields {
                found: fields.len(),
                want: SONG_FIELDS,
            });
        }

        let id = match parse_leading_int(&fields[0]) {
            Some(id) => id,
            None => return Err(RowSkip::BadKey(fields[0].to_string())),
        };

        return Ok(Song {
            id,
            title: fields[1].to_string(),
            artist: fields[2].to_string(),
            artist_localized: fields[3].to_string(),
            work: fields[4].to_string(),
            work_localized: fields[5].to_string(),
            credit: fields[6].to_string(),
            info: fields[7].to_string(),
            spotify_link: fields[8].to_string(),
        });
    }
}
