use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::song::Song;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Quarter {
    Q1,
    Q2,
    Q3,
    Q4,
    #[serde(rename = "Song of the Year")]
    SongOfTheYear,
}

impl Display for Quarter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Quarter::Q1 => "Q1",
            Quarter::Q2 => "Q2",
            Quarter::Q3 => "Q3",
            Quarter::Q4 => "Q4",
            Quarter::SongOfTheYear => "Song of the Year",
        };

        return write!(f, "{}", label);
    }
}

/// Awards are put together by the front end out of a quarter, a dj name
/// and a resolved song.  The loaders never build or validate these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Award {
    pub quarter: Quarter,
    pub dj: String,
    pub song: Song,
}
