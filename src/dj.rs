use std::fmt::Display;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::{fields::parse_leading_int, rows::RowSkip};

pub const DJ_FIELDS: usize = 6;

/// One roster row: a name, up to four round references into the song
/// catalog, and an aggregate reference.  None means the source field was
/// empty or unusable, which is not the same as zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dj {
    pub name: String,
    pub round_id_1: Option<u32>,
    pub round_id_2: Option<u32>,
    pub round_id_3: Option<u32>,
    pub round_id_4: Option<u32>,
    pub total_id: Option<u32>,
}

fn optional_id(field: &str) -> Option<u32> {
    if field.is_empty() {
        return None;
    }

    return parse_leading_int(field);
}

impl Dj {
    pub fn round_ids(&self) -> [Option<u32>; 4] {
        return [
            self.round_id_1,
            self.round_id_2,
            self.round_id_3,
            self.round_id_4,
        ];
    }
}

impl TryFrom<&[String]> for Dj {
    type Error = RowSkip;

    fn try_from(fields: &[String]) -> Result<Self, Self::Error> {
        if fields.len() < DJ_FIELDS {
            return Err(RowSkip::TooFewFields {
                found: fields.len(),
                want: DJ_FIELDS,
            });
        }

        return Ok(Dj {
            name: fields[0].to_string(),
            round_id_1: optional_id(&fields[1]),
            round_id_2: optional_id(&fields[2]),
            round_id_3: optional_id(&fields[3]),
            round_id_4: optional_id(&fields[4]),
            total_id: optional_id(&fields[5]),
        });
    }
}

impl Display for Dj {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let ids = self
            .round_ids()
            .iter()
            .chain([self.total_id].iter())
            .map(|id| match id {
                Some(id) => id.to_string(),
                None => "".to_string(),
            })
            .join(",");

        return write!(f, "{},{}", self.name, ids);
    }
}
