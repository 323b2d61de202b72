/// Why a data line decoded to nothing.  The loaders decide what to do
/// with these, the decoder only reports them.
#[derive(Debug, PartialEq, Eq)]
pub enum RowSkip {
    TooFewFields { found: usize, want: usize },
    BadKey(String),
}

#[derive(Debug, PartialEq, Eq)]
pub struct SkippedRow {
    pub line: usize,
    pub reason: RowSkip,
    pub text: String,
}

#[derive(Debug)]
pub struct RowReport<T> {
    pub records: Vec<T>,
    pub skipped: Vec<SkippedRow>,
}

/// Decodes every data line of a delimited resource.  The first line is
/// the header and is dropped without looking at it, blank lines are
/// dropped silently, and everything else is split and handed to the
/// record's TryFrom.
pub fn decode_rows<T>(text: &str, split: fn(&str) -> Vec<String>) -> RowReport<T>
where
    T: for<'f> TryFrom<&'f [String], Error = RowSkip>,
{
    let mut records = vec![];
    let mut skipped = vec![];

    for (idx, line) in text.lines().enumerate().skip(1) {
        if line.trim().is_empty() {
            continue;
        }

        let fields = split(line);
        match T::try_from(fields.as_slice()) {
            Ok(record) => records.push(record),
            Err(reason) => skipped.push(SkippedRow {
                line: idx + 1,
                reason,
                text: line.to_string(),
            }),
        }
    }

    return RowReport { records, skipped };
}
