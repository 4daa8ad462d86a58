use std::collections::HashMap;

use crate::{
    invariants::Filename,
    models::{FilenameCount, ParsedRequest, TimelineEntry},
};

// Both reports strip the protocol out of the path field before
// inspecting it.
const HTTP_VERSION: &str = "HTTP/1.1";

/// Frequency of filename-like tokens across request paths, count
/// descending. The accumulator is insertion-ordered and the final
/// sort is stable, so equal counts keep first-seen order.
pub fn filename_frequencies<'a, I>(requests: I) -> Vec<FilenameCount>
where
    I: IntoIterator<Item = &'a ParsedRequest>,
{
    let mut counts: Vec<FilenameCount> = Vec::new();
    let mut index: HashMap<Filename, usize> = HashMap::new();
    for request in requests {
        let cleaned = request.path.replace(HTTP_VERSION, "");
        let Some(filename) = Filename::first_in(&cleaned) else {
            continue;
        };
        match index.get(&filename) {
            Some(&at) => counts[at].count += 1,
            None => {
                index.insert(filename.clone(), counts.len());
                counts.push(FilenameCount { filename, count: 1 });
            }
        }
    }
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

/// Chronology of requests whose path contains `target`, ascending by
/// reformatted timestamp. Entries with unparseable timestamps are
/// dropped. Sorting compares the display strings directly; offsets
/// are not normalized first.
pub fn path_timeline<'a, I>(requests: I, target: &str) -> Vec<TimelineEntry>
where
    I: IntoIterator<Item = &'a ParsedRequest>,
{
    let mut entries: Vec<TimelineEntry> = requests
        .into_iter()
        .filter(|request| request.path.contains(target))
        .filter_map(|request| {
            let time = request.timestamp.parse().ok()?;
            Some(TimelineEntry {
                time,
                status: request.status_code.to_string(),
                path_only: request.path.replace(HTTP_VERSION, "").trim().to_string(),
            })
        })
        .collect();
    entries.sort_by(|a, b| a.time.cmp(&b.time));
    entries
}
