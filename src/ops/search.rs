use std::ops::Range;

use regex::Regex;

use crate::model::task::Task;

/// Which field of a task matched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchField {
    Title,
    Description,
}

/// A search hit against one field of one task
#[derive(Debug, Clone)]
pub struct SearchHit {
    pub task_id: String,
    pub field: MatchField,
    pub spans: Vec<Range<usize>>,
}

/// Collect all non-overlapping match byte-ranges for a regex in the given text.
fn find_matches(re: &Regex, text: &str) -> Vec<Range<usize>> {
    re.find_iter(text).map(|m| m.start()..m.end()).collect()
}

/// Search task titles and descriptions, reporting every matching field
/// with its match spans. Tasks are visited in store order.
pub fn search_tasks(tasks: &[Task], re: &Regex) -> Vec<SearchHit> {
    let mut hits = Vec::new();
    for task in tasks {
        let spans = find_matches(re, &task.title);
        if !spans.is_empty() {
            hits.push(SearchHit {
                task_id: task.id.clone(),
                field: MatchField::Title,
                spans,
            });
        }

        let spans = find_matches(re, &task.description);
        if !spans.is_empty() {
            hits.push(SearchHit {
                task_id: task.id.clone(),
                field: MatchField::Description,
                spans,
            });
        }
    }
    hits
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
