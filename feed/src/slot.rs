use payloads::{FetchKind, Job};

/// One of the three result fields of the homepage.
///
/// `Empty` is the "no data" sentinel: a parsed job list with no elements
/// always becomes `Empty`, so `Jobs` never holds an empty vector.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum JobSlot {
    #[default]
    Empty,
    Jobs(Vec<Job>),
}

impl JobSlot {
    pub fn is_empty(&self) -> bool {
        matches!(self, JobSlot::Empty)
    }

    pub fn jobs(&self) -> &[Job] {
        match self {
            JobSlot::Empty => &[],
            JobSlot::Jobs(jobs) => jobs,
        }
    }
}

impl From<Vec<Job>> for JobSlot {
    fn from(jobs: Vec<Job>) -> Self {
        if jobs.is_empty() {
            JobSlot::Empty
        } else {
            JobSlot::Jobs(jobs)
        }
    }
}

/// Names a slot, e.g. the one currently rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotKind {
    Nearby,
    Search,
    Recommend,
}

impl From<FetchKind> for SlotKind {
    fn from(kind: FetchKind) -> Self {
        match kind {
            FetchKind::Nearby => SlotKind::Nearby,
            FetchKind::Search => SlotKind::Search,
            FetchKind::Recommend => SlotKind::Recommend,
        }
    }
}

impl SlotKind {
    pub fn label(&self) -> &'static str {
        match self {
            SlotKind::Nearby => "Nearby",
            SlotKind::Search => "Search Results",
            SlotKind::Recommend => "Recommended",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_vector_becomes_sentinel() {
        assert_eq!(JobSlot::from(vec![]), JobSlot::Empty);
        assert!(JobSlot::from(vec![]).is_empty());
    }

    #[test]
    fn non_empty_vector_is_kept() {
        let job: Job = serde_json::from_value(json!({"id": "1"})).unwrap();
        let slot = JobSlot::from(vec![job.clone()]);
        assert_eq!(slot, JobSlot::Jobs(vec![job]));
        assert_eq!(slot.jobs().len(), 1);
    }
}
