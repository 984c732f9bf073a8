use std::collections::BTreeSet;

/// Qualified class and method names touched by a change
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangedEntities {
    pub classes: BTreeSet<String>,
    pub methods: BTreeSet<String>,
}

impl ChangedEntities {
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty() && self.methods.is_empty()
    }

    pub fn merge(&mut self, other: ChangedEntities) {
        self.classes.extend(other.classes);
        self.methods.extend(other.methods);
    }
}

/// Ground-truth entities for one issue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Goldset {
    pub issue_id: String,
    pub entities: ChangedEntities,
}

impl Goldset {
    pub fn new(issue_id: &str) -> Self {
        Self {
            issue_id: issue_id.to_string(),
            entities: ChangedEntities::default(),
        }
    }

    pub fn classes(&self) -> &BTreeSet<String> {
        &self.entities.classes
    }

    pub fn methods(&self) -> &BTreeSet<String> {
        &self.entities.methods
    }
}
