//! Case-normalized, deduplicated skill collections.

use ahash::AHashSet;

/// Normalize a raw skill name: trim surrounding whitespace, lower-case.
pub fn normalize_skill(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// A small set of skill names, lower-cased and deduplicated
/// case-insensitively.
///
/// Insertion order is preserved for display and for index-based selection;
/// membership tests go through a hashed index so the scoring inner loop
/// never degrades to a linear scan per candidate.
#[derive(Debug, Clone, Default)]
pub struct SkillSet {
    names: Vec<String>,
    index: AHashSet<String>,
}

impl SkillSet {
    /// Create an empty skill set.
    pub fn new() -> Self {
        SkillSet::default()
    }

    /// Parse a comma-separated skill line. Empty fragments are dropped,
    /// duplicates are silently ignored.
    pub fn from_line(line: &str) -> Self {
        let mut set = SkillSet::new();
        for fragment in line.split(',') {
            set.add(fragment);
        }
        set
    }

    /// Add a skill, normalizing it first. Returns `false` if the skill was
    /// already present (or normalized to the empty string).
    pub fn add(&mut self, raw: &str) -> bool {
        let skill = normalize_skill(raw);
        if skill.is_empty() || self.index.contains(&skill) {
            return false;
        }
        self.names.push(skill.clone());
        self.index.insert(skill);
        true
    }

    /// Case-insensitive membership test.
    pub fn contains(&self, raw: &str) -> bool {
        self.index.contains(&normalize_skill(raw))
    }

    /// Number of distinct skills.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Skill names in insertion order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Iterate over skill names in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Drop all skills past `cap`, keeping the first `cap` in insertion
    /// order. Returns the number of skills dropped.
    pub fn truncate(&mut self, cap: usize) -> usize {
        if self.names.len() <= cap {
            return 0;
        }
        let dropped = self.names.split_off(cap);
        for skill in &dropped {
            self.index.remove(skill);
        }
        dropped.len()
    }
}

impl<S: AsRef<str>> FromIterator<S> for SkillSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = SkillSet::new();
        for raw in iter {
            set.add(raw.as_ref());
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_line_normalizes_and_dedupes() {
        let set = SkillSet::from_line("SQL, python ,sql,  Excel,PYTHON");
        assert_eq!(set.names(), &["sql", "python", "excel"]);
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_empty_fragments_dropped() {
        let set = SkillSet::from_line(" , sql,, ,python");
        assert_eq!(set.names(), &["sql", "python"]);

        let empty = SkillSet::from_line("   ");
        assert!(empty.is_empty());
    }

    #[test]
    fn test_contains_is_case_insensitive() {
        let set = SkillSet::from_line("sql,python");
        assert!(set.contains("SQL"));
        assert!(set.contains("  Python "));
        assert!(!set.contains("java"));
        assert!(!set.contains(""));
    }

    #[test]
    fn test_add_ignores_duplicates() {
        let mut set = SkillSet::new();
        assert!(set.add("Rust"));
        assert!(!set.add(" rust "));
        assert!(!set.add(""));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_truncate() {
        let mut set = SkillSet::from_line("a,b,c,d,e");
        assert_eq!(set.truncate(3), 2);
        assert_eq!(set.names(), &["a", "b", "c"]);
        assert!(!set.contains("d"));
        assert_eq!(set.truncate(3), 0);
    }
}
