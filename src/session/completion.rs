use serde::Serialize;
use std::collections::BTreeSet;

/// Ids of the courses the student has marked complete.
///
/// Sólo el Toggle Controller (`Session`) lo modifica; el resto del crate
/// lo consulta.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CompletionSet(BTreeSet<String>);

impl CompletionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.0.contains(id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub(crate) fn insert(&mut self, id: &str) -> bool {
        self.0.insert(id.to_string())
    }

    pub(crate) fn remove(&mut self, id: &str) -> bool {
        self.0.remove(id)
    }
}

#[cfg(test)]
impl<'a> FromIterator<&'a str> for CompletionSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        CompletionSet(iter.into_iter().map(str::to_string).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_remove() {
        let mut set = CompletionSet::new();
        assert!(set.insert("CS1428"));
        assert!(!set.insert("CS1428"));
        assert_eq!(set.len(), 1);
        assert!(set.remove("CS1428"));
        assert!(set.is_empty());
    }
}
