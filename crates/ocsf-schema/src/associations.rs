use indexmap::IndexMap;

/// The attribute associations of an [`EventClass`](crate::model::EventClass):
/// for a given attribute, the other attributes of the event that describe the
/// same entity (e.g. `device` and `actor.user`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Associations<'schema> {
    map: &'schema IndexMap<String, Vec<String>>,
}
impl<'schema> Associations<'schema> {
    pub(crate) fn new(map: &'schema IndexMap<String, Vec<String>>) -> Self {
        Self { map }
    }

    /// The first attribute associated with the given attribute.
    pub fn first(&self, name: &str) -> Option<&'schema str> {
        self.map.get(name)
            .and_then(|associated| associated.first())
            .map(|associated| associated.as_str())
    }

    /// All attributes associated with the given attribute.
    pub fn get(&self, name: &str) -> Option<&'schema [String]> {
        self.map.get(name).map(|associated| associated.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'schema str, &'schema [String])> {
        self.map.iter()
            .map(|(name, associated)| (name.as_str(), associated.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
