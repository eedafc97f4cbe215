/// Controls what [`Schema::enrich`](crate::Schema::enrich) adds to an event
/// beyond its `type_uid`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct EnrichOptions {
    /// Add the text value (the "sibling") of every enumerated attribute,
    /// e.g. `activity_name` for `activity_id`.
    pub add_enum_siblings: bool,

    /// Generate the event's `observables` array.
    pub add_observables: bool,
}
impl EnrichOptions {
    /// Only compute `type_uid`.
    pub fn type_uid_only() -> Self {
        Self::default()
    }

    pub fn all() -> Self {
        Self {
            add_enum_siblings: true,
            add_observables: true,
        }
    }

    pub fn with_enum_siblings(mut self, add_enum_siblings: bool) -> Self {
        self.add_enum_siblings = add_enum_siblings;
        self
    }

    pub fn with_observables(mut self, add_observables: bool) -> Self {
        self.add_observables = add_observables;
        self
    }

    /// Whether any enrichment beyond `type_uid` is requested.
    pub fn traverses_event(&self) -> bool {
        self.add_enum_siblings || self.add_observables
    }
}
