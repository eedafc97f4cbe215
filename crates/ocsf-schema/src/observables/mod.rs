//! Query the observables of an event.
//!
//! See the [OCSF observable object](https://schema.ocsf.io/objects/observable).

mod event_observables;
mod observable;
mod observable_type_id;

pub use event_observables::filter;
pub use event_observables::observables;
pub use event_observables::observables_by_name;
pub use event_observables::observables_of_type;
pub use event_observables::observables_of_type_by_name;
pub use observable::Observable;
pub use observable_type_id::ObservableTypeId;
