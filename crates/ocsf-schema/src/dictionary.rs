//! Attribute names and well-known values defined by the OCSF schema.

pub const UID: &str = "uid";
pub const NAME: &str = "name";
pub const CAPTION: &str = "caption";
pub const TYPE: &str = "type";
pub const TYPE_ID: &str = "type_id";
pub const VALUE: &str = "value";

pub const CLASS_NAME: &str = "class_name";
pub const CLASS_UID: &str = "class_uid";

pub const ACTIVITY_NAME: &str = "activity_name";
pub const ACTIVITY_ID: &str = "activity_id";

pub const TYPE_NAME: &str = "type_name";
pub const TYPE_UID: &str = "type_uid";

pub const DISPOSITION: &str = "disposition";
pub const DISPOSITION_ID: &str = "disposition_id";

pub const METADATA: &str = "metadata";
pub const OBSERVABLES: &str = "observables";
pub const ASSOCIATIONS: &str = "associations";

pub const RAW_EVENT: &str = "raw_data";
pub const REF_EVENT_TIME: &str = "ref_time";
pub const UNMAPPED: &str = "unmapped";

/// The suffix of enum attributes whose sibling is not named by the schema:
/// `type_id` has the sibling `type`.
pub const ENUM_SUFFIX: &str = "_id";

/// The `*_id` value used when the actual value is not known.
pub const UNKNOWN_ID: i64 = 0;

/// The `*_id` value used when the actual value is not one of the enumerated
/// values defined by the schema.
pub const OTHER_ID: i64 = 99;
pub const OTHER: &str = "Other";

/// The scalar type meaning "any JSON value". Attributes of this type are never
/// traversed during enrichment.
pub const JSON_TYPE: &str = "json_t";
