use crate::dictionary;

/// The observable `type_id` values defined by the schema's `observable`
/// object.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ObservableTypeId {
    Unknown,
    Hostname,
    IpAddress,
    MacAddress,
    UserName,
    EmailAddress,
    UrlString,
    FileName,
    Hash,
    ProcessName,
    ResourceUid,
    Endpoint,
    User,
    Email,
    Url,
    File,
    Process,
    GeoLocation,
    Container,
    RegistryKey,
    RegistryValue,
    Fingerprint,
    Other,
}
impl ObservableTypeId {
    pub fn id(self) -> i64 {
        match self {
            Self::Unknown => 0,
            Self::Hostname => 1,
            Self::IpAddress => 2,
            Self::MacAddress => 3,
            Self::UserName => 4,
            Self::EmailAddress => 5,
            Self::UrlString => 6,
            Self::FileName => 7,
            Self::Hash => 8,
            Self::ProcessName => 9,
            Self::ResourceUid => 10,
            Self::Endpoint => 20,
            Self::User => 21,
            Self::Email => 22,
            Self::Url => 23,
            Self::File => 24,
            Self::Process => 25,
            Self::GeoLocation => 26,
            Self::Container => 27,
            Self::RegistryKey => 28,
            Self::RegistryValue => 29,
            Self::Fingerprint => 30,
            Self::Other => dictionary::OTHER_ID,
        }
    }

    /// The caption the schema uses for this type.
    pub fn caption(self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::Hostname => "Hostname",
            Self::IpAddress => "IP Address",
            Self::MacAddress => "MAC Address",
            Self::UserName => "User Name",
            Self::EmailAddress => "Email Address",
            Self::UrlString => "URL String",
            Self::FileName => "File Name",
            Self::Hash => "Hash",
            Self::ProcessName => "Process Name",
            Self::ResourceUid => "Resource UID",
            Self::Endpoint => "Endpoint",
            Self::User => "User",
            Self::Email => "Email",
            Self::Url => "URL",
            Self::File => "File",
            Self::Process => "Process",
            Self::GeoLocation => "Geo Location",
            Self::Container => "Container",
            Self::RegistryKey => "Registry Key",
            Self::RegistryValue => "Registry Value",
            Self::Fingerprint => "Fingerprint",
            Self::Other => dictionary::OTHER,
        }
    }
}

impl From<ObservableTypeId> for i64 {
    fn from(type_id: ObservableTypeId) -> Self {
        type_id.id()
    }
}

impl TryFrom<i64> for ObservableTypeId {
    type Error = i64;

    fn try_from(id: i64) -> Result<Self, Self::Error> {
        Ok(match id {
            0 => Self::Unknown,
            1 => Self::Hostname,
            2 => Self::IpAddress,
            3 => Self::MacAddress,
            4 => Self::UserName,
            5 => Self::EmailAddress,
            6 => Self::UrlString,
            7 => Self::FileName,
            8 => Self::Hash,
            9 => Self::ProcessName,
            10 => Self::ResourceUid,
            20 => Self::Endpoint,
            21 => Self::User,
            22 => Self::Email,
            23 => Self::Url,
            24 => Self::File,
            25 => Self::Process,
            26 => Self::GeoLocation,
            27 => Self::Container,
            28 => Self::RegistryKey,
            29 => Self::RegistryValue,
            30 => Self::Fingerprint,
            dictionary::OTHER_ID => Self::Other,
            unknown => return Err(unknown),
        })
    }
}

impl std::fmt::Display for ObservableTypeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.caption())
    }
}
