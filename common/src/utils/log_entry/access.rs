use thiserror::Error;

#[derive(Error, Debug)]
pub enum AccessEntry {
    #[error("Access granted")]
    Granted,
    #[error("Access denied")]
    Denied,
}

impl From<AccessEntry> for String {
    #[inline(always)]
    fn from(value: AccessEntry) -> Self {
        value.to_string()
    }
}
