mod contact;
mod entry;
mod submission;
mod translation;

pub use contact::*;
pub use entry::*;
pub use submission::*;
pub use translation::*;

use serde::{Deserialize, Deserializer};

/// Reads an explicit JSON `null` as an empty string.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
