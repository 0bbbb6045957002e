use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactRequest {
    #[serde(deserialize_with = "super::null_as_empty")]
    pub name: String,
    #[serde(deserialize_with = "super::null_as_empty")]
    pub phone: String,
    #[serde(deserialize_with = "super::null_as_empty")]
    pub description: String,
}

impl ContactRequest {
    pub fn message(&self) -> String {
        format!(
            "Новая заявка!\nИмя: {}\nТелефон: {}\nОписание: {}",
            self.name, self.phone, self.description
        )
    }
}
