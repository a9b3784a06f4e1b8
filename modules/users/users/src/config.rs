use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UsersConfig {
    #[serde(default = "default_max_field_length")]
    pub max_field_length: usize,
}

impl Default for UsersConfig {
    fn default() -> Self {
        Self {
            max_field_length: default_max_field_length(),
        }
    }
}

fn default_max_field_length() -> usize {
    255
}
