//! Employee Model

use std::collections::HashSet;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

const INPUT_FIELDS: [&str; 4] = ["name", "email", "phone", "location"];

/// Employee entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Employee {
    /// Server-generated, immutable after creation
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
}

/// Create / update payload
///
/// Every field is optional on the wire. Missing fields and `null` decode to
/// an empty string, so an update always rewrites all four columns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeInput {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub phone: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub location: String,
}

impl EmployeeInput {
    /// Decode a request body leniently.
    ///
    /// - only the first JSON value is read; anything after it is ignored
    /// - a bare `null` body is an all-empty input
    /// - keys match case-insensitively, an exact-case key wins over others
    pub fn from_json(body: &[u8]) -> Result<Self, serde_json::Error> {
        let mut de = serde_json::Deserializer::from_slice(body);
        let Some(object) = Option::<Map<String, Value>>::deserialize(&mut de)? else {
            return Ok(Self::default());
        };

        let mut fields = Map::new();
        let mut exact = HashSet::new();
        for (key, value) in object {
            let folded = key.to_lowercase();
            let Some(field) = INPUT_FIELDS.iter().find(|f| **f == folded) else {
                continue;
            };
            if key == *field {
                exact.insert(*field);
                fields.insert(key, value);
            } else if !exact.contains(field) {
                fields.insert((*field).to_string(), value);
            }
        }
        serde_json::from_value(Value::Object(fields))
    }

    /// Build the stored record for a freshly assigned id
    pub fn into_employee(self, id: i64) -> Employee {
        Employee {
            id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            location: self.location,
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
