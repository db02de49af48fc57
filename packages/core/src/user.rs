//! Platform user types.

use serde::{Deserialize, Serialize};

/// Where a user currently works.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PresentCompany {
    pub company_name: String,
    pub role: String,
    pub company_logo_url: String,
}

/// A registered platform user.
///
/// Also used for populated user references, which carry a subset of fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub present_company: Option<PresentCompany>,
}

impl User {
    /// First and last name joined, skipping blanks.
    pub fn full_name(&self) -> String {
        [self.first_name.trim(), self.last_name.trim()]
            .iter()
            .filter(|part| !part.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn company_name(&self) -> &str {
        self.present_company
            .as_ref()
            .map(|c| c.company_name.as_str())
            .unwrap_or_default()
    }

    pub fn company_role(&self) -> &str {
        self.present_company
            .as_ref()
            .map(|c| c.role.as_str())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_either_id_key() -> Result<(), serde_json::Error> {
        let a: User = serde_json::from_value(json!({ "_id": "a1", "firstName": "Asha" }))?;
        let b: User = serde_json::from_value(json!({ "id": "b2", "lastName": "Rao" }))?;
        assert_eq!(a.id, "a1");
        assert_eq!(b.id, "b2");
        assert_eq!(a.full_name(), "Asha");
        assert_eq!(b.full_name(), "Rao");
        assert_eq!(a.company_name(), "");
        Ok(())
    }
}
