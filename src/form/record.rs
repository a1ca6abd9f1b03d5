use serde::{Deserialize, Serialize};

/// Every field the registration form collects.
///
/// All fields are always present. Deserializing a partial object fills the
/// missing fields with their defaults, so a record rehydrated from an older
/// or truncated draft is still structurally complete.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormRecord {
    // Step 1: eligibility
    pub can_attend: bool,
    pub is_eligible: bool,

    // Step 2: contact details
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address1: String,
    pub address2: String,
    pub city: String,
    pub post_code: String,

    // Step 3: about you
    pub gender: String,
    pub dob_day: String,
    pub dob_month: String,
    pub dob_year: String,
    pub ethnicity: String,
    pub disability: String,
    pub nhs_satisfaction: String,
    pub education: String,

    // Step 4: consent
    pub data_consent: bool,
    pub future_contact: bool,
}

impl FormRecord {
    /// Serialized names of every field, in form order.
    pub const FIELD_NAMES: [&'static str; 20] = [
        "canAttend",
        "isEligible",
        "firstName",
        "lastName",
        "email",
        "phone",
        "address1",
        "address2",
        "city",
        "postCode",
        "gender",
        "dobDay",
        "dobMonth",
        "dobYear",
        "ethnicity",
        "disability",
        "nhsSatisfaction",
        "education",
        "dataConsent",
        "futureContact",
    ];

    /// Whether every field still holds its default value.
    pub fn is_pristine(&self) -> bool {
        *self == Self::default()
    }
}

/// A fresh record with every flag `false` and every text field empty.
pub fn default_record() -> FormRecord {
    FormRecord::default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn default_record_has_every_field_at_default() {
        let value = serde_json::to_value(default_record()).unwrap();
        let map = value.as_object().unwrap();

        assert_eq!(map.len(), 20);
        for name in FormRecord::FIELD_NAMES {
            let field = map.get(name).unwrap_or_else(|| panic!("missing {name}"));
            match name {
                "canAttend" | "isEligible" | "dataConsent" | "futureContact" => {
                    assert_eq!(field, &Value::Bool(false), "{name}")
                }
                _ => assert_eq!(field, &Value::String(String::new()), "{name}"),
            }
        }
    }

    #[test]
    fn default_record_is_fresh_each_call() {
        let mut first = default_record();
        first.first_name = "Jo".to_string();
        assert!(default_record().is_pristine());
        assert!(!first.is_pristine());
    }

    #[test]
    fn partial_object_backfills_defaults() {
        let record: FormRecord =
            serde_json::from_str(r#"{"firstName":"Jo","dataConsent":true}"#).unwrap();
        assert_eq!(record.first_name, "Jo");
        assert!(record.data_consent);
        assert_eq!(record.last_name, "");
        assert!(!record.can_attend);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let record: FormRecord =
            serde_json::from_str(r#"{"csrfToken":"leak","city":"Leeds"}"#).unwrap();
        assert_eq!(record.city, "Leeds");
    }
}
