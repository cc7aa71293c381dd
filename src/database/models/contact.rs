use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

/// One address-book entry, owned by exactly one user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: Uuid,
    pub owner: Uuid,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Contact fields as they arrive in an add or update request body.
///
/// Every field is optional here; `name` is enforced by the service on add.
/// `null` counts as absent. Values of any other non-string type are dropped
/// and their keys recorded in `non_string`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "ContactFieldsBody")]
pub struct ContactFields {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub postal_code: Option<String>,
    pub non_string: Vec<&'static str>,
}

/// Wire shape of the body. Legacy clients send `addrress` and `pincode`;
/// the canonical key wins when both are present.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ContactFieldsBody {
    name: Option<Value>,
    email: Option<Value>,
    phone: Option<Value>,
    address: Option<Value>,
    addrress: Option<Value>,
    city: Option<Value>,
    state: Option<Value>,
    country: Option<Value>,
    postal_code: Option<Value>,
    pincode: Option<Value>,
}

impl From<ContactFieldsBody> for ContactFields {
    fn from(body: ContactFieldsBody) -> Self {
        let mut non_string = Vec::new();
        let mut text = |value: Option<Value>, key: &'static str| match value {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) => Some(s),
            Some(_) => {
                non_string.push(key);
                None
            }
        };

        let name = text(body.name, "name");
        let email = text(body.email, "email");
        let phone = text(body.phone, "phone");
        let address = text(body.address, "address");
        let legacy_address = text(body.addrress, "addrress");
        let city = text(body.city, "city");
        let state = text(body.state, "state");
        let country = text(body.country, "country");
        let postal_code = text(body.postal_code, "postalCode");
        let legacy_postal_code = text(body.pincode, "pincode");

        Self {
            name,
            email,
            phone,
            address: address.or(legacy_address),
            city,
            state,
            country,
            postal_code: postal_code.or(legacy_postal_code),
            non_string,
        }
    }
}

/// A request field carried a JSON value that is not a string
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{field} must be a string")]
pub struct FieldTypeError {
    pub field: &'static str,
}

impl ContactFields {
    pub fn ensure_strings(&self) -> Result<(), FieldTypeError> {
        match self.non_string.first() {
            Some(&field) => Err(FieldTypeError { field }),
            None => Ok(()),
        }
    }
}

/// A validated contact ready to be persisted. The store assigns `id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContact {
    pub owner: Uuid,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub postal_code: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Partial update: one slot per mutable attribute, `None` leaves it untouched
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub postal_code: Option<String>,
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl TryFrom<ContactFields> for ContactPatch {
    type Error = FieldTypeError;

    /// Keeps only the fields that carry a value; empty strings count as absent.
    fn try_from(fields: ContactFields) -> Result<Self, Self::Error> {
        fields.ensure_strings()?;

        Ok(Self {
            name: present(fields.name),
            email: present(fields.email),
            phone: present(fields.phone),
            address: present(fields.address),
            city: present(fields.city),
            state: present(fields.state),
            country: present(fields.country),
            postal_code: present(fields.postal_code),
        })
    }
}

impl ContactPatch {
    /// Names of the attributes this patch will set, for logging
    pub fn field_names(&self) -> Vec<&'static str> {
        [
            ("name", self.name.is_some()),
            ("email", self.email.is_some()),
            ("phone", self.phone.is_some()),
            ("address", self.address.is_some()),
            ("city", self.city.is_some()),
            ("state", self.state.is_some()),
            ("country", self.country.is_some()),
            ("postalCode", self.postal_code.is_some()),
        ]
        .into_iter()
        .filter_map(|(name, set)| set.then_some(name))
        .collect()
    }

    /// Apply to a record in place, each slot to its own attribute
    pub fn apply_to(&self, contact: &mut Contact) {
        if let Some(v) = &self.name {
            contact.name = v.clone();
        }
        if let Some(v) = &self.email {
            contact.email = Some(v.clone());
        }
        if let Some(v) = &self.phone {
            contact.phone = Some(v.clone());
        }
        if let Some(v) = &self.address {
            contact.address = Some(v.clone());
        }
        if let Some(v) = &self.city {
            contact.city = Some(v.clone());
        }
        if let Some(v) = &self.state {
            contact.state = Some(v.clone());
        }
        if let Some(v) = &self.country {
            contact.country = Some(v.clone());
        }
        if let Some(v) = &self.postal_code {
            contact.postal_code = Some(v.clone());
        }
    }
}

impl NewContact {
    pub fn into_contact(self, id: Uuid) -> Contact {
        Contact {
            id,
            owner: self.owner,
            name: self.name,
            email: self.email,
            phone: self.phone,
            address: self.address,
            city: self.city,
            state: self.state,
            country: self.country,
            postal_code: self.postal_code,
            created_at: self.created_at,
        }
    }
}
