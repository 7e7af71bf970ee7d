//! The built-in resource types: accounts and contacts.
//!
//! Field lists here are configuration, not design: the engine and client
//! work for any [`Record`] type. Logical names follow the Dataverse-style
//! schema the server exposes.

use serde::{Deserialize, Serialize};

use crate::client::Record;
use crate::ui::ColumnSpec;

pub const ACCOUNTS_RESOURCE: &str = "accounts";
pub const ACCOUNT_ID: &str = "accountid";
pub const ACCOUNT_NAME: &str = "name";
pub const ACCOUNT_CITY: &str = "address1_city";

pub const CONTACTS_RESOURCE: &str = "contacts";
pub const CONTACT_ID: &str = "contactid";
pub const CONTACT_FIRST_NAME: &str = "firstname";
pub const CONTACT_LAST_NAME: &str = "lastname";
pub const CONTACT_EMAIL: &str = "emailaddress1";

/// A business account. The id is server-assigned; optional fields are
/// omitted from payloads when empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Account {
    #[serde(
        rename = "accountid",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    pub name: String,
    #[serde(
        rename = "address1_city",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub city: Option<String>,
}

impl Record for Account {
    fn id(&self) -> &str {
        self.id.as_deref().unwrap_or_default()
    }

    fn label(&self) -> String {
        self.name.clone()
    }
}

impl Account {
    pub fn list_columns() -> Vec<ColumnSpec<Account>> {
        vec![
            ColumnSpec::new("Name", |a: &Account| a.name.clone()),
            ColumnSpec::new("City", |a: &Account| a.city.clone().unwrap_or_default()),
        ]
    }

    pub fn select_fields() -> Vec<String> {
        vec![ACCOUNT_ID.into(), ACCOUNT_NAME.into(), ACCOUNT_CITY.into()]
    }

    pub fn search_fields() -> Vec<String> {
        vec![ACCOUNT_NAME.into(), ACCOUNT_CITY.into()]
    }
}

/// A contact person belonging to the organisation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Contact {
    #[serde(
        rename = "contactid",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    #[serde(rename = "firstname")]
    pub first_name: String,
    #[serde(
        rename = "lastname",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub last_name: Option<String>,
    #[serde(
        rename = "emailaddress1",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub email: Option<String>,
}

impl Record for Contact {
    fn id(&self) -> &str {
        self.id.as_deref().unwrap_or_default()
    }

    fn label(&self) -> String {
        match &self.last_name {
            Some(last) if !last.is_empty() => format!("{} {}", self.first_name, last),
            _ => self.first_name.clone(),
        }
    }
}

impl Contact {
    pub fn list_columns() -> Vec<ColumnSpec<Contact>> {
        vec![
            ColumnSpec::new("First name", |c: &Contact| c.first_name.clone()),
            ColumnSpec::new("Last name", |c: &Contact| {
                c.last_name.clone().unwrap_or_default()
            }),
            ColumnSpec::new("Email", |c: &Contact| c.email.clone().unwrap_or_default()),
        ]
    }

    pub fn select_fields() -> Vec<String> {
        vec![
            CONTACT_ID.into(),
            CONTACT_FIRST_NAME.into(),
            CONTACT_LAST_NAME.into(),
            CONTACT_EMAIL.into(),
        ]
    }

    pub fn search_fields() -> Vec<String> {
        vec![
            CONTACT_FIRST_NAME.into(),
            CONTACT_LAST_NAME.into(),
            CONTACT_EMAIL.into(),
        ]
    }
}

/// Sets an empty string to `None` so the field is omitted on the wire.
pub fn optional(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}
