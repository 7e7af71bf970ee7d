//! Application wiring: main menu, resource menus, configuration.

pub mod records;
mod resource_menu;
pub mod screens;

use std::rc::Rc;

use anyhow::{Context, Result};
use tracing::info;
use url::Url;

use crate::client::{HttpTransport, ResourceClient, ResourceClientOptions, Transport};
use crate::config::Config;
use crate::ui::{Controller, Navigator};

use records::{Account, Contact};
use resource_menu::{FieldPrompt, ResourceMenu};

const MENU_ACCOUNTS: &str = "Accounts";
const MENU_CONTACTS: &str = "Contacts";
const MENU_EXIT: &str = "Exit";

/// Field prompt tables: per editable field, the display name, the prompt
/// text, whether it is required, and the accessors.
static ACCOUNT_PROMPTS: [FieldPrompt<Account>; 2] = [
    FieldPrompt {
        name: "Name",
        prompt: "Enter account name",
        required: true,
        get: |a| a.name.clone(),
        set: |a, v| a.name = v,
    },
    FieldPrompt {
        name: "City",
        prompt: "Enter account city",
        required: true,
        get: |a| a.city.clone().unwrap_or_default(),
        set: |a, v| a.city = records::optional(v),
    },
];

static CONTACT_PROMPTS: [FieldPrompt<Contact>; 3] = [
    FieldPrompt {
        name: "First name",
        prompt: "Enter contact's first name",
        required: true,
        get: |c| c.first_name.clone(),
        set: |c, v| c.first_name = v,
    },
    FieldPrompt {
        name: "Last name",
        prompt: "Enter contact's last name",
        required: false,
        get: |c| c.last_name.clone().unwrap_or_default(),
        set: |c, v| c.last_name = records::optional(v),
    },
    FieldPrompt {
        name: "Email",
        prompt: "Enter contact's email address",
        required: false,
        get: |c| c.email.clone().unwrap_or_default(),
        set: |c, v| c.email = records::optional(v),
    },
];

/// The running application: one controller, one client per resource type.
pub struct App {
    controller: Controller,
    accounts: ResourceClient<Account>,
    contacts: ResourceClient<Contact>,
}

impl App {
    pub fn new(config: &Config) -> Result<Self> {
        let base_url =
            Url::parse(&config.base_url).with_context(|| format!("invalid base URL {}", config.base_url))?;
        let transport: Rc<dyn Transport> =
            Rc::new(HttpTransport::new(config.access_token.clone()).context("building HTTP client")?);

        let accounts = ResourceClient::new(ResourceClientOptions {
            transport: Rc::clone(&transport),
            base_url: base_url.clone(),
            resource_path: records::ACCOUNTS_RESOURCE.into(),
            select_fields: Account::select_fields(),
            search_fields: Account::search_fields(),
            page_limit: config.page_limit,
        })
        .context("building accounts client")?;

        let contacts = ResourceClient::new(ResourceClientOptions {
            transport,
            base_url,
            resource_path: records::CONTACTS_RESOURCE.into(),
            select_fields: Contact::select_fields(),
            search_fields: Contact::search_fields(),
            page_limit: config.page_limit,
        })
        .context("building contacts client")?;

        Ok(Self {
            controller: Controller::new()?,
            accounts,
            contacts,
        })
    }

    /// Main menu loop: pick a table, browse it, come back, until Exit.
    pub fn run(&mut self) -> Result<()> {
        info!("session started");
        loop {
            let screen = screens::menu_screen(
                "Table Selection",
                "Choose a table",
                vec![
                    MENU_ACCOUNTS.to_string(),
                    MENU_CONTACTS.to_string(),
                    MENU_EXIT.to_string(),
                ],
            )?;
            let signal = match self.controller.navigate_to(screen) {
                Ok(signal) => signal,
                Err(e) => {
                    let error = screens::error_screen(&e.to_string())?;
                    self.controller.navigate_to(error)?;
                    return Ok(());
                }
            };

            match signal.value.as_str() {
                MENU_ACCOUNTS => ResourceMenu::new(
                    &mut self.controller,
                    &self.accounts,
                    Account::list_columns,
                    &ACCOUNT_PROMPTS,
                    "Account",
                )
                .run()?,
                MENU_CONTACTS => ResourceMenu::new(
                    &mut self.controller,
                    &self.contacts,
                    Contact::list_columns,
                    &CONTACT_PROMPTS,
                    "Contact",
                )
                .run()?,
                _ => {
                    info!("session ended");
                    return Ok(());
                }
            }
        }
    }
}
