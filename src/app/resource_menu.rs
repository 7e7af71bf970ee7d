//! Generic CRUD menu for one resource type.
//!
//! Drives the listing screen and its actions (search, create, update,
//! delete, back) against a [`ResourceClient`]. All remote failures are shown
//! on an error screen; after acknowledgement the menu ends and control
//! returns to the main menu.

use anyhow::{Context, Result};
use tracing::warn;

use crate::client::{Record, ResourceClient};
use crate::ui::{ColumnSpec, ListAction, Navigator};

use super::screens;

const ACTION_SEARCH: &str = "search";
const ACTION_CREATE: &str = "create";
const ACTION_UPDATE: &str = "update";
const ACTION_DELETE: &str = "delete";
const ACTION_BACK: &str = "back";

/// One text prompt per editable field: how to ask, whether a value is
/// mandatory, and how to move the value in and out of the record.
pub struct FieldPrompt<R> {
    pub name: &'static str,
    pub prompt: &'static str,
    pub required: bool,
    pub get: fn(&R) -> String,
    pub set: fn(&mut R, String),
}

/// Menu state for one resource type.
pub struct ResourceMenu<'a, N: Navigator, R: Record + Default + 'static> {
    controller: &'a mut N,
    client: &'a ResourceClient<R>,
    columns: fn() -> Vec<ColumnSpec<R>>,
    prompts: &'static [FieldPrompt<R>],
    label: &'static str,
    search_term: String,
}

impl<'a, N: Navigator, R: Record + Default + 'static> ResourceMenu<'a, N, R> {
    pub fn new(
        controller: &'a mut N,
        client: &'a ResourceClient<R>,
        columns: fn() -> Vec<ColumnSpec<R>>,
        prompts: &'static [FieldPrompt<R>],
        label: &'static str,
    ) -> Self {
        Self {
            controller,
            client,
            columns,
            prompts,
            label,
            search_term: String::new(),
        }
    }

    /// List/act loop until the user goes back or an error was acknowledged.
    pub fn run(&mut self) -> Result<()> {
        loop {
            let page = match self.client.list(&self.search_term) {
                Ok(page) => page,
                Err(e) => return self.show_error(&e.to_string()),
            };

            if page.records().is_empty() {
                self.show_info("No rows found")?;
                if self.search_term.is_empty() {
                    return Ok(());
                }
                // A search can legitimately match nothing; clear it and
                // show the unfiltered listing instead.
                self.search_term.clear();
                continue;
            }

            let screen = screens::list_screen(
                self.label,
                (self.columns)(),
                page,
                standard_actions(),
            )?;
            // A failure inside the input loop (a page advance hitting the
            // network, terminal I/O) lands on the error screen like every
            // other failure; only showing the error screen itself can abort.
            let signal = match self.controller.navigate_to(screen) {
                Ok(signal) => signal,
                Err(e) => return self.show_error(&e.to_string()),
            };

            let outcome = match signal.value.as_str() {
                ACTION_BACK => return Ok(()),
                ACTION_SEARCH => self.set_search_term(),
                ACTION_CREATE => self.create_record(),
                ACTION_UPDATE => self.update_record(&signal.target_id),
                ACTION_DELETE => self.delete_record(&signal.target_id),
                other => {
                    warn!(action = other, "unmapped list action");
                    Ok(())
                }
            };

            if let Err(e) = outcome {
                return self.show_error(&e.to_string());
            }
        }
    }

    fn set_search_term(&mut self) -> Result<()> {
        let screen = screens::text_input_screen(
            &format!("Set search term: {}s", self.label),
            "Enter a search term (or leave blank to unset)",
            "SearchTerm",
            &self.search_term,
            false,
        )?;
        let signal = self.controller.navigate_to(screen)?;
        self.search_term = signal.value;
        Ok(())
    }

    fn create_record(&mut self) -> Result<()> {
        let record = self.collect_details("New record", &R::default())?;
        let created = self.client.create(&record)?;
        self.show_success(&format!("{}: {}", self.label, created.label()))
    }

    fn update_record(&mut self, id: &str) -> Result<()> {
        let current = self.client.get(id)?;
        let updated = self.collect_details("Update record", &current)?;
        self.client.update(id, &updated)?;
        self.show_success(&format!("{} updated", self.label))
    }

    fn delete_record(&mut self, id: &str) -> Result<()> {
        let record = self.client.get(id)?;
        let screen = screens::confirmation_screen(&format!(
            "Are you sure you want to delete {}",
            record.label()
        ))?;
        let signal = self.controller.navigate_to(screen)?;
        if signal.value != screens::CONFIRM_YES {
            return Ok(());
        }
        self.client.delete(id)?;
        self.show_success(&format!("{} deleted", self.label))
    }

    /// Walk the field prompts, pre-filled with the record's current values,
    /// and build the record to submit.
    fn collect_details(&mut self, title: &str, defaults: &R) -> Result<R> {
        let mut record = defaults.clone();
        for prompt in self.prompts {
            let screen = screens::text_input_screen(
                title,
                prompt.prompt,
                prompt.name,
                &(prompt.get)(defaults),
                prompt.required,
            )?;
            let signal = self
                .controller
                .navigate_to(screen)
                .with_context(|| format!("getting field {}", prompt.name))?;
            (prompt.set)(&mut record, signal.value);
        }
        Ok(record)
    }

    fn show_error(&mut self, message: &str) -> Result<()> {
        let screen = screens::error_screen(message)?;
        self.controller.navigate_to(screen)?;
        Ok(())
    }

    fn show_info(&mut self, message: &str) -> Result<()> {
        let screen = screens::info_screen(message)?;
        self.controller.navigate_to(screen)?;
        Ok(())
    }

    fn show_success(&mut self, message: &str) -> Result<()> {
        let screen = screens::success_screen(message)?;
        self.controller.navigate_to(screen)?;
        Ok(())
    }
}

/// The actions every listing screen offers.
fn standard_actions() -> Vec<ListAction> {
    vec![
        ListAction::new('s', "Set/Clear search term", ACTION_SEARCH),
        ListAction::new('c', "Create", ACTION_CREATE),
        ListAction::new('u', "Update", ACTION_UPDATE),
        ListAction::new('d', "Delete", ACTION_DELETE),
        ListAction::new('b', "Back to main menu", ACTION_BACK),
    ]
}
