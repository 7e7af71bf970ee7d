//! Paginated data table element.
//!
//! Renders the current page of a [`PagedResult`] as an aligned table with a
//! commands footer, and drives selection, page navigation and custom record
//! actions from the keyboard. Layout is recomputed when the page changes,
//! never on pure selection movement.

use std::io::{self, Write};
use std::rc::Rc;

use crossterm::event::{KeyCode, KeyEvent};

use crate::client::{PagedResult, Record};

use super::ansi::Colour;
use super::element::{Element, Interactive, Render};
use super::error::UiError;
use super::layout::{self, COLUMN_DIVIDER, ROW_DIVIDER};
use super::signal::UpdateSignal;

const COMMANDS_HEADER: &str = "\r\n\r\nCommands\r\n\r\n";
const NEXT_PAGE_LABEL: &str = "Next page";
const PREVIOUS_PAGE_LABEL: &str = "Previous page";
const RIGHT_ARROW: &str = "\u{1f852}";
const LEFT_ARROW: &str = "\u{1f850}";
const DEFAULT_TERMINAL_WIDTH: usize = 80;

/// A display column: header label plus a projection from record to cell
/// text. Stateless and reusable across renders.
pub struct ColumnSpec<R> {
    label: String,
    cell: Box<dyn Fn(&R) -> String>,
}

impl<R> ColumnSpec<R> {
    pub fn new(label: impl Into<String>, cell: impl Fn(&R) -> String + 'static) -> Self {
        Self {
            label: label.into(),
            cell: Box::new(cell),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn cell(&self, record: &R) -> String {
        (self.cell)(record)
    }
}

/// A custom keyboard action on the selected record: pressing `key` ends the
/// input loop emitting `action` and the record's id.
#[derive(Debug, Clone)]
pub struct ListAction {
    pub key: char,
    pub label: String,
    pub action: String,
}

impl ListAction {
    pub fn new(key: char, label: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            key,
            label: label.into(),
            action: action.into(),
        }
    }
}

/// Configuration for [`ListTable::new`].
pub struct ListTableOptions<R: Record> {
    pub columns: Vec<ColumnSpec<R>>,
    pub page: Rc<PagedResult<R>>,
    pub actions: Vec<ListAction>,
}

/// The interactive table element.
pub struct ListTable<R: Record> {
    columns: Vec<ColumnSpec<R>>,
    page: Rc<PagedResult<R>>,
    selected: usize,
    actions: Vec<ListAction>,
    column_widths: Vec<usize>,
    header_cells: Vec<String>,
    row_cells: Vec<Vec<String>>,
    terminal_width: Box<dyn Fn() -> usize>,
}

impl<R: Record + 'static> ListTable<R> {
    pub fn new(options: ListTableOptions<R>) -> Result<Element, UiError> {
        Ok(Element::Interactive(Box::new(Self::build(
            options,
            Box::new(query_terminal_width),
        )?)))
    }

    fn build(
        options: ListTableOptions<R>,
        terminal_width: Box<dyn Fn() -> usize>,
    ) -> Result<Self, UiError> {
        if options.columns.is_empty() {
            return Err(UiError::NoColumns);
        }
        let mut table = ListTable {
            columns: options.columns,
            page: options.page,
            selected: 0,
            actions: options.actions,
            column_widths: Vec::new(),
            header_cells: Vec::new(),
            row_cells: Vec::new(),
            terminal_width,
        };
        table.reset_page_state()?;
        Ok(table)
    }

    /// Recompute everything derived from the current page: selection back to
    /// the top, fresh column widths, reformatted cells.
    fn reset_page_state(&mut self) -> Result<(), UiError> {
        self.selected = 0;
        self.ensure_rows()?;
        self.recompute_layout();
        Ok(())
    }

    fn ensure_rows(&self) -> Result<(), UiError> {
        if self.page.records().is_empty() {
            return Err(UiError::NoData);
        }
        Ok(())
    }

    fn recompute_layout(&mut self) {
        let headers: Vec<String> = self.columns.iter().map(|c| c.label().to_string()).collect();
        let raw_rows: Vec<Vec<String>> = self
            .page
            .records()
            .iter()
            .map(|r| self.columns.iter().map(|c| c.cell(r)).collect())
            .collect();

        let (natural, natural_total) = layout::natural_widths(&headers, &raw_rows);
        self.column_widths =
            layout::column_widths(&natural, natural_total, (self.terminal_width)());

        self.header_cells = headers
            .iter()
            .zip(&self.column_widths)
            .map(|(h, w)| layout::format_cell(h, *w))
            .collect();
        self.row_cells = raw_rows
            .iter()
            .map(|row| {
                row.iter()
                    .zip(&self.column_widths)
                    .map(|(cell, w)| layout::format_cell(cell, *w))
                    .collect()
            })
            .collect();
    }

    fn move_up(&mut self) -> Result<UpdateSignal, UiError> {
        self.ensure_rows()?;
        if self.selected > 0 {
            self.selected -= 1;
        }
        Ok(UpdateSignal::proceed())
    }

    fn move_down(&mut self) -> Result<UpdateSignal, UiError> {
        self.ensure_rows()?;
        if self.selected < self.page.records().len() - 1 {
            self.selected += 1;
        }
        Ok(UpdateSignal::proceed())
    }

    /// Advance to the next page: one fetch, selection reset, fresh layout.
    fn page_forward(&mut self) -> Result<UpdateSignal, UiError> {
        if !self.page.has_next() {
            return Ok(UpdateSignal::proceed());
        }
        self.page = PagedResult::next(&self.page)?;
        self.reset_page_state()?;
        Ok(UpdateSignal::proceed().with_full_refresh())
    }

    /// Step back through the already-fetched chain. No I/O.
    fn page_back(&mut self) -> Result<UpdateSignal, UiError> {
        let Some(previous) = self.page.previous() else {
            return Ok(UpdateSignal::proceed());
        };
        self.page = previous;
        self.reset_page_state()?;
        Ok(UpdateSignal::proceed().with_full_refresh())
    }

    fn custom_action(&mut self, c: char) -> Result<UpdateSignal, UiError> {
        self.ensure_rows()?;
        let records = self.page.records();
        if self.selected >= records.len() {
            self.selected = records.len() - 1;
        }
        for action in &self.actions {
            if action.key == c {
                let target = &records[self.selected];
                return Ok(UpdateSignal::emit(action.action.clone()).with_target(target.id()));
            }
        }
        Ok(UpdateSignal::proceed())
    }

    fn render_header(&self, out: &mut dyn Write) -> io::Result<()> {
        write!(out, "{}\r\n", self.join_row(&self.header_cells, Colour::ORANGE))?;
        let total: usize =
            self.column_widths.iter().sum::<usize>() + (self.column_widths.len() - 1);
        write!(out, "{}\r\n", ROW_DIVIDER.repeat(total))
    }

    fn render_rows(&self, out: &mut dyn Write) -> io::Result<()> {
        for (i, row) in self.row_cells.iter().enumerate() {
            let colour = if i == self.selected {
                Colour::HIGHLIGHT
            } else {
                Colour::RESET
            };
            write!(out, "{}\r\n", self.join_row(row, colour))?;
        }
        Ok(())
    }

    fn render_commands(&self, out: &mut dyn Write) -> io::Result<()> {
        write!(out, "{COMMANDS_HEADER}")?;
        write!(
            out,
            "{}",
            command_line(RIGHT_ARROW, NEXT_PAGE_LABEL, self.page.has_next())
        )?;
        write!(
            out,
            "{}",
            command_line(LEFT_ARROW, PREVIOUS_PAGE_LABEL, self.page.has_previous())
        )?;
        for action in &self.actions {
            write!(
                out,
                "{}",
                command_line(&action.key.to_string(), &action.label, true)
            )?;
        }
        Ok(())
    }

    fn join_row(&self, cells: &[String], colour: Colour) -> String {
        let divider = Colour::RESET.paint(COLUMN_DIVIDER);
        colour.paint(&cells.join(&divider))
    }
}

/// One line of the commands footer; inactive commands are greyed out.
fn command_line(key: &str, label: &str, active: bool) -> String {
    if active {
        format!("{} : {}\r\n", Colour::ORANGE.paint(key), label)
    } else {
        format!(
            "{}{}",
            Colour::GREY.paint(key),
            Colour::GREY.paint(&format!(" : {label}\r\n"))
        )
    }
}

fn query_terminal_width() -> usize {
    crossterm::terminal::size()
        .map(|(cols, _)| cols as usize)
        .unwrap_or(DEFAULT_TERMINAL_WIDTH)
}

impl<R: Record + 'static> Render for ListTable<R> {
    fn render(&self, out: &mut dyn Write) -> io::Result<()> {
        self.render_header(out)?;
        self.render_rows(out)?;
        self.render_commands(out)
    }
}

impl<R: Record + 'static> Interactive for ListTable<R> {
    fn handle_key(&mut self, key: KeyEvent) -> Result<UpdateSignal, UiError> {
        match key.code {
            KeyCode::Up => self.move_up(),
            KeyCode::Down => self.move_down(),
            KeyCode::Right => self.page_forward(),
            KeyCode::Left => self.page_back(),
            KeyCode::Char(c) => self.custom_action(c),
            _ => Ok(UpdateSignal::proceed()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::envelope::PageEnvelope;
    use crate::client::page::FetchPage;
    use crate::client::ClientError;
    use crossterm::event::KeyModifiers;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, Serialize, Deserialize)]
    struct Item {
        id: String,
        label: String,
    }

    impl Record for Item {
        fn id(&self) -> &str {
            &self.id
        }
        fn label(&self) -> String {
            self.label.clone()
        }
    }

    fn envelope(rows: &[(&str, &str)], next: Option<&str>) -> PageEnvelope<Item> {
        PageEnvelope {
            next_link: next.map(|s| s.to_string()),
            records: rows
                .iter()
                .map(|(id, label)| Item {
                    id: id.to_string(),
                    label: label.to_string(),
                })
                .collect(),
        }
    }

    fn columns() -> Vec<ColumnSpec<Item>> {
        vec![ColumnSpec::new("Label", |r: &Item| r.label.clone())]
    }

    fn table_over(
        first: PageEnvelope<Item>,
        fetch: FetchPage<Item>,
        actions: Vec<ListAction>,
    ) -> ListTable<Item> {
        ListTable::build(
            ListTableOptions {
                columns: columns(),
                page: PagedResult::first(first, fetch),
                actions,
            },
            Box::new(|| 80),
        )
        .unwrap()
    }

    fn press(table: &mut ListTable<Item>, code: KeyCode) -> UpdateSignal {
        table
            .handle_key(KeyEvent::new(code, KeyModifiers::NONE))
            .unwrap()
    }

    fn no_fetch() -> FetchPage<Item> {
        Rc::new(|_| panic!("no fetch expected"))
    }

    #[test]
    fn empty_page_is_rejected_at_construction() {
        let err = ListTable::build(
            ListTableOptions {
                columns: columns(),
                page: PagedResult::first(envelope(&[], None), no_fetch()),
                actions: vec![],
            },
            Box::new(|| 80),
        )
        .err()
        .unwrap();
        assert!(matches!(err, UiError::NoData));
    }

    #[test]
    fn selection_clamps_at_both_ends() {
        let mut table = table_over(
            envelope(&[("1", "A"), ("2", "B")], None),
            no_fetch(),
            vec![],
        );
        assert_eq!(table.selected, 0);
        press(&mut table, KeyCode::Up);
        assert_eq!(table.selected, 0);
        press(&mut table, KeyCode::Down);
        assert_eq!(table.selected, 1);
        press(&mut table, KeyCode::Down);
        assert_eq!(table.selected, 1);
    }

    #[test]
    fn right_arrow_fetches_next_page_and_resets_selection() {
        let fetch: FetchPage<Item> = Rc::new(|link| {
            assert_eq!(link, "p2");
            Ok(PageEnvelope {
                next_link: None,
                records: vec![
                    Item {
                        id: "3".into(),
                        label: "C".into(),
                    },
                    Item {
                        id: "4".into(),
                        label: "D".into(),
                    },
                ],
            })
        });
        let mut table = table_over(
            envelope(&[("1", "A"), ("2", "B")], Some("p2")),
            fetch,
            vec![],
        );
        press(&mut table, KeyCode::Down);
        assert_eq!(table.selected, 1);

        let signal = press(&mut table, KeyCode::Right);
        assert!(signal.continue_loop);
        assert!(signal.needs_full_refresh);
        assert_eq!(table.selected, 0);
        assert_eq!(table.page.records()[0].id, "3");
    }

    #[test]
    fn failed_page_fetch_surfaces_client_error_and_keeps_page() {
        let fetch: FetchPage<Item> =
            Rc::new(|_| Err(ClientError::Transport("connection reset".into())));
        let mut table = table_over(envelope(&[("1", "A")], Some("p2")), fetch, vec![]);
        let err = table
            .handle_key(KeyEvent::new(KeyCode::Right, KeyModifiers::NONE))
            .err()
            .unwrap();
        assert!(matches!(err, UiError::Client(ClientError::Transport(_))));
        assert_eq!(table.page.records()[0].id, "1");
    }

    #[test]
    fn right_arrow_on_last_page_is_a_noop() {
        let mut table = table_over(envelope(&[("1", "A")], None), no_fetch(), vec![]);
        let signal = press(&mut table, KeyCode::Right);
        assert!(signal.continue_loop);
        assert!(!signal.needs_full_refresh);
    }

    #[test]
    fn left_arrow_walks_back_without_fetching() {
        let fetch: FetchPage<Item> = Rc::new(|_| Ok(PageEnvelope {
            next_link: None,
            records: vec![Item {
                id: "2".into(),
                label: "B".into(),
            }],
        }));
        let mut table = table_over(envelope(&[("1", "A")], Some("p2")), fetch, vec![]);
        press(&mut table, KeyCode::Right);
        assert_eq!(table.page.records()[0].id, "2");

        // fetch would panic if Left triggered I/O a second time; the
        // closure above is only reachable through has_next() which is now
        // false anyway.
        let signal = press(&mut table, KeyCode::Left);
        assert!(signal.needs_full_refresh);
        assert_eq!(table.page.records()[0].id, "1");

        let signal = press(&mut table, KeyCode::Left);
        assert!(!signal.needs_full_refresh);
    }

    #[test]
    fn action_key_emits_action_and_selected_record_id() {
        let mut table = table_over(
            envelope(&[("1", "A"), ("2", "B")], None),
            no_fetch(),
            vec![
                ListAction::new('u', "Update", "update"),
                ListAction::new('d', "Delete", "delete"),
            ],
        );
        press(&mut table, KeyCode::Down);
        let signal = press(&mut table, KeyCode::Char('d'));
        assert!(!signal.continue_loop);
        assert_eq!(signal.value, "delete");
        assert_eq!(signal.target_id, "2");
    }

    #[test]
    fn unmapped_key_is_a_noop() {
        let mut table = table_over(
            envelope(&[("1", "A")], None),
            no_fetch(),
            vec![ListAction::new('u', "Update", "update")],
        );
        let signal = press(&mut table, KeyCode::Char('z'));
        assert!(signal.continue_loop);
        assert!(signal.value.is_empty());
    }

    #[test]
    fn render_marks_selected_row_and_lists_commands() {
        let table = table_over(
            envelope(&[("1", "Alpha"), ("2", "Beta")], None),
            no_fetch(),
            vec![ListAction::new('b', "Back to main menu", "back")],
        );
        let mut buf = Vec::new();
        table.render(&mut buf).unwrap();
        let rendered = String::from_utf8(buf).unwrap();

        assert!(rendered.contains("Label"));
        assert!(rendered.contains("Alpha"));
        assert!(rendered.contains(Colour::HIGHLIGHT.code()));
        assert!(rendered.contains("Back to main menu"));
        // no next/previous page available: both greyed
        assert!(rendered.contains(Colour::GREY.code()));
    }
}
