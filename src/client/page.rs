//! Backward/forward navigable pages of records.
//!
//! Pages are immutable once fetched. Advancing performs exactly one fetch
//! and allocates a new page whose `previous` link points back at the caller,
//! forming a singly linked history chain; walking backwards never touches
//! the network. The chain is unbounded, which is acceptable for a single
//! interactive session.

use std::rc::Rc;

use super::envelope::PageEnvelope;
use super::error::ClientError;
use super::record::Record;

/// Fetches the page behind a continuation link.
pub type FetchPage<R> = Rc<dyn Fn(&str) -> Result<PageEnvelope<R>, ClientError>>;

/// One fetched page of records plus its navigation state.
pub struct PagedResult<R: Record> {
    records: Vec<R>,
    next_link: String,
    previous: Option<Rc<PagedResult<R>>>,
    fetch: FetchPage<R>,
}

impl<R: Record> PagedResult<R> {
    /// Wrap the first page of a listing. The next link is normalised so an
    /// absent link and an empty one behave identically.
    pub fn first(envelope: PageEnvelope<R>, fetch: FetchPage<R>) -> Rc<Self> {
        Rc::new(Self {
            records: envelope.records,
            next_link: envelope.next_link.unwrap_or_default(),
            previous: None,
            fetch,
        })
    }

    /// The records on this page, in server order.
    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn has_next(&self) -> bool {
        !self.next_link.is_empty()
    }

    pub fn has_previous(&self) -> bool {
        self.previous.is_some()
    }

    /// Fetch the page after `page`. Exactly one network round trip; the
    /// returned page's `previous` is `page` itself, which stays valid and
    /// reachable. An associated function, like [`Rc::clone`], because it
    /// needs the `Rc` and not just the page data.
    pub fn next(page: &Rc<Self>) -> Result<Rc<Self>, ClientError> {
        let envelope = (page.fetch)(&page.next_link)?;
        Ok(Rc::new(Self {
            records: envelope.records,
            next_link: envelope.next_link.unwrap_or_default(),
            previous: Some(Rc::clone(page)),
            fetch: Rc::clone(&page.fetch),
        }))
    }

    /// The previously fetched page. Pure pointer walk, never I/O.
    pub fn previous(&self) -> Option<Rc<Self>> {
        self.previous.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use std::cell::Cell;

    #[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
    struct Item {
        id: String,
    }

    impl Record for Item {
        fn id(&self) -> &str {
            &self.id
        }
        fn label(&self) -> String {
            self.id.clone()
        }
    }

    fn page_of(ids: &[&str], next: Option<&str>) -> PageEnvelope<Item> {
        PageEnvelope {
            next_link: next.map(|s| s.to_string()),
            records: ids.iter().map(|id| Item { id: id.to_string() }).collect(),
        }
    }

    #[test]
    fn has_next_mirrors_the_link() {
        let fetch: FetchPage<Item> = Rc::new(|_| panic!("no fetch expected"));
        let last = PagedResult::first(page_of(&["1"], None), Rc::clone(&fetch));
        assert!(!last.has_next());

        let more = PagedResult::first(page_of(&["1"], Some("link")), fetch);
        assert!(more.has_next());
        assert!(!more.has_previous());
    }

    #[test]
    fn empty_string_link_means_no_next() {
        let fetch: FetchPage<Item> = Rc::new(|_| panic!("no fetch expected"));
        let page = PagedResult::first(page_of(&["1"], Some("")), fetch);
        assert!(!page.has_next());
    }

    #[test]
    fn next_then_previous_returns_the_identical_page() {
        let fetch: FetchPage<Item> = Rc::new(|link| {
            assert_eq!(link, "page2");
            Ok(page_of(&["3", "4"], None))
        });
        let first = PagedResult::first(page_of(&["1", "2"], Some("page2")), fetch);
        let second = PagedResult::next(&first).unwrap();

        assert_eq!(second.records().len(), 2);
        assert!(second.has_previous());
        assert!(!second.has_next());

        let back = second.previous().unwrap();
        assert!(Rc::ptr_eq(&back, &first));
        assert_eq!(back.records()[0].id, "1");
    }

    #[test]
    fn each_advance_fetches_exactly_once() {
        let calls = Rc::new(Cell::new(0usize));
        let counter = Rc::clone(&calls);
        let fetch: FetchPage<Item> = Rc::new(move |_| {
            counter.set(counter.get() + 1);
            Ok(page_of(&["x"], None))
        });
        let first = PagedResult::first(page_of(&["1"], Some("p2")), fetch);
        let second = PagedResult::next(&first).unwrap();
        let _ = second.previous();
        let _ = second.previous();
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn fetch_failure_leaves_current_page_usable() {
        let fetch: FetchPage<Item> =
            Rc::new(|_| Err(ClientError::Transport("connection reset".into())));
        let first = PagedResult::first(page_of(&["1"], Some("p2")), fetch);
        let err = PagedResult::next(&first).err().unwrap();
        assert!(matches!(err, ClientError::Transport(_)));
        assert_eq!(first.records().len(), 1);
        assert!(first.has_next());
    }
}
