//! Generic CRUD and search against a REST collection endpoint.

use std::rc::Rc;

use tracing::debug;
use url::Url;

use super::envelope::{error_message, PageEnvelope};
use super::error::ClientError;
use super::page::{FetchPage, PagedResult};
use super::record::Record;
use super::transport::{ApiRequest, Method, Transport};

const HEADER_CONTENT_TYPE: &str = "Content-Type";
const HEADER_PREFER: &str = "Prefer";
const CONTENT_TYPE_JSON: &str = "application/json";
const PREFER_RETURN_REPRESENTATION: &str = "return=representation";

const QUERY_SELECT: &str = "$select";
const QUERY_FILTER: &str = "$filter";

/// Configuration for a [`ResourceClient`].
pub struct ResourceClientOptions {
    /// Transport used for every request.
    pub transport: Rc<dyn Transport>,
    /// Root URL of the API, e.g. `https://org.example.com/api/data/v9.2`.
    pub base_url: Url,
    /// Collection path segment for this resource type, e.g. `accounts`.
    pub resource_path: String,
    /// Fields projected into every read.
    pub select_fields: Vec<String>,
    /// Fields a search term is matched against.
    pub search_fields: Vec<String>,
    /// Page-size hint sent with list requests.
    pub page_limit: usize,
}

/// Synchronous CRUD + search for one resource type. Produces [`PagedResult`]
/// chains for listings. Never retries; every failure surfaces to the caller.
pub struct ResourceClient<R: Record> {
    transport: Rc<dyn Transport>,
    resource_url: Url,
    select: String,
    search_fields: Vec<String>,
    page_limit: usize,
    _marker: std::marker::PhantomData<R>,
}

impl<R: Record + 'static> ResourceClient<R> {
    pub fn new(options: ResourceClientOptions) -> Result<Self, ClientError> {
        let mut resource_url = options.base_url;
        resource_url
            .path_segments_mut()
            .map_err(|_| ClientError::Transport("base URL cannot be a base".into()))?
            .pop_if_empty()
            .push(&options.resource_path);

        Ok(Self {
            transport: options.transport,
            resource_url,
            select: options.select_fields.join(","),
            search_fields: options.search_fields,
            page_limit: options.page_limit,
            _marker: std::marker::PhantomData,
        })
    }

    /// List the collection, optionally filtered by `search_term`. Returns
    /// the first page; subsequent pages are fetched lazily through the
    /// page's continuation link.
    pub fn list(&self, search_term: &str) -> Result<Rc<PagedResult<R>>, ClientError> {
        let mut url = self.resource_url.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair(QUERY_SELECT, &self.select);
            if !search_term.is_empty() && !self.search_fields.is_empty() {
                pairs.append_pair(QUERY_FILTER, &self.filter_predicate(search_term));
            }
        }

        debug!(url = %url, "listing records");
        let envelope = self.fetch_page(url.as_str())?;

        let transport = Rc::clone(&self.transport);
        let page_limit = self.page_limit;
        let fetch: FetchPage<R> =
            Rc::new(move |link| fetch_page_with(&*transport, link, page_limit));
        Ok(PagedResult::first(envelope, fetch))
    }

    /// Fetch a single record by identifier, with the same field projection
    /// as listings.
    pub fn get(&self, id: &str) -> Result<R, ClientError> {
        let mut url = self.record_url(id);
        url.query_pairs_mut().append_pair(QUERY_SELECT, &self.select);

        let response = self
            .transport
            .execute(ApiRequest::new(Method::Get, url.as_str()))?;
        if !response.is_success() {
            return Err(ClientError::Remote(error_message(&response.body)));
        }
        Ok(serde_json::from_slice(&response.body)?)
    }

    /// Create a record and return the server's echoed representation, which
    /// includes the server-assigned identifier.
    pub fn create(&self, record: &R) -> Result<R, ClientError> {
        let payload = serde_json::to_vec(record)?;
        let request = ApiRequest::new(Method::Post, self.resource_url.as_str())
            .header(HEADER_CONTENT_TYPE, CONTENT_TYPE_JSON)
            .header(HEADER_PREFER, PREFER_RETURN_REPRESENTATION)
            .body(payload);

        let response = self.transport.execute(request)?;
        if !response.is_success() {
            return Err(ClientError::Remote(error_message(&response.body)));
        }
        Ok(serde_json::from_slice(&response.body)?)
    }

    /// Patch an existing record. No body is expected back.
    pub fn update(&self, id: &str, record: &R) -> Result<(), ClientError> {
        let payload = serde_json::to_vec(record)?;
        let request = ApiRequest::new(Method::Patch, self.record_url(id).as_str())
            .header(HEADER_CONTENT_TYPE, CONTENT_TYPE_JSON)
            .body(payload);

        let response = self.transport.execute(request)?;
        if !response.is_success() {
            return Err(ClientError::Remote(error_message(&response.body)));
        }
        Ok(())
    }

    /// Delete a record by identifier.
    pub fn delete(&self, id: &str) -> Result<(), ClientError> {
        let request = ApiRequest::new(Method::Delete, self.record_url(id).as_str());
        let response = self.transport.execute(request)?;
        if !response.is_success() {
            return Err(ClientError::Remote(error_message(&response.body)));
        }
        Ok(())
    }

    /// Records are addressed by appending `(id)` to the collection URL.
    fn record_url(&self, id: &str) -> Url {
        let mut url = self.resource_url.clone();
        let addressed = format!("{}({})", url.path(), id);
        url.set_path(&addressed);
        url
    }

    /// OR-joined `contains(field,'term')` predicate over the configured
    /// search fields. URL escaping happens when the pair is appended to the
    /// query string.
    fn filter_predicate(&self, search_term: &str) -> String {
        self.search_fields
            .iter()
            .map(|field| format!("contains({field},'{search_term}')"))
            .collect::<Vec<_>>()
            .join(" or ")
    }

    fn fetch_page(&self, url: &str) -> Result<PageEnvelope<R>, ClientError> {
        fetch_page_with(&*self.transport, url, self.page_limit)
    }
}

/// One page-fetch round trip: GET with the page-size hint, error envelope on
/// non-success, decoded page envelope otherwise. Shared between the initial
/// listing and the continuation-link closure.
fn fetch_page_with<R: Record>(
    transport: &dyn Transport,
    url: &str,
    page_limit: usize,
) -> Result<PageEnvelope<R>, ClientError> {
    let request = ApiRequest::new(Method::Get, url)
        .header(HEADER_PREFER, format!("odata.maxpagesize={page_limit}"));
    let response = transport.execute(request)?;
    if !response.is_success() {
        return Err(ClientError::Remote(error_message(&response.body)));
    }
    Ok(serde_json::from_slice(&response.body)?)
}
