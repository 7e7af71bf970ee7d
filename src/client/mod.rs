//! Generic paginated resource client.
//!
//! A cursor-based pagination abstraction over a REST collection endpoint:
//! [`ResourceClient`] issues CRUD and search requests for any [`Record`]
//! type, [`PagedResult`] walks the resulting page chain, and [`Transport`]
//! is the injectable seam to the actual HTTP stack.
//!
//! Everything here is synchronous: network I/O happens inline with the
//! keypress that triggered it, and failures surface as [`ClientError`]
//! without retries.

pub mod envelope;
mod error;
pub mod page;
mod record;
pub mod resource;
pub mod transport;

pub use error::ClientError;
pub use page::PagedResult;
pub use record::Record;
pub use resource::{ResourceClient, ResourceClientOptions};
pub use transport::{ApiRequest, ApiResponse, HttpTransport, Method, Transport};
