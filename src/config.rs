//! CLI arguments and environment configuration.
//!
//! Token acquisition is out of scope: the operator supplies a pre-acquired
//! bearer token, usually via the environment.

use clap::Parser;

const DEFAULT_PAGE_LIMIT: usize = 5;

/// Interactive terminal browser for paginated OData-style REST resources.
#[derive(Debug, Parser)]
#[command(name = "odb", version, about)]
pub struct Config {
    /// Root URL of the resource API, e.g. https://org.example.com/api/data/v9.2
    #[arg(long, env = "ODB_BASE_URL")]
    pub base_url: String,

    /// Bearer token sent with every request.
    #[arg(long, env = "ODB_ACCESS_TOKEN", hide_env_values = true)]
    pub access_token: String,

    /// Records requested per page.
    #[arg(long, env = "ODB_PAGE_LIMIT", default_value_t = DEFAULT_PAGE_LIMIT)]
    pub page_limit: usize,
}
