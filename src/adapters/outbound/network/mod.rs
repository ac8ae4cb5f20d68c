/// Network adapters for remote CRAN repositories
mod cran_client;

pub use cran_client::CranIndexClient;
