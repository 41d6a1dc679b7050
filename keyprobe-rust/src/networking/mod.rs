mod http_types;
mod net_provider_reqwest;

pub use http_types::*;
pub use net_provider_reqwest::*;
