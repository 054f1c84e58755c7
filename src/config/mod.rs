//! Configuration module

mod site;

pub use site::PathsConfig;
pub use site::ServerConfig;
pub use site::SiteConfig;
pub use site::SiteInfo;
