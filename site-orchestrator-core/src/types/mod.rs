//! 类型定义模块

mod response;
mod status;
mod subdomain;
mod template;
mod website;

pub use response::{BatchDeleteFailure, BatchDeleteResult};
pub use status::WebsiteStatus;
pub use subdomain::SubdomainRejection;
pub use template::Template;
pub use website::{CreateWebsiteRequest, UpdateWebsiteRequest, Website, WebsiteStats};
