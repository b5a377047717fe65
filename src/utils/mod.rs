pub mod constants;
pub mod json_path;
pub mod url_utils;

pub use constants::*;
pub use json_path::{lookup_text, text_or};
pub use url_utils::{build_detail_url, is_valid_url, validate_endpoint_template};
