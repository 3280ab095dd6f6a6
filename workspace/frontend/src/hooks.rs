//! View state for remote resources.
//!
//! The lifecycle itself lives in [`common::FetchController`]; the hooks in
//! [`crate::common::fetch_hook`] only schedule its tickets on the browser's
//! event loop and mirror its state into Yew.

pub use common::{FetchError, FetchState};
pub use crate::common::fetch_hook::{use_fetch_with_refetch, use_resource};
