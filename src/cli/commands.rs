pub mod book;
pub mod properties;
pub mod property;
pub mod reviews;

pub use book::book;
pub use properties::list_properties;
pub use property::show_property;
pub use reviews::show_reviews;

use anyhow::{Result, bail};
use common::FetchState;

use crate::render;

/// Renders a settled resource; a failed fetch becomes the command's error.
fn settled_output<T>(
    state: &FetchState<T>,
    loading_text: &str,
    loaded: impl FnOnce(&T) -> String,
) -> Result<String> {
    if let FetchState::Failed(message) = state {
        bail!("{}", message);
    }
    Ok(render::fetch_state(state, loading_text, loaded))
}
