//! URL utility functions for reading query parameters

use web_sys::window;

/// Get a query parameter from the current URL.
/// Reads directly from `window.location.search`; useful when the router's
/// query map might not be initialized yet.
pub fn get_query_param(key: &str) -> Option<String> {
    let window = window()?;
    let search = window.location().search().ok()?;

    if search.is_empty() {
        return None;
    }

    let query_string = search.strip_prefix('?').unwrap_or(&search);

    for pair in query_string.split('&') {
        match pair.split_once('=') {
            Some((param_key, param_value)) if param_key == key => {
                return Some(
                    urlencoding::decode(param_value)
                        .unwrap_or_else(|_| param_value.into())
                        .into_owned(),
                );
            }
            None if pair == key => return Some(String::new()),
            _ => {}
        }
    }

    None
}
