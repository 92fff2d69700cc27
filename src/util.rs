//! Small browser helpers shared across components.

use wasm_bindgen::JsValue;

/// Monotonic millisecond clock (`performance.now()`); falls back to 0 when
/// the performance object is unavailable.
pub fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

pub fn clog(msg: &str) {
    web_sys::console::log_1(&JsValue::from_str(msg));
}

/// Smooth-scrolls the element with the given id into view.
pub fn scroll_to(id: &str) {
    let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if let Some(el) = doc.get_element_by_id(id) {
        let opts = web_sys::ScrollIntoViewOptions::new();
        opts.set_behavior(web_sys::ScrollBehavior::Smooth);
        opts.set_block(web_sys::ScrollLogicalPosition::Start);
        el.scroll_into_view_with_scroll_into_view_options(&opts);
    }
}

/// Reads a query parameter from the current location.
pub fn query_param(key: &str) -> Option<String> {
    let search = web_sys::window()?.location().search().ok()?;
    get_query_param(&search, key)
}

/// Writes (or removes, when `value` is `None`) a query parameter in place via
/// `history.replaceState`, preserving path and hash.
pub fn set_query_param(key: &str, value: Option<&str>) {
    let Some(win) = web_sys::window() else {
        return;
    };
    let loc = win.location();
    let (Ok(path), Ok(search), Ok(hash)) = (loc.pathname(), loc.search(), loc.hash()) else {
        return;
    };
    let query = upsert_query_param(&search, key, value);
    let next = if query.is_empty() {
        format!("{path}{hash}")
    } else {
        format!("{path}?{query}{hash}")
    };
    if let Ok(history) = win.history() {
        let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(&next));
    }
}

/// Parses a `?a=b&c=d` search string into key/value pairs. Keys without a
/// value map to an empty string; empty segments are skipped.
pub fn parse_query(search: &str) -> Vec<(String, String)> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter(|seg| !seg.is_empty())
        .map(|seg| match seg.split_once('=') {
            Some((k, v)) => (k.to_string(), v.to_string()),
            None => (seg.to_string(), String::new()),
        })
        .collect()
}

fn build_query(pairs: &[(String, String)]) -> String {
    pairs
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&")
}

fn get_query_param(search: &str, key: &str) -> Option<String> {
    parse_query(search)
        .into_iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v)
}

/// Returns the search string with `key` set to `value`, removed when `value`
/// is `None`, and all other parameters untouched.
fn upsert_query_param(search: &str, key: &str, value: Option<&str>) -> String {
    let mut pairs = parse_query(search);
    pairs.retain(|(k, _)| k != key);
    if let Some(v) = value {
        pairs.push((key.to_string(), v.to_string()));
    }
    build_query(&pairs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_and_empty_values() {
        assert_eq!(
            parse_query("?p=appt-backend&view=demo"),
            vec![
                ("p".into(), "appt-backend".into()),
                ("view".into(), "demo".into())
            ]
        );
        assert_eq!(parse_query(""), vec![]);
        assert_eq!(parse_query("?"), vec![]);
        assert_eq!(parse_query("?flag"), vec![("flag".into(), String::new())]);
    }

    #[test]
    fn upsert_replaces_and_removes() {
        let q = upsert_query_param("?p=a&view=demo", "view", Some("writeup"));
        assert_eq!(get_query_param(&q, "view").as_deref(), Some("writeup"));
        assert_eq!(get_query_param(&q, "p").as_deref(), Some("a"));

        let q = upsert_query_param("?p=a&view=demo", "p", None);
        assert_eq!(get_query_param(&q, "p"), None);
        assert_eq!(q, "view=demo");

        assert_eq!(upsert_query_param("", "p", Some("x")), "p=x");
        assert_eq!(upsert_query_param("?p=x", "p", None), "");
    }
}
