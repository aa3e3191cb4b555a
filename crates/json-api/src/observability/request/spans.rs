//! HTTP span helpers.

/// Collapse numeric path segments so requests for different records share a
/// route, e.g. `/sites/12` becomes `/sites/{id}`.
pub(super) fn route_pattern(path: &str) -> String {
    if path == "/" {
        return "/".to_owned();
    }

    let mut route = String::from("/");

    for (index, segment) in path.trim_start_matches('/').split('/').enumerate() {
        if index > 0 {
            route.push('/');
        }

        if !segment.is_empty() && segment.bytes().all(|byte| byte.is_ascii_digit()) {
            route.push_str("{id}");
        } else {
            route.push_str(segment);
        }
    }

    route
}
