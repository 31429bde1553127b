// Outbound tool links carry the directory's referral tag

use urlencoding::encode;

const REF_PARAM: &str = "ref";

/// Appends `ref=<tag>` to a tool's landing URL, respecting an existing
/// query string. URLs that already carry a `ref` parameter, and empty
/// tags, pass through unchanged.
pub fn outbound_link(href: &str, ref_tag: &str) -> String {
    if ref_tag.is_empty() || has_ref_param(href) {
        return href.to_string();
    }

    let separator = if href.contains('?') { '&' } else { '?' };
    format!("{href}{separator}{REF_PARAM}={}", encode(ref_tag))
}

fn has_ref_param(href: &str) -> bool {
    match href.split_once('?') {
        Some((_, query)) => query
            .split('&')
            .any(|pair| pair.split_once('=').map_or(pair, |(key, _)| key) == REF_PARAM),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case("https://example.com", "https://example.com?ref=devhunt"; "bare url gets question mark")]
    #[test_case("https://example.com/tool?plan=free", "https://example.com/tool?plan=free&ref=devhunt"; "existing query gets ampersand")]
    #[test_case("https://example.com?ref=other", "https://example.com?ref=other"; "existing ref is preserved")]
    #[test_case("https://example.com?prefs=1&ref=x", "https://example.com?prefs=1&ref=x"; "ref later in query is detected")]
    fn outbound_link_cases(href: &str, expected: &str) {
        assert_eq!(outbound_link(href, "devhunt"), expected);
    }

    #[test]
    fn tag_value_is_percent_encoded() {
        let link = outbound_link("https://example.com", "dev hunt/2026");

        assert_eq!(link, "https://example.com?ref=dev%20hunt%2F2026");
    }

    #[test]
    fn empty_tag_leaves_url_untouched() {
        assert_eq!(outbound_link("https://example.com", ""), "https://example.com");
    }

    #[test]
    fn prefs_param_does_not_shadow_ref() {
        // "prefs" ends in different text entirely; only an exact `ref` key counts.
        let link = outbound_link("https://example.com?prefs=1", "devhunt");

        assert_eq!(link, "https://example.com?prefs=1&ref=devhunt");
    }
}
