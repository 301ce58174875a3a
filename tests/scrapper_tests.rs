use searchgate::data_models::SearchResult;
use searchgate::scrapper::*;

fn result_anchor(href: &str, title: &str) -> String {
    format!(
        r#"<div class="result results_links web-result"><div class="result__body">
            <h2 class="result__title"><a rel="nofollow" class="result__a" href="{href}">{title}</a></h2>
            <a class="result__snippet" href="{href}">snippet for {title}</a>
        </div></div>"#
    )
}

fn page(anchors: &[(&str, &str)]) -> String {
    let body: String = anchors
        .iter()
        .map(|(href, title)| result_anchor(href, title))
        .collect();
    format!("<html><body><div id=\"links\">{body}</div></body></html>")
}

#[cfg(test)]
mod extract_results_tests {
    use super::*;

    #[test]
    fn test_empty_html() {
        assert!(extract_results("", 10).is_empty());
    }

    #[test]
    fn test_no_matching_anchors() {
        let html = r#"<a href="https://a.com" class="nav">Home</a><p>nothing here</p>"#;
        assert!(extract_results(html, 10).is_empty());
    }

    #[test]
    fn test_malformed_html() {
        let html = r#"<a class="result__a" href="https://a.com">unterminated <div><<<"#;
        assert!(extract_results(html, 10).is_empty());
    }

    #[test]
    fn test_returns_all_when_under_limit() {
        let html = page(&[("https://a.com", "A"), ("https://b.com", "B")]);
        let results = extract_results(&html, 10);
        assert_eq!(
            results,
            vec![
                SearchResult::new("A", "https://a.com"),
                SearchResult::new("B", "https://b.com"),
            ]
        );
    }

    #[test]
    fn test_caps_at_limit_in_document_order() {
        let html = page(&[
            ("https://1.com", "One"),
            ("https://2.com", "Two"),
            ("https://3.com", "Three"),
            ("https://4.com", "Four"),
        ]);
        let results = extract_results(&html, 2);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].title, "One");
        assert_eq!(results[1].title, "Two");
    }

    #[test]
    fn test_min_of_matches_and_limit() {
        let anchors: Vec<(String, String)> = (0..7)
            .map(|i| (format!("https://site{i}.com"), format!("Site {i}")))
            .collect();
        let borrowed: Vec<(&str, &str)> = anchors
            .iter()
            .map(|(h, t)| (h.as_str(), t.as_str()))
            .collect();
        let html = page(&borrowed);

        for limit in [1, 3, 7, 20] {
            assert_eq!(extract_results(&html, limit).len(), limit.min(7));
        }
    }

    #[test]
    fn test_zero_limit() {
        let html = page(&[("https://a.com", "A")]);
        assert!(extract_results(&html, 0).is_empty());
    }

    #[test]
    fn test_strips_nested_tags_from_title() {
        let html = r#"<a class="result__a" href="https://rust-lang.org"><b>Rust</b> Programming <span class="x">Language</span></a>"#;
        let results = extract_results(html, 5);
        assert_eq!(results[0].title, "Rust Programming Language");
    }

    #[test]
    fn test_class_marker_among_other_classes() {
        let html = r#"<a href="https://a.com" class="js-link result__a big">A</a>"#;
        let results = extract_results(html, 5);
        assert_eq!(results, vec![SearchResult::new("A", "https://a.com")]);
    }

    #[test]
    fn test_href_before_or_after_class() {
        let html = r#"
            <a href="https://first.com" class="result__a">First</a>
            <a class='result__a' href='https://second.com'>Second</a>
        "#;
        let results = extract_results(html, 5);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].link, "https://first.com");
        assert_eq!(results[1].link, "https://second.com");
    }

    #[test]
    fn test_ignores_snippet_anchors() {
        let html = page(&[("https://a.com", "A")]);
        let results = extract_results(&html, 10);
        assert_eq!(results.len(), 1);
        assert!(!results[0].title.contains("snippet"));
    }

    #[test]
    fn test_decodes_entities() {
        let html = r#"<a class="result__a" href="//duckduckgo.com/l/?uddg=https%3A%2F%2Fa.com&amp;rut=1">Tom &amp; Jerry&#39;s &quot;Show&quot;</a>"#;
        let results = extract_results(html, 5);
        assert_eq!(results[0].title, r#"Tom & Jerry's "Show""#);
        assert_eq!(
            results[0].link,
            "//duckduckgo.com/l/?uddg=https%3A%2F%2Fa.com&rut=1"
        );
    }

    #[test]
    fn test_collapses_whitespace_in_title() {
        let html = "<a class=\"result__a\" href=\"https://a.com\">\n   Hello\n\t  World  </a>";
        assert_eq!(extract_results(html, 5)[0].title, "Hello World");
    }

    #[test]
    fn test_skips_anchor_without_href_or_title() {
        let html = r#"
            <a class="result__a">No link</a>
            <a class="result__a" href="https://empty.com"><img src="x.png"></a>
            <a class="result__a" href="https://ok.com">Ok</a>
        "#;
        let results = extract_results(html, 5);
        assert_eq!(results, vec![SearchResult::new("Ok", "https://ok.com")]);
    }

    #[test]
    fn test_does_not_match_abbr_tags() {
        let html = r#"<abbr class="result__a" href="https://a.com">A</abbr>"#;
        assert!(extract_results(html, 5).is_empty());
    }
}

#[cfg(test)]
mod normalize_link_tests {
    use super::*;

    #[test]
    fn test_decodes_redirect_wrapper() {
        let href = "//duckduckgo.com/l/?uddg=https%3A%2F%2Fexample.com%2Fpath&rut=abc123";
        assert_eq!(normalize_link(href), "https://example.com/path");
    }

    #[test]
    fn test_decodes_redirect_without_trailing_params() {
        let href = "/l/?uddg=https%3A%2F%2Ftest.com";
        assert_eq!(normalize_link(href), "https://test.com");
    }

    #[test]
    fn test_redirect_parameter_not_first() {
        let href = "https://duckduckgo.com/l/?kh=-1&uddg=https%3A%2F%2Fdocs.rs%2Fregex";
        assert_eq!(normalize_link(href), "https://docs.rs/regex");
    }

    #[test]
    fn test_redirect_target_with_encoded_query() {
        let href = "//duckduckgo.com/l/?uddg=https%3A%2F%2Ftest.org%2Fcomplex%3Fparam%3D123%26b%3D2&rut=abc";
        assert_eq!(normalize_link(href), "https://test.org/complex?param=123&b=2");
    }

    #[test]
    fn test_protocol_relative() {
        assert_eq!(
            normalize_link("//example.com/page"),
            "https://example.com/page"
        );
    }

    #[test]
    fn test_direct_link_unchanged() {
        assert_eq!(
            normalize_link("https://www.rust-lang.org/"),
            "https://www.rust-lang.org/"
        );
        assert_eq!(normalize_link("/relative/path"), "/relative/path");
        assert_eq!(normalize_link(""), "");
    }

    #[test]
    fn test_undecodable_target_falls_back() {
        let href = "//duckduckgo.com/l/?uddg=%FF%FE";
        assert_eq!(normalize_link(href), href);
    }

    #[test]
    fn test_similar_parameter_name_is_not_a_redirect() {
        let href = "https://example.com/?xuddg=https%3A%2F%2Fevil.com";
        assert_eq!(normalize_link(href), href);
    }
}
