use rstest::rstest;
use serde_json::{json, Value};
use to_external_bodyxml::{transform, BodyXmlService, ErrorKind, TransformError, TransformOptions};

fn article(children: Value) -> Vec<u8> {
    json!({
        "type": "root",
        "body": {
            "type": "body",
            "version": 1,
            "children": children,
        }
    })
    .to_string()
    .into_bytes()
}

fn text(value: &str) -> Value {
    json!({"type": "text", "value": value})
}

fn paragraph(value: &str) -> Value {
    json!({"type": "paragraph", "children": [text(value)]})
}

fn render(children: Value) -> String {
    transform(&article(children)).unwrap()
}

#[test]
fn test_hello_paragraph() {
    assert_eq!(render(json!([paragraph("Hello")])), "<body><p>Hello</p></body>");
}

#[test]
fn test_empty_body() {
    assert_eq!(render(json!([])), "<body></body>");
}

#[rstest]
#[case("chapter", "<body><h1>Title</h1></body>")]
#[case("subheading", "<body><h2>Title</h2></body>")]
#[case("label", "<body><h4>Title</h4></body>")]
fn test_heading_levels(#[case] level: &str, #[case] expected: &str) {
    let heading = json!({"type": "heading", "level": level, "children": [text("Title")]});
    assert_eq!(render(json!([heading])), expected);
}

#[rstest]
#[case("intro")]
#[case("heading")]
#[case("")]
fn test_unsupported_heading_levels(#[case] level: &str) {
    let heading = json!({"type": "heading", "level": level, "children": [text("Title")]});
    let err = transform(&article(json!([heading]))).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Unsupported);
    assert_eq!(err.path(), vec![0]);
}

#[test]
fn test_link_to_article() {
    let link = json!({
        "type": "link",
        "url": "https://www.ft.com/content/1234-5678",
        "title": "",
        "children": [text("Article")],
    });
    let out = render(json!([{"type": "paragraph", "children": [link]}]));
    assert_eq!(
        out,
        "<body><p><ft-content type=\"http://www.ft.com/ontology/content/Article\" \
         url=\"http://api.ft.com/content/1234-5678\">Article</ftcontent></p></body>"
    );
}

#[rstest]
#[case(false, "<body><ul><li>a</li><li>b</li></ul></body>")]
#[case(true, "<body><ol><li>a</li><li>b</li></ol></body>")]
fn test_lists(#[case] ordered: bool, #[case] expected: &str) {
    let list = json!({
        "type": "list",
        "ordered": ordered,
        "children": [
            {"type": "list-item", "children": [text("a")]},
            {"type": "list-item", "children": [text("b")]},
        ],
    });
    assert_eq!(render(json!([list])), expected);
}

#[test]
fn test_image_set_ignores_picture() {
    let image = json!({
        "type": "image-set",
        "id": "abc123",
        "picture": {"layoutWidth": "full-grid", "images": []},
    });
    assert_eq!(
        render(json!([image])),
        "<body><content data-embedded=\"true\" id=\"abc123\" \
         type=\"http://www.ft.com/ontology/content/ImageSet\"></content></body>"
    );
}

#[test]
fn test_pullquote_uses_own_fields() {
    let quote = json!({"type": "pullquote", "text": "Words", "source": "Someone"});
    assert_eq!(
        render(json!([quote])),
        "<body><pull-quote><pull-quote-text><p>Words</p></pull-quote-text>\
         <pull-quote-source>Someone</pull-quote-source></pull-quote></body>"
    );
}

#[test]
fn test_table_contributes_nothing() {
    let table = json!({
        "type": "table",
        "stripes": true,
        "compact": false,
        "layoutWidth": "full-grid",
        "responsiveStyle": "overflow",
        "columnSettings": [{"hideOnMobile": false, "sortable": true, "sortType": "text"}],
        "children": [
            {"type": "table-caption", "children": [text("Caption")]},
            {"type": "table-body", "children": [
                {"type": "table-row", "children": [
                    {"type": "table-cell", "heading": true, "children": [text("H")]},
                    {"type": "table-cell", "children": [{"type": "strong", "children": [text("1")]}]},
                ]},
            ]},
            {"type": "table-footer", "children": [text("Footer")]},
        ],
    });
    assert_eq!(
        render(json!([paragraph("before"), table, paragraph("after")])),
        "<body><p>before</p><p>after</p></body>"
    );
}

#[rstest]
#[case(json!({"type": "video", "id": "v1", "embedded": true}))]
#[case(json!({"type": "youtube-video", "url": "https://www.youtube.com/watch?v=x"}))]
#[case(json!({"type": "recommended", "id": "r1", "heading": "Read more"}))]
#[case(json!({"type": "tweet", "id": "t1", "html": "<blockquote>tweet</blockquote>"}))]
#[case(json!({"type": "big-number", "number": "42", "description": "answer"}))]
#[case(json!({"type": "custom-code-component", "id": "c1", "layoutWidth": "full-width", "attributes": {"a": true}}))]
#[case(json!({"type": "flourish", "id": "f1", "layoutWidth": "in-line", "flourishType": "chart"}))]
#[case(json!({"type": "layout", "layoutName": "card", "layoutWidth": "inset-left", "children": [
    {"type": "heading", "level": "label", "children": [text("Card")]},
    {"type": "layout-image", "id": "i1", "alt": "", "caption": "", "credit": ""},
    {"type": "layout-slot", "children": [paragraph("slot")]},
]}))]
#[case(json!({"type": "scrolly-block", "theme": "sans", "children": [
    {"type": "scrolly-section", "display": "dark-background", "position": "left", "children": [
        {"type": "scrolly-image", "id": "s1"},
        {"type": "scrolly-copy", "children": [
            {"type": "scrolly-heading", "level": "chapter", "children": [text("Scrolly")]},
            paragraph("copy"),
        ]},
    ]},
]}))]
#[case(json!({"type": "some-future-node", "children": [paragraph("hidden")]}))]
fn test_variants_without_external_markup(#[case] block: Value) {
    assert_eq!(render(json!([block])), "<body></body>");
}

#[test]
fn test_nested_formatting_keeps_order() {
    let p = json!({"type": "paragraph", "children": [
        text("a "),
        {"type": "strong", "children": [text("b "), {"type": "emphasis", "children": [text("c")]}]},
        {"type": "break"},
        {"type": "strikethrough", "children": [text("d")]},
    ]});
    let quote = json!({"type": "blockquote", "children": [p.clone()]});
    assert_eq!(
        render(json!([p, {"type": "thematic-break"}, quote])),
        "<body><p>a <strong>b <em>c</em></strong><br><s>d</s></p><hr>\
         <blockquote><p>a <strong>b <em>c</em></strong><br><s>d</s></p></blockquote></body>"
    );
}

#[test]
fn test_error_path_points_at_failing_node() {
    let list = json!({"type": "list", "ordered": false, "children": [
        {"type": "list-item", "children": [text("ok")]},
    ]});
    let bad = json!({"type": "heading", "level": "intro", "children": [text("x")]});
    let err = transform(&article(json!([paragraph("a"), list, bad, paragraph("never")])))
        .unwrap_err();
    assert_eq!(err.path(), vec![2]);
    assert!(matches!(err, TransformError::Child { .. }));
    assert_eq!(
        err.root_cause().to_string(),
        "failed to transform heading with level intro"
    );
}

#[test]
fn test_non_root_payload() {
    let err = transform(br#"{"type":"paragraph","children":[]}"#).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Structural);
}

#[rstest]
#[case(b"".as_slice())]
#[case(b"[]".as_slice())]
#[case(br#"{"type":"root","body":{"children":[{"type":"image-set"}]}}"#.as_slice())]
#[case(br#"{"type":"root","body":{"children":[{"type":"list","children":[]}]}}"#.as_slice())]
fn test_decode_failures(#[case] payload: &[u8]) {
    let err = transform(payload).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Decode);
}

#[test]
fn test_service_with_custom_options() {
    let service = BodyXmlService::with_options(TransformOptions {
        article_type: "urn:article".to_string(),
        content_api_base: "urn:content:".to_string(),
        ..Default::default()
    });
    let link = json!({"type": "link", "url": "https://www.ft.com/content/xyz", "children": [text("x")]});
    let out = service
        .transform(&article(json!([{"type": "paragraph", "children": [link]}])))
        .unwrap();
    assert_eq!(
        out,
        "<body><p><ft-content type=\"urn:article\" url=\"urn:content:xyz\">x</ftcontent></p></body>"
    );
}

#[test]
fn test_list_inside_paragraph_is_a_decode_error() {
    let p = json!({"type": "paragraph", "children": [
        text("a"),
        {"type": "list", "ordered": false, "children": [
            {"type": "list-item", "children": [text("b")]},
        ]},
    ]});
    let err = transform(&article(json!([p]))).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Decode);
}

#[rstest]
#[case(json!({"type": "strong", "children": [paragraph("inside strong")]}))]
#[case(json!({"type": "heading", "level": "intro", "children": [text("x")]}))]
#[case(json!({"type": "image-set", "id": "i1"}))]
fn test_known_node_in_wrong_slot_is_a_decode_error(#[case] child: Value) {
    let p = json!({"type": "paragraph", "children": [text("a"), child]});
    let err = transform(&article(json!([p]))).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Decode);
}

#[test]
fn test_unknown_node_inside_paragraph_is_skipped() {
    let p = json!({"type": "paragraph", "children": [
        text("a"),
        {"type": "some-future-inline", "value": "hidden"},
        text("b"),
    ]});
    assert_eq!(render(json!([p])), "<body><p>ab</p></body>");
}

fn nested_strong(depth: usize) -> Value {
    let mut node = text("deep");
    for _ in 0..depth {
        node = json!({"type": "strong", "children": [node]});
    }
    json!([{"type": "paragraph", "children": [node]}])
}

#[test]
fn test_payload_nesting_within_decode_limit() {
    let out = render(nested_strong(50));
    assert!(out.starts_with("<body><p><strong><strong>"));
    assert!(out.contains("deep"));
}

#[test]
fn test_payload_nesting_beyond_decode_limit() {
    let err = transform(&article(nested_strong(70))).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Decode);
}
