use super::*;

fn comment(id: &str, body: &str, score: i64, replies: Value) -> Value {
    serde_json::json!({
        "kind": "t1",
        "data": {
            "id": id,
            "body": body,
            "score": score,
            "replies": replies,
        }
    })
}

fn listing(children: Vec<Value>) -> Value {
    serde_json::json!({
        "kind": "Listing",
        "data": { "children": children }
    })
}

#[test]
fn empty_response_yields_no_comments() {
    assert!(comments_from_response(&serde_json::json!([])).is_empty());
    assert!(comments_from_response(&serde_json::json!({})).is_empty());
}

#[test]
fn parses_nested_reply_tree() {
    let leaf = comment("c3", "grandchild", 1, serde_json::json!(""));
    let child = comment("c2", "child", 2, listing(vec![leaf]));
    let root = comment("c1", "root", 3, listing(vec![child]));
    let body = serde_json::json!([{"kind": "Listing"}, listing(vec![root])]);

    let nodes = comments_from_response(&body);
    assert_eq!(nodes.len(), 1);
    assert_eq!(nodes[0].id, "c1");
    assert_eq!(nodes[0].replies.len(), 1);
    assert_eq!(nodes[0].replies[0].id, "c2");
    assert_eq!(nodes[0].replies[0].replies[0].body, "grandchild");
}

#[test]
fn sibling_order_is_preserved() {
    let siblings = vec![
        comment("a", "first", 5, serde_json::json!("")),
        comment("b", "second", 9, serde_json::json!("")),
        comment("c", "third", 1, serde_json::json!("")),
    ];
    let body = serde_json::json!([{"kind": "Listing"}, listing(siblings)]);

    let ids: Vec<String> = comments_from_response(&body)
        .into_iter()
        .map(|n| n.id)
        .collect();
    assert_eq!(ids, vec!["a", "b", "c"]);
}

#[test]
fn more_stubs_are_skipped() {
    let more = serde_json::json!({
        "kind": "more",
        "data": { "count": 12, "children": ["d", "e"] }
    });
    let real = comment("c1", "kept", 4, serde_json::json!(""));
    let body = serde_json::json!([{"kind": "Listing"}, listing(vec![more, real])]);

    let nodes = comments_from_response(&body);
    assert_eq!(nodes.len(), 1);
    assert_eq!(nodes[0].id, "c1");
}

#[test]
fn missing_score_defaults_to_zero() {
    let no_score = serde_json::json!({
        "kind": "t1",
        "data": { "id": "c1", "body": "text", "replies": "" }
    });
    let body = serde_json::json!([{"kind": "Listing"}, listing(vec![no_score])]);

    let nodes = comments_from_response(&body);
    assert_eq!(nodes[0].score, 0);
}
