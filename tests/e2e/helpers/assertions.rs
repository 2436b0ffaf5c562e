use serde_json::Value;

/// Ids of the items in a browse view, in display order
pub fn item_ids(view: &Value) -> Vec<String> {
    items(view)
        .iter()
        .map(|item| {
            item.get("id")
                .and_then(|v| v.as_str())
                .expect("Missing item id")
                .to_string()
        })
        .collect()
}

pub fn items(view: &Value) -> &Vec<Value> {
    view.get("items")
        .and_then(|v| v.as_array())
        .expect("Missing items array")
}

pub fn count_field(view: &Value, field: &str) -> u64 {
    view.get(field)
        .and_then(|v| v.as_u64())
        .unwrap_or_else(|| panic!("Missing {} field", field))
}

pub fn session_id(view: &Value) -> String {
    view.get("session_id")
        .and_then(|v| v.as_str())
        .expect("Missing session_id")
        .to_string()
}

pub fn assert_view_response(view: &Value) {
    assert!(view.get("session_id").and_then(|v| v.as_str()).is_some());
    assert!(view.get("total").and_then(|v| v.as_u64()).is_some());
    assert!(view.get("visible_count").and_then(|v| v.as_u64()).is_some());
    assert!(view.get("has_more").and_then(|v| v.as_bool()).is_some());
    assert!(view.get("search_pending").and_then(|v| v.as_bool()).is_some());
    assert!(view.get("related_categories").and_then(|v| v.as_array()).is_some());

    let query = view.get("query").expect("Missing query");
    for field in [
        "search_query",
        "selected_category",
        "sort_by",
        "sort_direction",
        "view_mode",
        "display_count",
    ] {
        assert!(query.get(field).is_some(), "Missing query.{}", field);
    }

    assert_eq!(
        items(view).len() as u64,
        count_field(view, "visible_count"),
        "visible_count must match the number of items"
    );
}

/// Every item is gated the same way and its link is withheld unless visible
pub fn assert_items_visibility(view: &Value, expected: &str) {
    for item in items(view) {
        assert_eq!(
            item.get("visibility").and_then(|v| v.as_str()),
            Some(expected),
            "Unexpected visibility for item {:?}",
            item.get("id")
        );
        let link = item.get("link").expect("Missing link field");
        if expected == "visible" {
            assert!(link.is_string(), "Visible item must carry its link");
        } else {
            assert!(link.is_null(), "Gated item must not leak its link");
        }
    }
}
