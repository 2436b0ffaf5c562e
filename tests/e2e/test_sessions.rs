use crate::e2e::helpers;

use helpers::assertions::{
    assert_view_response, count_field, item_ids, items, session_id,
};
use helpers::TestContext;
use hyper::StatusCode;
use pretty_assertions::assert_eq;
use resource_directory::domain::window::WindowSettings;
use serde_json::{json, Value};
use std::time::Duration;
use test_context::test_context;

async fn create_session(ctx: &TestContext, body: Value) -> Value {
    let response = ctx.client.post("/api/sessions", &body).await.unwrap();
    response.assert_status(StatusCode::CREATED);
    response.json().clone()
}

async fn patch_query(ctx: &TestContext, id: &str, body: Value) -> Value {
    let response = ctx
        .client
        .patch(&format!("/api/sessions/{}/query", id), &body)
        .await
        .unwrap();
    response.assert_status(StatusCode::OK);
    response.json().clone()
}

async fn load_more(ctx: &TestContext, id: &str) -> Value {
    let response = ctx
        .client
        .post_empty(&format!("/api/sessions/{}/load-more", id))
        .await
        .unwrap();
    response.assert_status(StatusCode::OK);
    response.json().clone()
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_create_a_session_with_the_first_batch(ctx: &TestContext) {
    let view = create_session(ctx, json!({})).await;

    assert_view_response(&view);
    assert_eq!(count_field(&view, "total"), 21);
    assert_eq!(count_field(&view, "visible_count"), 9);
    assert_eq!(view["has_more"], json!(true));

    // Newest first by default
    assert_eq!(
        item_ids(&view),
        vec!["1", "2", "3", "4", "5", "6", "7", "8", "9"]
    );
    assert_eq!(view["query"]["sort_by"], json!("date_added"));
    assert_eq!(view["query"]["sort_direction"], json!("descending"));
    assert_eq!(view["query"]["view_mode"], json!("grid"));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_find_resources_by_search_text(ctx: &TestContext) {
    let view = create_session(ctx, json!({ "search_query": "python" })).await;

    assert_eq!(item_ids(&view), vec!["14"]);
    assert_eq!(view["has_more"], json!(false));
    assert_eq!(view["related_categories"], json!([]));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_require_every_search_term_to_match(ctx: &TestContext) {
    let view = create_session(ctx, json!({ "search_query": "music theory" })).await;
    assert_eq!(item_ids(&view), vec!["12", "19"]);

    let id = session_id(&view);
    let narrowed = patch_query(ctx, &id, json!({ "search_query": "music theory interactive" })).await;
    assert_eq!(item_ids(&narrowed), vec!["19"]);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_filter_by_category(ctx: &TestContext) {
    let view = create_session(ctx, json!({ "selected_category": "Design" })).await;

    assert_eq!(item_ids(&view), vec!["4", "5", "15"]);
    assert!(items(&view)
        .iter()
        .all(|item| item["category"] == json!("Design")));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_clear_the_category_with_null(ctx: &TestContext) {
    let view = create_session(ctx, json!({ "selected_category": "Design" })).await;
    let id = session_id(&view);

    let cleared = patch_query(ctx, &id, json!({ "selected_category": null })).await;

    assert_eq!(cleared["query"]["selected_category"], Value::Null);
    assert_eq!(count_field(&cleared, "total"), 21);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_sort_by_the_requested_key_and_direction(ctx: &TestContext) {
    let view = create_session(
        ctx,
        json!({ "sort_by": "date_added", "sort_direction": "ascending" }),
    )
    .await;
    assert_eq!(item_ids(&view)[..3], ["21", "20", "19"]);

    let id = session_id(&view);
    let by_title = patch_query(ctx, &id, json!({ "sort_by": "title" })).await;
    assert_eq!(by_title["items"][0]["title"], json!("Adobe Color Wheel"));

    let descending = patch_query(ctx, &id, json!({ "sort_direction": "desc" })).await;
    assert_eq!(descending["items"][0]["title"], json!("The Odin Project"));

    let by_rating = patch_query(ctx, &id, json!({ "sort_by": "rating" })).await;
    assert_eq!(item_ids(&by_rating)[..4], ["1", "3", "8", "17"]);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_toggle_the_sort_direction(ctx: &TestContext) {
    let view = create_session(ctx, json!({})).await;
    let id = session_id(&view);

    let toggled = patch_query(ctx, &id, json!({ "toggle_sort_direction": true })).await;

    assert_eq!(toggled["query"]["sort_direction"], json!("ascending"));
    assert_eq!(item_ids(&toggled)[..3], ["21", "20", "19"]);

    let back = patch_query(ctx, &id, json!({ "toggle_sort_direction": true })).await;
    assert_eq!(back["query"]["sort_direction"], json!("descending"));
    assert_eq!(item_ids(&back)[0], "1");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_an_unknown_sort_key(ctx: &TestContext) {
    let view = create_session(ctx, json!({})).await;
    let id = session_id(&view);

    let response = ctx
        .client
        .patch(
            &format!("/api/sessions/{}/query", id),
            &json!({ "sort_by": "popularity", "search_query": "python" }),
        )
        .await
        .unwrap();

    response
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error_message("unknown sort key: popularity");

    // Nothing from the rejected update was applied
    let current = ctx
        .client
        .get(&format!("/api/sessions/{}", id))
        .await
        .unwrap();
    current.assert_status(StatusCode::OK);
    assert_eq!(current.json()["query"]["search_query"], json!(""));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_an_unknown_sort_direction_on_create(ctx: &TestContext) {
    let response = ctx
        .client
        .post("/api/sessions", &json!({ "sort_direction": "sideways" }))
        .await
        .unwrap();

    response
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error_message("unknown sort direction");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_grow_the_window_until_exhausted(ctx: &TestContext) {
    let view = create_session(ctx, json!({})).await;
    let id = session_id(&view);
    let first_page = item_ids(&view);

    let second = load_more(ctx, &id).await;
    assert_eq!(count_field(&second, "visible_count"), 18);
    assert_eq!(item_ids(&second)[..9], first_page[..]);
    assert_eq!(second["has_more"], json!(true));

    let third = load_more(ctx, &id).await;
    assert_eq!(count_field(&third, "visible_count"), 21);
    assert_eq!(third["has_more"], json!(false));

    // Nothing left: a no-op
    let fourth = load_more(ctx, &id).await;
    assert_eq!(count_field(&fourth, "visible_count"), 21);
    assert_eq!(fourth["query"]["display_count"], json!(21));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reset_the_window_when_the_category_changes(ctx: &TestContext) {
    let view = create_session(ctx, json!({})).await;
    let id = session_id(&view);
    let grown = load_more(ctx, &id).await;
    assert_eq!(grown["query"]["display_count"], json!(18));

    let filtered = patch_query(ctx, &id, json!({ "selected_category": "Technology" })).await;

    assert_eq!(filtered["query"]["display_count"], json!(9));
    assert_eq!(item_ids(&filtered), vec!["1", "2", "3", "14"]);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_keep_the_window_when_only_the_sort_changes(ctx: &TestContext) {
    let view = create_session(ctx, json!({})).await;
    let id = session_id(&view);
    load_more(ctx, &id).await;

    let sorted = patch_query(ctx, &id, json!({ "sort_by": "title" })).await;

    assert_eq!(sorted["query"]["display_count"], json!(18));
    assert_eq!(count_field(&sorted, "visible_count"), 18);
}

#[tokio::test]
async fn it_should_ignore_load_more_inside_the_throttle_interval() {
    let ctx = TestContext::with_settings(WindowSettings {
        load_more_throttle: Duration::from_secs(60),
        ..TestContext::immediate_settings()
    })
    .await;

    let view = create_session(&ctx, json!({})).await;
    let id = session_id(&view);

    let first = load_more(&ctx, &id).await;
    assert_eq!(count_field(&first, "visible_count"), 18);

    let throttled = load_more(&ctx, &id).await;
    assert_eq!(count_field(&throttled, "visible_count"), 18);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_suggest_related_categories_when_a_search_finds_nothing(ctx: &TestContext) {
    let view = create_session(
        ctx,
        json!({ "search_query": "quantum basket weaving", "selected_category": "Books" }),
    )
    .await;

    assert_eq!(count_field(&view, "total"), 0);
    assert_eq!(
        view["related_categories"],
        json!(["Business", "Design", "Education", "Music"])
    );
}

#[tokio::test]
async fn it_should_debounce_search_input() {
    let ctx = TestContext::with_settings(WindowSettings {
        search_debounce: Duration::from_millis(200),
        ..TestContext::immediate_settings()
    })
    .await;

    let view = create_session(&ctx, json!({})).await;
    let id = session_id(&view);
    let path = format!("/api/sessions/{}/search-input", id);

    ctx.client.post(&path, &json!({ "text": "pyt" })).await.unwrap();
    let pending = ctx
        .client
        .post(&path, &json!({ "text": "python" }))
        .await
        .unwrap();
    pending.assert_status(StatusCode::OK);

    // Still showing the previous query
    assert_eq!(pending.json()["search_pending"], json!(true));
    assert_eq!(pending.json()["query"]["search_query"], json!(""));
    assert_eq!(count_field(pending.json(), "total"), 21);

    tokio::time::sleep(Duration::from_millis(300)).await;

    let settled = ctx
        .client
        .get(&format!("/api/sessions/{}", id))
        .await
        .unwrap();
    settled.assert_status(StatusCode::OK);
    assert_eq!(settled.json()["search_pending"], json!(false));
    assert_eq!(settled.json()["query"]["search_query"], json!("python"));
    assert_eq!(item_ids(settled.json()), vec!["14"]);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_restore_defaults_on_reset(ctx: &TestContext) {
    let view = create_session(
        ctx,
        json!({ "search_query": "music", "sort_by": "title", "view_mode": "list" }),
    )
    .await;
    let id = session_id(&view);

    let response = ctx
        .client
        .post_empty(&format!("/api/sessions/{}/reset", id))
        .await
        .unwrap();
    response.assert_status(StatusCode::OK);

    let reset = response.json();
    assert_eq!(reset["query"]["search_query"], json!(""));
    assert_eq!(reset["query"]["sort_by"], json!("date_added"));
    assert_eq!(reset["query"]["view_mode"], json!("grid"));
    assert_eq!(count_field(reset, "total"), 21);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_end_a_session(ctx: &TestContext) {
    let view = create_session(ctx, json!({})).await;
    let path = format!("/api/sessions/{}", session_id(&view));

    ctx.client
        .delete(&path)
        .await
        .unwrap()
        .assert_status(StatusCode::NO_CONTENT);

    ctx.client
        .get(&path)
        .await
        .unwrap()
        .assert_status(StatusCode::NOT_FOUND)
        .assert_error_message("Browse session not found");

    ctx.client
        .delete(&path)
        .await
        .unwrap()
        .assert_status(StatusCode::NOT_FOUND);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_return_not_found_for_an_unknown_session(ctx: &TestContext) {
    let response = ctx
        .client
        .post_empty(&format!("/api/sessions/{}/load-more", uuid::Uuid::new_v4()))
        .await
        .unwrap();

    response.assert_status(StatusCode::NOT_FOUND);
}
