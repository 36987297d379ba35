use super::*;

fn rule_body() -> Value {
    json!({
        "name": "ping",
        "type": "COMMAND",
        "description": "Replies with pong",
        "trigger": "!ping"
    })
}

/// Tests the rule lifecycle for an authorized server.
///
/// Expected: 201 on create, listed, 200 on update, 204 on delete, 404 on second delete
#[tokio::test]
async fn rule_crud_for_authorized_server() {
    let app = TestApp::new().await;
    let cookie = app.sign_in().await;

    let created = app
        .request(
            Method::POST,
            "/api/servers/1/rules",
            Some(&cookie),
            Some(rule_body()),
        )
        .await;
    assert_eq!(created.status(), StatusCode::CREATED);
    let created = json_body(created).await;
    assert_eq!(created["type"], "COMMAND");
    assert_eq!(created["isActive"], true);
    assert_eq!(created["createdBy"], "100");
    let id = created["id"].as_i64().unwrap();

    let list = json_body(app.get("/api/servers/1/rules", Some(&cookie)).await).await;
    assert_eq!(list.as_array().unwrap().len(), 1);

    let updated = app
        .request(
            Method::PATCH,
            &format!("/api/rules/{}", id),
            Some(&cookie),
            Some(json!({ "isActive": false })),
        )
        .await;
    assert_eq!(updated.status(), StatusCode::OK);
    let updated = json_body(updated).await;
    assert_eq!(updated["isActive"], false);
    assert_eq!(updated["name"], "ping");
    assert_eq!(updated["trigger"], "!ping");

    let cleared = app
        .request(
            Method::PATCH,
            &format!("/api/rules/{}", id),
            Some(&cookie),
            Some(json!({ "trigger": null })),
        )
        .await;
    assert_eq!(cleared.status(), StatusCode::OK);
    let cleared = json_body(cleared).await;
    assert_eq!(cleared["trigger"], Value::Null);
    assert_eq!(cleared["isActive"], false);

    let deleted = app
        .request(Method::DELETE, &format!("/api/rules/{}", id), Some(&cookie), None)
        .await;
    assert_eq!(deleted.status(), StatusCode::NO_CONTENT);

    let missing = app
        .request(Method::DELETE, &format!("/api/rules/{}", id), Some(&cookie), None)
        .await;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    assert_eq!(json_body(missing).await, json!({ "error": "Rule not found" }));
}

/// Tests creating rules with invalid payloads.
///
/// Expected: 400 `Invalid rule data` for malformed JSON and unknown types
#[tokio::test]
async fn invalid_rule_payloads_are_rejected() {
    let app = TestApp::new().await;
    let cookie = app.sign_in().await;

    for body in [
        json!({ "name": "ping" }),
        json!({ "name": "ping", "type": "SOMETIMES", "description": "d" }),
        json!({ "name": "  ", "type": "AUTO", "description": "d" }),
    ] {
        let response = app
            .request(Method::POST, "/api/servers/1/rules", Some(&cookie), Some(body))
            .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            json_body(response).await,
            json!({ "error": "Invalid rule data" })
        );
    }
}

/// Tests creating a rule for a server outside the authorized set.
///
/// Expected: 403
#[tokio::test]
async fn create_rule_for_unauthorized_server_is_denied() {
    let app = TestApp::new().await;
    let cookie = app.sign_in().await;

    let response = app
        .request(
            Method::POST,
            "/api/servers/2/rules",
            Some(&cookie),
            Some(rule_body()),
        )
        .await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

/// Tests modifying a rule owned by a server outside the authorized set.
///
/// Expected: 403 on update and delete
#[tokio::test]
async fn rule_on_unauthorized_server_is_denied() {
    let app = TestApp::new().await;
    let cookie = app.sign_in().await;
    let db = app.test.db.as_ref().unwrap();
    test_utils::factory::create_server_with_id(db, "999").await.unwrap();
    let rule = test_utils::factory::create_rule(db, "999").await.unwrap();

    let update = app
        .request(
            Method::PATCH,
            &format!("/api/rules/{}", rule.id),
            Some(&cookie),
            Some(json!({ "name": "renamed" })),
        )
        .await;
    let delete = app
        .request(
            Method::DELETE,
            &format!("/api/rules/{}", rule.id),
            Some(&cookie),
            None,
        )
        .await;

    assert_eq!(update.status(), StatusCode::FORBIDDEN);
    assert_eq!(delete.status(), StatusCode::FORBIDDEN);
}
