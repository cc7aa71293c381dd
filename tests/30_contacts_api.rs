mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::{json, Value};
use uuid::Uuid;

use common::TestServer;

async fn add(server: &TestServer, token: &str, body: Value) -> Result<Value> {
    let res = server
        .client
        .post(server.url("/api/contacts/add"))
        .bearer_auth(token)
        .json(&body)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK, "add failed for {}", body);
    Ok(res.json().await?)
}

async fn list(server: &TestServer, token: &str) -> Result<Vec<Value>> {
    let res = server
        .client
        .get(server.url("/api/contacts/all"))
        .bearer_auth(token)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await?;
    Ok(body.as_array().cloned().unwrap_or_default())
}

#[tokio::test]
async fn add_update_delete_round() -> Result<()> {
    let server = TestServer::spawn().await?;
    let user = Uuid::new_v4();
    let token = server.token_for(user);

    let created = add(&server, &token, json!({ "name": "Alice", "email": "a@x.com" })).await?;
    assert_eq!(created["name"], "Alice");
    assert_eq!(created["email"], "a@x.com");
    assert_eq!(created["owner"], user.to_string());
    let id = created["id"].as_str().expect("id assigned").to_string();

    let res = server
        .client
        .put(server.url(&format!("/api/contacts/update/{}", id)))
        .bearer_auth(&token)
        .json(&json!({ "phone": "555" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let updated: Value = res.json().await?;
    assert_eq!(updated["phone"], "555");
    assert_eq!(updated["name"], "Alice");
    assert_eq!(updated["email"], "a@x.com");

    let res = server
        .client
        .delete(server.url(&format!("/api/contacts/delete/{}", id)))
        .bearer_auth(&token)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await?;
    assert_eq!(body, json!({ "msg": "Contact removed" }));

    assert!(list(&server, &token).await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn add_without_name_is_rejected() -> Result<()> {
    let server = TestServer::spawn().await?;
    let token = server.token_for(Uuid::new_v4());

    for body in [json!({}), json!({ "name": "" }), json!({ "email": "a@x.com" })] {
        let res = server
            .client
            .post(server.url("/api/contacts/add"))
            .bearer_auth(&token)
            .json(&body)
            .send()
            .await?;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST, "body {}", body);

        let err: Value = res.json().await?;
        assert_eq!(err["code"], "VALIDATION_ERROR");
        assert!(err["field_errors"]["name"].is_string(), "no name detail: {}", err);
    }

    assert!(list(&server, &token).await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn non_string_field_is_a_validation_error() -> Result<()> {
    let server = TestServer::spawn().await?;
    let token = server.token_for(Uuid::new_v4());

    let res = server
        .client
        .post(server.url("/api/contacts/add"))
        .bearer_auth(&token)
        .json(&json!({ "name": 5 }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let err: Value = res.json().await?;
    assert_eq!(err["code"], "VALIDATION_ERROR");
    assert!(err["field_errors"]["name"].is_string(), "no name detail: {}", err);

    let created = add(&server, &token, json!({ "name": "Dan" })).await?;
    let id = created["id"].as_str().unwrap_or_default();
    let res = server
        .client
        .put(server.url(&format!("/api/contacts/update/{}", id)))
        .bearer_auth(&token)
        .json(&json!({ "city": ["X"] }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let err: Value = res.json().await?;
    assert_eq!(err["code"], "VALIDATION_ERROR");
    assert!(err["field_errors"]["city"].is_string(), "no city detail: {}", err);

    let listed = list(&server, &token).await?;
    assert_eq!(listed, vec![created]);
    Ok(())
}

#[tokio::test]
async fn legacy_field_names_are_accepted() -> Result<()> {
    let server = TestServer::spawn().await?;
    let token = server.token_for(Uuid::new_v4());

    let created = add(
        &server,
        &token,
        json!({
            "name": "Erin",
            "addrress": "legacy street",
            "postalCode": "1000",
            "pincode": "2000"
        }),
    )
    .await?;
    assert_eq!(created["address"], "legacy street");
    assert_eq!(created["postalCode"], "1000");
    assert!(created.get("pincode").is_none());
    Ok(())
}

#[tokio::test]
async fn list_is_scoped_and_newest_first() -> Result<()> {
    let server = TestServer::spawn().await?;
    let alice = server.token_for(Uuid::new_v4());
    let bob = server.token_for(Uuid::new_v4());

    add(&server, &alice, json!({ "name": "A" })).await?;
    add(&server, &bob, json!({ "name": "Bob's friend" })).await?;
    add(&server, &alice, json!({ "name": "B" })).await?;

    let names: Vec<String> = list(&server, &alice)
        .await?
        .iter()
        .map(|c| c["name"].as_str().unwrap_or_default().to_string())
        .collect();
    assert_eq!(names, vec!["B", "A"]);

    assert_eq!(list(&server, &bob).await?.len(), 1);
    Ok(())
}

#[tokio::test]
async fn update_changes_only_present_fields() -> Result<()> {
    let server = TestServer::spawn().await?;
    let token = server.token_for(Uuid::new_v4());

    let created = add(
        &server,
        &token,
        json!({
            "name": "Carol",
            "email": "c@x.com",
            "phone": "123",
            "address": "1 Main St",
            "city": "Old Town",
            "state": "OR",
            "country": "US",
            "postalCode": "97201"
        }),
    )
    .await?;
    let id = created["id"].as_str().unwrap_or_default();

    // Empty strings count as absent
    let res = server
        .client
        .put(server.url(&format!("/api/contacts/update/{}", id)))
        .bearer_auth(&token)
        .json(&json!({ "city": "X", "name": "" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let updated: Value = res.json().await?;

    let mut expected = created.clone();
    expected["city"] = json!("X");
    assert_eq!(updated, expected);
    Ok(())
}

#[tokio::test]
async fn foreign_contact_looks_missing() -> Result<()> {
    let server = TestServer::spawn().await?;
    let owner = server.token_for(Uuid::new_v4());
    let intruder = server.token_for(Uuid::new_v4());

    let created = add(&server, &owner, json!({ "name": "Private" })).await?;
    let id = created["id"].as_str().unwrap_or_default().to_string();
    let missing = Uuid::new_v4().to_string();

    for target in [&id, &missing] {
        let update = server
            .client
            .put(server.url(&format!("/api/contacts/update/{}", target)))
            .bearer_auth(&intruder)
            .json(&json!({ "name": "Hijacked" }))
            .send()
            .await?;
        assert_eq!(update.status(), StatusCode::NOT_FOUND);
        let update_body: Value = update.json().await?;
        assert_eq!(update_body["message"], "Contact not found");

        let delete = server
            .client
            .delete(server.url(&format!("/api/contacts/delete/{}", target)))
            .bearer_auth(&intruder)
            .send()
            .await?;
        assert_eq!(delete.status(), StatusCode::NOT_FOUND);
        let delete_body: Value = delete.json().await?;
        assert_eq!(delete_body, update_body);
    }

    let owned = list(&server, &owner).await?;
    assert_eq!(owned.len(), 1);
    assert_eq!(owned[0]["name"], "Private");
    Ok(())
}

#[tokio::test]
async fn deleted_contact_cannot_be_touched_again() -> Result<()> {
    let server = TestServer::spawn().await?;
    let token = server.token_for(Uuid::new_v4());

    let created = add(&server, &token, json!({ "name": "Temp" })).await?;
    let id = created["id"].as_str().unwrap_or_default().to_string();

    let first = server
        .client
        .delete(server.url(&format!("/api/contacts/delete/{}", id)))
        .bearer_auth(&token)
        .send()
        .await?;
    assert_eq!(first.status(), StatusCode::OK);

    let again = server
        .client
        .delete(server.url(&format!("/api/contacts/delete/{}", id)))
        .bearer_auth(&token)
        .send()
        .await?;
    assert_eq!(again.status(), StatusCode::NOT_FOUND);

    let update = server
        .client
        .put(server.url(&format!("/api/contacts/update/{}", id)))
        .bearer_auth(&token)
        .json(&json!({ "phone": "1" }))
        .send()
        .await?;
    assert_eq!(update.status(), StatusCode::NOT_FOUND);
    Ok(())
}
