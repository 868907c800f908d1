//! HTTP-level tests for the `/houses` pages.

mod common;

use axum::http::StatusCode;
use common::{body_text, get, location, post_form, TestApp};
use limpeza_db::models::company::Company;
use limpeza_db::models::dataset::Dataset;
use limpeza_db::models::house::House;
use serde_json::Number;

fn acme_dataset() -> Dataset {
    Dataset {
        companies: vec![Company {
            id: "c1".into(),
            name: Some("Acme".into()),
            contact: None,
            notes: None,
            extra: Default::default(),
        }],
        ..Default::default()
    }
}

#[tokio::test]
async fn post_house_coerces_size_to_number() {
    let app = TestApp::new(acme_dataset());

    let response = post_form(
        app.router(),
        "/houses",
        "address=1+Main+St&size=120&companyId=c1",
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/houses");

    let houses = app.dataset().await.houses;
    assert_eq!(
        houses,
        vec![House {
            id: "h1".into(),
            address: Some("1 Main St".into()),
            city: None,
            size: Some(Some(Number::from(120))),
            company_id: Some("c1".into()),
            extra: Default::default(),
        }]
    );
    assert_eq!(
        serde_json::to_value(&houses[0]).unwrap(),
        serde_json::json!({
            "id": "h1",
            "address": "1 Main St",
            "size": 120,
            "companyId": "c1"
        })
    );
}

#[tokio::test]
async fn non_numeric_size_is_stored_as_null() {
    let app = TestApp::new(acme_dataset());

    let response = post_form(app.router(), "/houses", "address=Nowhere&size=big").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/houses");

    let houses = app.dataset().await.houses;
    assert_eq!(houses.len(), 1);
    assert_eq!(houses[0].size, Some(None));
    assert_eq!(
        serde_json::to_value(&houses[0]).unwrap(),
        serde_json::json!({ "id": "h1", "address": "Nowhere", "size": null })
    );
}

#[tokio::test]
async fn empty_size_is_stored_as_zero() {
    let app = TestApp::new(Dataset::default());

    post_form(app.router(), "/houses", "id=&address=2+Side+Rd&city=Porto&size=&companyId=").await;

    let houses = app.dataset().await.houses;
    assert_eq!(houses.len(), 1);
    assert_eq!(houses[0].size, Some(Some(Number::from(0))));
    assert_eq!(houses[0].city.as_deref(), Some("Porto"));
}

#[tokio::test]
async fn size_form_text_follows_number_literal_rules() {
    let app = TestApp::new(Dataset::default());

    for body in ["size=0x10", "size=%2B16", "size=1.6e1", "size=%2B%2B1"] {
        post_form(app.router(), "/houses", body).await;
    }

    let sizes: Vec<_> = app
        .dataset()
        .await
        .houses
        .into_iter()
        .map(|h| h.size)
        .collect();
    assert_eq!(
        sizes,
        vec![
            Some(Some(Number::from(16))),
            Some(Some(Number::from(16))),
            Some(Some(Number::from(16))),
            Some(None),
        ]
    );
}

#[tokio::test]
async fn missing_size_field_is_stored_as_null() {
    let app = TestApp::new(Dataset::default());

    post_form(app.router(), "/houses", "address=No+Size").await;

    assert_eq!(app.dataset().await.houses[0].size, Some(None));
}

#[tokio::test]
async fn edit_page_shows_null_size_as_empty() {
    let app = TestApp::new(Dataset {
        houses: vec![House {
            id: "h1".into(),
            address: None,
            city: None,
            size: Some(None),
            company_id: None,
            extra: Default::default(),
        }],
        ..Default::default()
    });

    let html = body_text(get(app.router(), "/houses/edit/h1").await).await;
    assert!(html.contains("name=\"size\" value=\"\""));
}

#[tokio::test]
async fn company_reference_is_not_checked() {
    let app = TestApp::new(Dataset::default());

    let response = post_form(app.router(), "/houses", "address=X&companyId=c404").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        app.dataset().await.houses[0].company_id.as_deref(),
        Some("c404")
    );
}

#[tokio::test]
async fn edit_page_shows_size_without_decimal_point() {
    let app = TestApp::new(Dataset {
        houses: vec![House {
            id: "h1".into(),
            address: Some("1 Main St".into()),
            city: Some("Lisbon".into()),
            size: Some(Some(Number::from(120))),
            company_id: Some("c1".into()),
            extra: Default::default(),
        }],
        ..Default::default()
    });

    let response = get(app.router(), "/houses/edit/h1").await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains("<title>Edit House</title>"));
    assert!(html.contains("name=\"size\" value=\"120\""));
    assert!(html.contains("name=\"companyId\" value=\"c1\""));
}

#[tokio::test]
async fn delete_house_redirects_to_list() {
    let app = TestApp::new(Dataset {
        houses: vec![House {
            id: "h1".into(),
            address: None,
            city: None,
            size: None,
            company_id: None,
            extra: Default::default(),
        }],
        ..Default::default()
    });

    let response = post_form(app.router(), "/houses/delete/h1", "").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/houses");
    assert!(app.dataset().await.houses.is_empty());
}
