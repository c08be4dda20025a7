use axum::http::StatusCode;
use serde_json::json;
use temp_dir::TempDir;

mod helpers;

#[tokio::test]
pub async fn test_category_lifecycle() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let app = helpers::setup_app(dir.child("db.sqlite3"), None).await?;

    let created = helpers::json(
        &app,
        "POST",
        "/api/categories",
        None,
        json!({"name": "Guisos de cuchara"}),
    )
    .await?;
    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(
        created.body,
        json!({"name": "Guisos de cuchara", "slug": "guisos-de-cuchara", "isDefault": false})
    );

    let duplicate = helpers::json(
        &app,
        "POST",
        "/api/categories",
        None,
        json!({"name": "  guisos DE cuchara "}),
    )
    .await?;
    assert_eq!(duplicate.status, StatusCode::CONFLICT);

    let shadowing_default =
        helpers::json(&app, "POST", "/api/categories", None, json!({"name": "Sopas"})).await?;
    assert_eq!(shadowing_default.status, StatusCode::CONFLICT);

    let blank = helpers::json(&app, "POST", "/api/categories", None, json!({"name": "  "})).await?;
    assert_eq!(blank.status, StatusCode::BAD_REQUEST);

    let listed = helpers::get(&app, "/api/categories", None).await?;
    let slugs: Vec<&str> = listed
        .body
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["slug"].as_str().unwrap())
        .collect();
    assert_eq!(slugs.len(), 8);
    assert_eq!(slugs.last(), Some(&"guisos-de-cuchara"));

    let other = helpers::get(&app, "/api/categories", Some("bruno")).await?;
    assert_eq!(other.body.as_array().unwrap().len(), 7);

    let forbidden = helpers::delete(&app, "/api/categories/postres", None).await?;
    assert_eq!(forbidden.status, StatusCode::FORBIDDEN);

    let forbidden = helpers::delete(&app, "/api/categories/Postres", None).await?;
    assert_eq!(forbidden.status, StatusCode::FORBIDDEN);

    let removed = helpers::delete(&app, "/api/categories?slug=guisos-de-cuchara", None).await?;
    assert_eq!(removed.status, StatusCode::OK);

    let listed = helpers::get(&app, "/api/categories", None).await?;
    assert_eq!(listed.body.as_array().unwrap().len(), 7);

    let missing = helpers::delete(&app, "/api/categories/guisos-de-cuchara", None).await?;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);

    let no_slug = helpers::delete(&app, "/api/categories", None).await?;
    assert_eq!(no_slug.status, StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
pub async fn test_favorites() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let app = helpers::setup_app(dir.child("db.sqlite3"), None).await?;

    let created =
        helpers::json(&app, "POST", "/api/recipes", None, json!({"title": "Pisto"})).await?;
    let id = created.body["id"].as_str().unwrap().to_owned();

    let on = helpers::json(&app, "POST", "/api/favorites", None, json!({"recipeId": id})).await?;
    assert_eq!(on.status, StatusCode::OK);
    assert_eq!(on.body, json!({"favorited": true, "favorites": 1}));

    let listed = helpers::get(&app, "/api/favorites", None).await?;
    assert_eq!(listed.body[0]["id"], json!(id));

    let off = helpers::json(&app, "POST", "/api/favorites", None, json!({"recipeId": id})).await?;
    assert_eq!(off.body, json!({"favorited": false, "favorites": 0}));

    let listed = helpers::get(&app, "/api/favorites", None).await?;
    assert_eq!(listed.body, json!([]));

    let missing = helpers::json(
        &app,
        "POST",
        "/api/favorites",
        None,
        json!({"recipeId": "missing"}),
    )
    .await?;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);

    Ok(())
}
