use recipebook_recipe::{Error, category::CreateCategoryInput, category::DEFAULT_CATEGORIES};
use temp_dir::TempDir;

mod helpers;

#[tokio::test]
pub async fn test_defaults_are_seeded_once() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;

    state.command.seed_default_categories().await?;

    let categories = state.query.categories("ana").await?;
    assert_eq!(categories.len(), DEFAULT_CATEGORIES.len());
    assert!(categories.iter().all(|c| c.is_default));
    assert!(categories.iter().any(|c| c.slug == "platos-principales"));

    Ok(())
}

#[tokio::test]
pub async fn test_create_and_delete_category() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;

    let created = state
        .command
        .create_category(
            "ana",
            CreateCategoryInput {
                name: " Comida Rápida ".to_owned(),
            },
        )
        .await?;
    assert_eq!(created.name, "Comida Rápida");
    assert_eq!(created.slug, "comida-rápida");

    let categories = state.query.categories("ana").await?;
    assert_eq!(categories.len(), DEFAULT_CATEGORIES.len() + 1);
    assert_eq!(categories.last().map(|c| c.slug.as_str()), Some("comida-rápida"));
    assert_eq!(
        state.query.categories("bruno").await?.len(),
        DEFAULT_CATEGORIES.len()
    );

    let err = state
        .command
        .create_category(
            "ana",
            CreateCategoryInput {
                name: "comida   rápida".to_owned(),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Conflict(_)));

    state
        .command
        .create_category(
            "bruno",
            CreateCategoryInput {
                name: "Comida rápida".to_owned(),
            },
        )
        .await?;

    state.command.delete_category("ana", "Comida  Rápida").await?;
    assert!(state.query.category("ana", "comida-rápida").await?.is_none());
    assert!(state.query.category("bruno", "comida-rápida").await?.is_some());

    let err = state
        .command
        .delete_category("ana", "comida-rápida")
        .await
        .unwrap_err();
    assert!(matches!(err, Error::NotFound));

    Ok(())
}

#[tokio::test]
pub async fn test_default_category_rules() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;

    let err = state
        .command
        .create_category(
            "ana",
            CreateCategoryInput {
                name: "POSTRES".to_owned(),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Conflict(_)));

    let err = state
        .command
        .delete_category("ana", "postres")
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Forbidden(_)));
    assert!(state.query.category("ana", "postres").await?.is_some());

    let err = state
        .command
        .delete_category("ana", " Postres ")
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Forbidden(_)));

    Ok(())
}

#[tokio::test]
pub async fn test_ensure_category() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;

    assert_eq!(state.command.ensure_category("ana", "  ").await?, None);
    assert_eq!(
        state.command.ensure_category("ana", "Sopas").await?.as_deref(),
        Some("sopas")
    );
    assert_eq!(
        state.command.ensure_category("ana", "Guisos caseros").await?.as_deref(),
        Some("guisos-caseros")
    );
    assert_eq!(
        state.command.ensure_category("ana", "guisos caseros").await?.as_deref(),
        Some("guisos-caseros")
    );

    let categories = state.query.categories("ana").await?;
    assert_eq!(categories.len(), DEFAULT_CATEGORIES.len() + 1);

    Ok(())
}
