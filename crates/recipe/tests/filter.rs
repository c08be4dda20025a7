use recipebook_recipe::{CreateInput, Difficulty, RecipeFilter};
use temp_dir::TempDir;

mod helpers;

async fn seed(state: &helpers::TestState) -> anyhow::Result<()> {
    let recipes = [
        CreateInput {
            category: Some("postres".to_owned()),
            difficulty: Difficulty::Facil,
            tags: vec!["dulce".to_owned()],
            rating: 4.0,
            ..helpers::input("Flan")
        },
        CreateInput {
            category: Some("sopas".to_owned()),
            difficulty: Difficulty::Medio,
            tags: vec!["caliente".to_owned()],
            prep_time: "30 min".to_owned(),
            cook_time: "90 min".to_owned(),
            rating: 3.0,
            ..helpers::input("Caldo gallego")
        },
        CreateInput {
            category: Some("postres".to_owned()),
            difficulty: Difficulty::Dificil,
            tags: vec!["dulce".to_owned(), "horno".to_owned()],
            rating: 5.0,
            ..helpers::input("Tarta de queso")
        },
    ];

    for input in recipes {
        state.command.create("ana", input).await?;
    }

    state
        .command
        .create("bruno", helpers::input("Flan de bruno"))
        .await?;

    Ok(())
}

fn titles(recipes: Vec<recipebook_recipe::Recipe>) -> Vec<String> {
    let mut titles: Vec<String> = recipes.into_iter().map(|r| r.title).collect();
    titles.sort();
    titles
}

#[tokio::test]
pub async fn test_filter() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    seed(&state).await?;

    let all = state.query.filter("ana", &RecipeFilter::default()).await?;
    assert_eq!(all.len(), 3);

    let found = state
        .query
        .filter(
            "ana",
            &RecipeFilter {
                search: Some("FLAN".to_owned()),
                ..Default::default()
            },
        )
        .await?;
    assert_eq!(titles(found), vec!["Flan"]);

    let found = state
        .query
        .filter(
            "ana",
            &RecipeFilter {
                category: Some("Postres".to_owned()),
                min_rating: Some(4.5),
                ..Default::default()
            },
        )
        .await?;
    assert_eq!(titles(found), vec!["Tarta de queso"]);

    let found = state
        .query
        .filter(
            "ana",
            &RecipeFilter {
                tags: vec!["Dulce".to_owned()],
                difficulty: Some(Difficulty::Facil),
                ..Default::default()
            },
        )
        .await?;
    assert_eq!(titles(found), vec!["Flan"]);

    let found = state
        .query
        .filter(
            "ana",
            &RecipeFilter {
                max_total_time: Some(60),
                ..Default::default()
            },
        )
        .await?;
    assert_eq!(titles(found), vec!["Flan", "Tarta de queso"]);

    let found = state
        .query
        .filter(
            "ana",
            &RecipeFilter {
                search: Some("harina".to_owned()),
                category: Some("sopas".to_owned()),
                ..Default::default()
            },
        )
        .await?;
    assert_eq!(titles(found), vec!["Caldo gallego"]);

    Ok(())
}

#[tokio::test]
pub async fn test_tags_are_listed_per_owner() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    seed(&state).await?;

    assert_eq!(state.query.tags("ana").await?, vec!["caliente", "dulce", "horno"]);
    assert!(state.query.tags("bruno").await?.is_empty());

    Ok(())
}

#[tokio::test]
pub async fn test_tags_keep_each_owner_spelling() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;

    let ana = state
        .command
        .create(
            "ana",
            CreateInput {
                tags: vec!["Sin Gluten".to_owned()],
                ..helpers::input("Bizcocho")
            },
        )
        .await?;
    let bruno = state
        .command
        .create(
            "bruno",
            CreateInput {
                tags: vec!["sin gluten".to_owned()],
                ..helpers::input("Galletas")
            },
        )
        .await?;

    assert_eq!(ana.tags, vec!["Sin Gluten"]);
    assert_eq!(bruno.tags, vec!["sin gluten"]);
    assert_eq!(state.query.tags("ana").await?, vec!["Sin Gluten"]);
    assert_eq!(state.query.tags("bruno").await?, vec!["sin gluten"]);

    let filter = RecipeFilter {
        tags: vec!["SIN  GLUTEN".to_owned()],
        ..Default::default()
    };
    let found = state.query.filter("bruno", &filter).await?;
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, bruno.id);

    Ok(())
}
