use serde::Deserialize;
use validator::Validate;

use crate::{Category, Error, invalid, slugify};

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCategoryInput {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
}

impl crate::Command {
    /// Adds a user category. The slug must not collide with a default
    /// category or another category of the same user.
    #[tracing::instrument(skip(self, input), fields(name = %input.name))]
    pub async fn create_category(
        &self,
        owner_id: &str,
        input: CreateCategoryInput,
    ) -> crate::Result<Category> {
        let input = CreateCategoryInput {
            name: input.name.trim().to_owned(),
        };

        input.validate()?;

        let slug = slugify(&input.name);
        if slug.is_empty() {
            invalid!("category name is empty");
        }

        let mut tx = self.write_db.begin().await?;

        if super::find_visible(&mut tx, owner_id, &slug).await?.is_some() {
            return Err(Error::Conflict(format!("category '{slug}' already exists")));
        }

        match super::insert(&mut tx, owner_id, &input.name, &slug, false, false).await {
            Ok(()) => {}
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                return Err(Error::Conflict(format!("category '{slug}' already exists")));
            }
            Err(e) => return Err(e.into()),
        }

        tx.commit().await?;

        tracing::info!(%slug, "category created");

        Ok(Category {
            name: input.name,
            slug,
            is_default: false,
        })
    }
}
