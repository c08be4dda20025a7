use recipebook_db::SYSTEM_OWNER;

use crate::slugify;

impl crate::Command {
    /// Inserts the default categories that are missing. Safe to run on
    /// every start.
    pub async fn seed_default_categories(&self) -> crate::Result<()> {
        let mut tx = self.write_db.begin().await?;

        for name in super::DEFAULT_CATEGORIES {
            super::insert(&mut tx, SYSTEM_OWNER, name, &slugify(name), true, true).await?;
        }

        tx.commit().await?;

        tracing::info!(count = super::DEFAULT_CATEGORIES.len(), "default categories seeded");

        Ok(())
    }
}
