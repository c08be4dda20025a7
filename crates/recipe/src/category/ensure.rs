use crate::slugify;

impl crate::Command {
    /// Returns the slug for `name`, creating a user category when no
    /// visible category has it yet. Blank names yield `None`.
    pub async fn ensure_category(&self, owner_id: &str, name: &str) -> crate::Result<Option<String>> {
        let name = name.trim();
        let slug = slugify(name);
        if slug.is_empty() {
            return Ok(None);
        }

        let mut tx = self.write_db.begin().await?;

        if super::find_visible(&mut tx, owner_id, &slug).await?.is_none() {
            super::insert(&mut tx, owner_id, name, &slug, false, true).await?;
            tracing::info!(%slug, "category created on demand");
        }

        tx.commit().await?;

        Ok(Some(slug))
    }
}
