use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

use crate::filter::leading_minutes;

#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Default,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Facil,
    #[default]
    Medio,
    Dificil,
}

impl Difficulty {
    /// Lenient parse for free text coming from forms or model output.
    ///
    /// Accepts the canonical values, their accented spelling and the usual
    /// English words.
    pub fn from_loose(value: &str) -> Option<Self> {
        let value: String = value
            .trim()
            .to_lowercase()
            .chars()
            .map(|c| match c {
                'á' => 'a',
                'é' => 'e',
                'í' => 'i',
                'ó' => 'o',
                'ú' => 'u',
                c => c,
            })
            .collect();

        match value.as_str() {
            "facil" | "easy" | "simple" | "baja" => Some(Self::Facil),
            "medio" | "media" | "intermedio" | "medium" | "moderate" => Some(Self::Medio),
            "dificil" | "hard" | "difficult" | "alta" | "avanzado" => Some(Self::Dificil),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub item: String,
    #[serde(default)]
    pub quantity: String,
}

impl Ingredient {
    pub fn new(item: impl Into<String>, quantity: impl Into<String>) -> Self {
        Self {
            item: item.into(),
            quantity: quantity.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,
    pub owner_id: String,
    pub title: String,
    pub description: String,
    pub prep_time: String,
    pub cook_time: String,
    pub servings: u16,
    pub difficulty: Difficulty,
    pub category: Option<String>,
    pub temperature: Option<String>,
    pub ingredients: Vec<Ingredient>,
    pub instructions: Vec<String>,
    pub tags: Vec<String>,
    pub image_url: Option<String>,
    pub rating: f64,
    pub favorites: i64,
    pub created_at: i64,
    pub updated_at: Option<i64>,
}

impl Recipe {
    /// Prep plus cook time in minutes, reading the leading number of each
    /// free-text field.
    pub fn total_minutes(&self) -> u32 {
        leading_minutes(&self.prep_time).saturating_add(leading_minutes(&self.cook_time))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub name: String,
    pub slug: String,
    pub is_default: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteState {
    pub favorited: bool,
    pub favorites: i64,
}
