use recipebook_recipe::{Difficulty, Ingredient, normalize_tags};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Recipe fields recovered from a photo. Every field may be blank; nothing
/// here has been validated yet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecipeDraft {
    pub title: String,
    pub description: String,
    pub prep_time: String,
    pub cook_time: String,
    pub servings: Option<u16>,
    pub difficulty: Option<Difficulty>,
    pub category: String,
    pub temperature: String,
    pub ingredients: Vec<Ingredient>,
    pub instructions: Vec<String>,
    pub tags: Vec<String>,
}

fn text(value: &Value) -> String {
    match value {
        Value::String(s) => s.trim().to_owned(),
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    }
}

fn servings(value: &Value) -> Option<u16> {
    let n = match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s
            .trim()
            .chars()
            .take_while(char::is_ascii_digit)
            .collect::<String>()
            .parse()
            .ok(),
        _ => None,
    }?;

    u16::try_from(n).ok().filter(|n| *n > 0)
}

fn ingredient(value: &Value) -> Option<Ingredient> {
    let ingredient = match value {
        Value::String(s) => Ingredient::new(s.trim(), ""),
        Value::Object(o) => Ingredient::new(
            o.get("item").or_else(|| o.get("name")).map(text).unwrap_or_default(),
            o.get("quantity").or_else(|| o.get("amount")).map(text).unwrap_or_default(),
        ),
        _ => return None,
    };

    Some(ingredient).filter(|i| !i.item.is_empty())
}

fn instruction(value: &Value) -> Option<String> {
    let step = match value {
        Value::Object(o) => o.get("text").map(text).unwrap_or_default(),
        other => text(other),
    };

    Some(step).filter(|s| !s.is_empty())
}

fn fill<T: Default + PartialEq>(current: T, extracted: T) -> T {
    if current == T::default() { extracted } else { current }
}

impl RecipeDraft {
    /// Lenient mapping of a model reply. Missing or wrong-typed fields stay
    /// blank instead of failing the whole extraction.
    pub fn from_value(value: &Value) -> Self {
        let field = move |key: &str| value.get(key).map(text).unwrap_or_default();
        let list = move |key: &str| {
            value
                .get(key)
                .and_then(Value::as_array)
                .map(Vec::as_slice)
                .unwrap_or_default()
        };

        Self {
            title: field("title"),
            description: field("description"),
            prep_time: field("prepTime"),
            cook_time: field("cookTime"),
            servings: value.get("servings").and_then(servings),
            difficulty: value
                .get("difficulty")
                .and_then(Value::as_str)
                .and_then(Difficulty::from_loose),
            category: field("category"),
            temperature: field("temperature"),
            ingredients: list("ingredients").iter().filter_map(ingredient).collect(),
            instructions: list("instructions").iter().filter_map(instruction).collect(),
            tags: normalize_tags(list("tags").iter().map(text)),
        }
    }

    /// Completes `form` with what was extracted. Fields the user already
    /// filled in are kept as they are.
    pub fn merge_into(self, form: RecipeDraft) -> RecipeDraft {
        RecipeDraft {
            title: fill(form.title, self.title),
            description: fill(form.description, self.description),
            prep_time: fill(form.prep_time, self.prep_time),
            cook_time: fill(form.cook_time, self.cook_time),
            servings: form.servings.or(self.servings),
            difficulty: form.difficulty.or(self.difficulty),
            category: fill(form.category, self.category),
            temperature: fill(form.temperature, self.temperature),
            ingredients: fill(form.ingredients, self.ingredients),
            instructions: fill(form.instructions, self.instructions),
            tags: fill(form.tags, self.tags),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn maps_a_well_formed_reply() {
        let draft = RecipeDraft::from_value(&json!({
            "title": " Lentejas ",
            "prepTime": 15,
            "cookTime": "45 min",
            "servings": "4 personas",
            "difficulty": "Fácil",
            "category": "Platos principales",
            "ingredients": [
                {"item": "lentejas", "quantity": "300 g"},
                "sal",
                {"quantity": "1"}
            ],
            "instructions": ["Remojar", {"text": "Cocer"}, ""],
            "tags": ["legumbres", "Legumbres", " "]
        }));

        assert_eq!(draft.title, "Lentejas");
        assert_eq!(draft.prep_time, "15");
        assert_eq!(draft.cook_time, "45 min");
        assert_eq!(draft.servings, Some(4));
        assert_eq!(draft.difficulty, Some(Difficulty::Facil));
        assert_eq!(draft.category, "Platos principales");
        assert_eq!(
            draft.ingredients,
            vec![Ingredient::new("lentejas", "300 g"), Ingredient::new("sal", "")]
        );
        assert_eq!(draft.instructions, vec!["Remojar", "Cocer"]);
        assert_eq!(draft.tags, vec!["legumbres"]);
    }

    #[test]
    fn wrong_types_are_left_blank() {
        let draft = RecipeDraft::from_value(&json!({
            "title": ["no"],
            "servings": -2,
            "difficulty": "imposible",
            "ingredients": "harina, agua",
            "tags": {"a": 1}
        }));

        assert_eq!(draft, RecipeDraft::default());
    }

    #[test]
    fn merge_keeps_user_input() {
        let extracted = RecipeDraft {
            title: "Sopa de ajo".to_owned(),
            description: "Clásica".to_owned(),
            servings: Some(2),
            instructions: vec!["Freír el ajo".to_owned()],
            ..Default::default()
        };
        let form = RecipeDraft {
            title: "Mi sopa".to_owned(),
            servings: Some(6),
            ..Default::default()
        };

        let merged = extracted.merge_into(form);

        assert_eq!(merged.title, "Mi sopa");
        assert_eq!(merged.description, "Clásica");
        assert_eq!(merged.servings, Some(6));
        assert_eq!(merged.instructions, vec!["Freír el ajo"]);
    }
}
