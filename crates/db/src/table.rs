use sea_query::Iden;

#[derive(Iden, Clone, Copy)]
pub enum Recipe {
    Table,
    Id,
    OwnerId,
    Title,
    Description,
    PrepTime,
    CookTime,
    Servings,
    Difficulty,
    Category,
    Temperature,
    ImageUrl,
    Rating,
    Favorites,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden, Clone, Copy)]
pub enum RecipeIngredient {
    Table,
    RecipeId,
    Position,
    Item,
    Quantity,
}

#[derive(Iden, Clone, Copy)]
pub enum RecipeInstruction {
    Table,
    RecipeId,
    Position,
    Body,
}

#[derive(Iden, Clone, Copy)]
pub enum Tag {
    Table,
    Id,
    OwnerId,
    Name,
    Slug,
    CreatedAt,
}

#[derive(Iden, Clone, Copy)]
pub enum RecipeTag {
    Table,
    RecipeId,
    TagId,
    Position,
}

#[derive(Iden, Clone, Copy)]
pub enum Category {
    Table,
    Id,
    OwnerId,
    Name,
    Slug,
    IsDefault,
    CreatedAt,
}

#[derive(Iden, Clone, Copy)]
pub enum Favorite {
    Table,
    RecipeId,
    UserId,
    CreatedAt,
}
