//! DTOs for recipes_sea adapter.

#[derive(Debug, Clone)]
pub struct RecipeCreate {
    pub author: String,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct RecipeUpdate {
    pub id: i64,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
    pub updated_at: time::OffsetDateTime,
}
