pub mod authors;
pub mod recipes;

pub use authors::Entity as Authors;
pub use authors::Model as Author;
pub use recipes::Entity as Recipes;
pub use recipes::Model as Recipe;
pub use recipes::StringList;
