pub mod authors;
pub mod ownership;
pub mod recipes;
pub mod validation;
