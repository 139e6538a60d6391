mod memory;
mod sqlite;
mod types;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;
pub use types::{NewRecipe, NewUser, Recipe, RecipePatch, User};

use async_trait::async_trait;

/// Capability interface over user and recipe persistence. Handlers only ever
/// see an `Arc<dyn EntityStore>`; the backend behind it is picked by
/// configuration.
///
/// Callers receive owned rows, never handles into storage. Every mutating
/// call is atomic: either the row is fully written, updated or removed, or
/// nothing changed.
#[async_trait]
pub trait EntityStore: Send + Sync {
    async fn create_user(&self, new: NewUser) -> anyhow::Result<User>;
    async fn find_user_by_username(&self, username: &str) -> anyhow::Result<Option<User>>;
    async fn find_user_by_email(&self, email: &str) -> anyhow::Result<Option<User>>;
    async fn find_user_by_id(&self, id: i64) -> anyhow::Result<Option<User>>;
    /// All users, id-ascending.
    async fn list_users(&self) -> anyhow::Result<Vec<User>>;
    async fn count_users(&self) -> anyhow::Result<i64>;

    async fn create_recipe(&self, new: NewRecipe) -> anyhow::Result<Recipe>;
    async fn find_recipe_by_id(&self, id: i64) -> anyhow::Result<Option<Recipe>>;
    /// All recipes, id-ascending.
    async fn list_recipes(&self) -> anyhow::Result<Vec<Recipe>>;
    async fn count_recipes(&self) -> anyhow::Result<i64>;
    /// Merges the `Some` fields of the patch over the stored row. `None` when
    /// the id is unknown.
    async fn update_recipe(&self, id: i64, patch: RecipePatch) -> anyhow::Result<Option<Recipe>>;
    /// Removes the row and returns it, so callers can reference the deleted
    /// title. `None` when the id is unknown.
    async fn delete_recipe(&self, id: i64) -> anyhow::Result<Option<Recipe>>;
}
