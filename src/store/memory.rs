use std::collections::BTreeMap;

use anyhow::bail;
use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::store::{EntityStore, NewRecipe, NewUser, Recipe, RecipePatch, User};

/// Non-persistent backend with the same semantics as the SQLite store.
/// BTreeMap keys give the id-ascending iteration order the listings require.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
    users: BTreeMap<i64, User>,
    recipes: BTreeMap<i64, Recipe>,
    next_user_id: i64,
    next_recipe_id: i64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EntityStore for MemoryStore {
    async fn create_user(&self, new: NewUser) -> anyhow::Result<User> {
        let mut inner = self.inner.write().await;
        if inner
            .users
            .values()
            .any(|u| u.username == new.username || u.email == new.email)
        {
            bail!("username or email already exists");
        }
        inner.next_user_id += 1;
        let user = User {
            id: inner.next_user_id,
            username: new.username,
            email: new.email,
            password: new.password,
            phone: new.phone,
        };
        inner.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn find_user_by_username(&self, username: &str) -> anyhow::Result<Option<User>> {
        let inner = self.inner.read().await;
        Ok(inner
            .users
            .values()
            .find(|u| u.username == username)
            .cloned())
    }

    async fn find_user_by_email(&self, email: &str) -> anyhow::Result<Option<User>> {
        let inner = self.inner.read().await;
        Ok(inner.users.values().find(|u| u.email == email).cloned())
    }

    async fn find_user_by_id(&self, id: i64) -> anyhow::Result<Option<User>> {
        let inner = self.inner.read().await;
        Ok(inner.users.get(&id).cloned())
    }

    async fn list_users(&self) -> anyhow::Result<Vec<User>> {
        let inner = self.inner.read().await;
        Ok(inner.users.values().cloned().collect())
    }

    async fn count_users(&self) -> anyhow::Result<i64> {
        let inner = self.inner.read().await;
        Ok(inner.users.len() as i64)
    }

    async fn create_recipe(&self, new: NewRecipe) -> anyhow::Result<Recipe> {
        let mut inner = self.inner.write().await;
        inner.next_recipe_id += 1;
        let recipe = Recipe {
            id: inner.next_recipe_id,
            titulo: new.titulo,
            descripcion: new.descripcion,
            ingredientes: new.ingredientes,
            pasos_preparacion: new.pasos_preparacion,
            autor_id: new.autor_id,
        };
        inner.recipes.insert(recipe.id, recipe.clone());
        Ok(recipe)
    }

    async fn find_recipe_by_id(&self, id: i64) -> anyhow::Result<Option<Recipe>> {
        let inner = self.inner.read().await;
        Ok(inner.recipes.get(&id).cloned())
    }

    async fn list_recipes(&self) -> anyhow::Result<Vec<Recipe>> {
        let inner = self.inner.read().await;
        Ok(inner.recipes.values().cloned().collect())
    }

    async fn count_recipes(&self) -> anyhow::Result<i64> {
        let inner = self.inner.read().await;
        Ok(inner.recipes.len() as i64)
    }

    async fn update_recipe(&self, id: i64, patch: RecipePatch) -> anyhow::Result<Option<Recipe>> {
        let mut inner = self.inner.write().await;
        let Some(recipe) = inner.recipes.get_mut(&id) else {
            return Ok(None);
        };
        if let Some(titulo) = patch.titulo {
            recipe.titulo = titulo;
        }
        if let Some(descripcion) = patch.descripcion {
            recipe.descripcion = descripcion;
        }
        if let Some(ingredientes) = patch.ingredientes {
            recipe.ingredientes = ingredientes;
        }
        if let Some(pasos) = patch.pasos_preparacion {
            recipe.pasos_preparacion = pasos;
        }
        Ok(Some(recipe.clone()))
    }

    async fn delete_recipe(&self, id: i64) -> anyhow::Result<Option<Recipe>> {
        let mut inner = self.inner.write().await;
        Ok(inner.recipes.remove(&id))
    }
}
