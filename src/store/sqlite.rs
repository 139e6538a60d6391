use std::str::FromStr;

use anyhow::Context;
use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::store::{EntityStore, NewRecipe, NewUser, Recipe, RecipePatch, User};

/// File-backed store on SQLite. The database file is created on first run.
#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    pub async fn connect(url: &str) -> anyhow::Result<Self> {
        let options = SqliteConnectOptions::from_str(url)
            .context("parse database url")?
            .create_if_missing(true)
            // Per the schema design the foreign_keys pragma stays off: recipes
            // may reference an author id that does not (yet) exist. sqlx turns
            // it on by default, so disable it explicitly.
            .foreign_keys(false);

        let pool = SqlitePoolOptions::new()
            .max_connections(10)
            .connect_with(options)
            .await
            .context("connect to database")?;

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .context("run migrations")?;

        Ok(Self { pool })
    }
}

#[async_trait]
impl EntityStore for SqliteStore {
    async fn create_user(&self, new: NewUser) -> anyhow::Result<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO usuarios (username, email, password, phone)
            VALUES (?, ?, ?, ?)
            RETURNING id, username, email, password, phone
            "#,
        )
        .bind(&new.username)
        .bind(&new.email)
        .bind(&new.password)
        .bind(new.phone)
        .fetch_one(&self.pool)
        .await?;
        Ok(user)
    }

    async fn find_user_by_username(&self, username: &str) -> anyhow::Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, email, password, phone
            FROM usuarios
            WHERE username = ?
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    async fn find_user_by_email(&self, email: &str) -> anyhow::Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, email, password, phone
            FROM usuarios
            WHERE email = ?
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    async fn find_user_by_id(&self, id: i64) -> anyhow::Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, email, password, phone
            FROM usuarios
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    async fn list_users(&self) -> anyhow::Result<Vec<User>> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, email, password, phone
            FROM usuarios
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(users)
    }

    async fn count_users(&self) -> anyhow::Result<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM usuarios")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    async fn create_recipe(&self, new: NewRecipe) -> anyhow::Result<Recipe> {
        let recipe = sqlx::query_as::<_, Recipe>(
            r#"
            INSERT INTO recetas (titulo, descripcion, ingredientes, pasos_preparacion, autor_id)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id, titulo, descripcion, ingredientes, pasos_preparacion, autor_id
            "#,
        )
        .bind(&new.titulo)
        .bind(&new.descripcion)
        .bind(&new.ingredientes)
        .bind(&new.pasos_preparacion)
        .bind(new.autor_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(recipe)
    }

    async fn find_recipe_by_id(&self, id: i64) -> anyhow::Result<Option<Recipe>> {
        let recipe = sqlx::query_as::<_, Recipe>(
            r#"
            SELECT id, titulo, descripcion, ingredientes, pasos_preparacion, autor_id
            FROM recetas
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(recipe)
    }

    async fn list_recipes(&self) -> anyhow::Result<Vec<Recipe>> {
        let recipes = sqlx::query_as::<_, Recipe>(
            r#"
            SELECT id, titulo, descripcion, ingredientes, pasos_preparacion, autor_id
            FROM recetas
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(recipes)
    }

    async fn count_recipes(&self) -> anyhow::Result<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM recetas")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    async fn update_recipe(&self, id: i64, patch: RecipePatch) -> anyhow::Result<Option<Recipe>> {
        // Single statement; COALESCE keeps the stored value for absent fields.
        let recipe = sqlx::query_as::<_, Recipe>(
            r#"
            UPDATE recetas SET
                titulo = COALESCE(?, titulo),
                descripcion = COALESCE(?, descripcion),
                ingredientes = COALESCE(?, ingredientes),
                pasos_preparacion = COALESCE(?, pasos_preparacion)
            WHERE id = ?
            RETURNING id, titulo, descripcion, ingredientes, pasos_preparacion, autor_id
            "#,
        )
        .bind(patch.titulo)
        .bind(patch.descripcion)
        .bind(patch.ingredientes)
        .bind(patch.pasos_preparacion)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(recipe)
    }

    async fn delete_recipe(&self, id: i64) -> anyhow::Result<Option<Recipe>> {
        let recipe = sqlx::query_as::<_, Recipe>(
            r#"
            DELETE FROM recetas
            WHERE id = ?
            RETURNING id, titulo, descripcion, ingredientes, pasos_preparacion, autor_id
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(recipe)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // A single connection keeps the in-memory database alive and shared.
    async fn memory_backed() -> SqliteStore {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")
            .expect("parse url")
            .foreign_keys(false);
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await
            .expect("connect in-memory sqlite");
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .expect("run migrations");
        SqliteStore { pool }
    }

    fn sample_recipe(titulo: &str) -> NewRecipe {
        NewRecipe {
            titulo: titulo.into(),
            descripcion: "una receta".into(),
            ingredientes: "Agua, Sal".into(),
            pasos_preparacion: "1. Mezclar".into(),
            autor_id: 1,
        }
    }

    #[tokio::test]
    async fn creates_database_file_on_first_connect() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("recetas.db");
        let url = format!("sqlite://{}", path.display());

        let store = SqliteStore::connect(&url).await.expect("connect");
        assert!(path.exists());
        assert_eq!(store.count_users().await.expect("count"), 0);
    }

    #[tokio::test]
    async fn user_ids_are_assigned_ascending() {
        let store = memory_backed().await;
        let a = store
            .create_user(NewUser {
                username: "ana".into(),
                email: "ana@x.com".into(),
                password: "digest-a".into(),
                phone: 1,
            })
            .await
            .expect("create ana");
        let b = store
            .create_user(NewUser {
                username: "bob".into(),
                email: "bob@x.com".into(),
                password: "digest-b".into(),
                phone: 2,
            })
            .await
            .expect("create bob");
        assert!(b.id > a.id);

        let users = store.list_users().await.expect("list");
        let ids: Vec<i64> = users.iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![a.id, b.id]);
    }

    #[tokio::test]
    async fn duplicate_username_is_rejected_by_constraint() {
        let store = memory_backed().await;
        store
            .create_user(NewUser {
                username: "ana".into(),
                email: "ana@x.com".into(),
                password: "digest".into(),
                phone: 1,
            })
            .await
            .expect("first insert");
        let err = store
            .create_user(NewUser {
                username: "ana".into(),
                email: "otra@x.com".into(),
                password: "digest".into(),
                phone: 2,
            })
            .await;
        assert!(err.is_err());
        assert_eq!(store.count_users().await.expect("count"), 1);
    }

    #[tokio::test]
    async fn update_merges_only_present_fields() {
        let store = memory_backed().await;
        let created = store
            .create_recipe(sample_recipe("Gazpacho"))
            .await
            .expect("create");

        let updated = store
            .update_recipe(
                created.id,
                RecipePatch {
                    descripcion: Some("sopa fría".into()),
                    ..Default::default()
                },
            )
            .await
            .expect("update")
            .expect("row exists");

        assert_eq!(updated.titulo, "Gazpacho");
        assert_eq!(updated.descripcion, "sopa fría");
        assert_eq!(updated.ingredientes, created.ingredientes);
        assert_eq!(updated.pasos_preparacion, created.pasos_preparacion);
    }

    #[tokio::test]
    async fn update_unknown_id_returns_none() {
        let store = memory_backed().await;
        let result = store
            .update_recipe(42, RecipePatch::default())
            .await
            .expect("update");
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn delete_returns_removed_row_once() {
        let store = memory_backed().await;
        let created = store
            .create_recipe(sample_recipe("Tortilla"))
            .await
            .expect("create");

        let removed = store
            .delete_recipe(created.id)
            .await
            .expect("delete")
            .expect("row existed");
        assert_eq!(removed.titulo, "Tortilla");
        assert_eq!(store.count_recipes().await.expect("count"), 0);

        let again = store.delete_recipe(created.id).await.expect("delete");
        assert!(again.is_none());
    }
}
