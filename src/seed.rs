use tracing::{error, info};

use crate::auth::password::hash_password;
use crate::store::{EntityStore, NewRecipe, NewUser};

/// Ensures the default user and the two example recipes exist. Runs before
/// the first request is served and is a no-op on a non-empty store. A failure
/// may leave the store partially seeded; that is logged and the process keeps
/// starting.
pub async fn seed_example_data(store: &dyn EntityStore) {
    if let Err(e) = try_seed(store).await {
        error!(error = %e, "seeding example data failed; continuing");
    }
}

async fn try_seed(store: &dyn EntityStore) -> anyhow::Result<()> {
    if store.count_users().await? == 0 {
        let digest = hash_password("admin123")?;
        let user = store
            .create_user(NewUser {
                username: "admin".into(),
                email: "admin@recetas.com".into(),
                password: digest,
                phone: 123_456_789,
            })
            .await?;
        info!(user_id = user.id, "default user created");
    }

    if store.count_recipes().await? == 0 {
        let autor_id = store.list_users().await?.first().map_or(1, |u| u.id);

        store
            .create_recipe(NewRecipe {
                titulo: "Pasta al Pesto".into(),
                descripcion: "Pasta con salsa pesto casera".into(),
                ingredientes: "Pasta, Albahaca, Ajo, Piñones, Aceite de oliva, Queso parmesano"
                    .into(),
                pasos_preparacion: "1. Cocer la pasta al dente\n\
                                    2. Preparar el pesto mezclando albahaca, ajo, piñones y aceite\n\
                                    3. Mezclar la pasta con el pesto y servir con queso parmesano"
                    .into(),
                autor_id,
            })
            .await?;

        store
            .create_recipe(NewRecipe {
                titulo: "Ensalada Mediterránea".into(),
                descripcion: "Ensalada fresca con ingredientes del mediterráneo".into(),
                ingredientes:
                    "Tomate, Pepino, Aceitunas, Queso feta, Cebolla roja, Aceite de oliva, Limón"
                        .into(),
                pasos_preparacion: "1. Cortar tomate y pepino en cubos\n\
                                    2. Picar cebolla roja finamente\n\
                                    3. Mezclar todos los ingredientes\n\
                                    4. Aliñar con aceite de oliva y jugo de limón"
                    .into(),
                autor_id,
            })
            .await?;

        info!("example recipes created");
    }

    Ok(())
}
