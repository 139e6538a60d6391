use std::str::FromStr;

/// Which `EntityStore` backend serves this process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Sqlite,
    Memory,
}

impl FromStr for StoreBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sqlite" => Ok(Self::Sqlite),
            "memory" => Ok(Self::Memory),
            other => anyhow::bail!("unknown store backend: {other}"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub backend: StoreBackend,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url =
            std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://recetas.db".into());
        let backend = std::env::var("STORE_BACKEND")
            .unwrap_or_else(|_| "sqlite".into())
            .parse()?;
        Ok(Self {
            database_url,
            backend,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_parses_known_names() {
        assert_eq!("sqlite".parse::<StoreBackend>().unwrap(), StoreBackend::Sqlite);
        assert_eq!("memory".parse::<StoreBackend>().unwrap(), StoreBackend::Memory);
    }

    #[test]
    fn backend_rejects_unknown_names() {
        assert!("postgres".parse::<StoreBackend>().is_err());
    }
}
