use serde::Deserialize;

use crate::domain::ports::StoreRepository;
use crate::error::AppError;

/// A store identifier as clients send it: an id, a numeric string, or a name.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum StoreRef {
    Id(i64),
    Text(String),
}

fn is_numeric(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

async fn find_by_id(repo: &dyn StoreRepository, id: Option<i64>, shown: &str) -> Result<i64, AppError> {
    let found = match id {
        Some(id) => repo.find_by_id(id).await?,
        None => None,
    };
    found
        .map(|store| store.id)
        .ok_or_else(|| AppError::StoreNotFound(format!("Store with ID '{}' does not exist.", shown)))
}

pub async fn resolve_store(repo: &dyn StoreRepository, store: &StoreRef) -> Result<i64, AppError> {
    match store {
        StoreRef::Id(id) => find_by_id(repo, Some(*id), &id.to_string()).await,
        StoreRef::Text(s) if is_numeric(s) => find_by_id(repo, s.parse().ok(), s).await,
        StoreRef::Text(name) => repo.find_by_name(name).await?
            .map(|store| store.id)
            .ok_or_else(|| AppError::StoreNotFound(format!("Store with name '{}' does not exist.", name))),
    }
}

/// Resolves every reference, dropping duplicates while keeping first-seen order.
pub async fn resolve_stores(repo: &dyn StoreRepository, stores: &[StoreRef]) -> Result<Vec<i64>, AppError> {
    let mut ids = Vec::with_capacity(stores.len());
    for store in stores {
        let id = resolve_store(repo, store).await?;
        if !ids.contains(&id) {
            ids.push(id);
        }
    }
    Ok(ids)
}
