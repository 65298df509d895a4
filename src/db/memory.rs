// src/db/memory.rs

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::common::Entity;

// Uma "tabela" em memória. Começa com os dados de exemplo e some quando o processo reinicia.
// Clonar a tabela compartilha os mesmos dados.
#[derive(Clone)]
pub struct Table<T> {
    rows: Arc<RwLock<Vec<T>>>,
}

impl<T: Entity> Table<T> {
    pub fn new(seed: Vec<T>) -> Self {
        Self {
            rows: Arc::new(RwLock::new(seed)),
        }
    }

    pub async fn all(&self) -> Vec<T> {
        self.rows.read().await.clone()
    }

    pub async fn filter<F>(&self, pred: F) -> Vec<T>
    where
        F: Fn(&T) -> bool,
    {
        self.rows.read().await.iter().filter(|row| pred(*row)).cloned().collect()
    }

    pub async fn find(&self, id: u64) -> Option<T> {
        self.rows.read().await.iter().find(|row| row.id() == id).cloned()
    }

    /// Gera o próximo id (maior id + 1) e insere no mesmo lock de escrita.
    pub async fn insert_with<F>(&self, build: F) -> T
    where
        F: FnOnce(u64) -> T,
    {
        let mut rows = self.rows.write().await;
        let next_id = rows.iter().map(Entity::id).max().unwrap_or(0) + 1;
        let row = build(next_id);
        rows.push(row.clone());
        row
    }

    pub async fn update<F>(&self, id: u64, f: F) -> Option<T>
    where
        F: FnOnce(&mut T),
    {
        let mut rows = self.rows.write().await;
        let row = rows.iter_mut().find(|row| row.id() == id)?;
        f(row);
        Some(row.clone())
    }

    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }
}
