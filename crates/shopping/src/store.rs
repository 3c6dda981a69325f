use std::collections::HashMap;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use mealcart_shared::bail;

/// Line item as handed to the external list store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDraft {
    pub name: String,
    pub amount: f64,
    pub unit: String,
    pub notes: String,
}

/// External shopping-list persistence collaborator. The engine never reads
/// lists back; it only writes the generated entries best-effort.
pub trait ShoppingListStore: Send + Sync {
    fn create_list(&self, name: &str) -> mealcart_shared::Result<String>;
    fn add_item(&self, list_id: &str, item: ItemDraft) -> mealcart_shared::Result<()>;
}

#[derive(Debug, Clone, Default)]
pub struct StoredList {
    pub name: String,
    pub items: Vec<ItemDraft>,
}

/// In-memory store used by the demo state and tests.
#[derive(Debug, Default)]
pub struct InMemoryListStore {
    lists: Mutex<HashMap<String, StoredList>>,
}

impl InMemoryListStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn list(&self, list_id: &str) -> Option<StoredList> {
        self.lists
            .lock()
            .expect("list store mutex poisoned")
            .get(list_id)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.lists.lock().expect("list store mutex poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ShoppingListStore for InMemoryListStore {
    fn create_list(&self, name: &str) -> mealcart_shared::Result<String> {
        let id = Uuid::new_v4().to_string();
        self.lists
            .lock()
            .expect("list store mutex poisoned")
            .insert(
                id.clone(),
                StoredList {
                    name: name.to_owned(),
                    items: Vec::new(),
                },
            );

        Ok(id)
    }

    fn add_item(&self, list_id: &str, item: ItemDraft) -> mealcart_shared::Result<()> {
        let mut lists = self.lists.lock().expect("list store mutex poisoned");
        let Some(list) = lists.get_mut(list_id) else {
            bail!("unknown shopping list {list_id}");
        };
        list.items.push(item);

        Ok(())
    }
}
