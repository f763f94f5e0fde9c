//! In-memory product store: an insertion-ordered sequence with an id index.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex};

use uuid::Uuid;

use super::model::{NewProduct, Product, UpdateProduct};

/// Handle the handlers share; the mutex serializes mutations so concurrent
/// requests always see a consistent sequence.
pub type SharedStore = Arc<Mutex<ProductStore>>;

/// Ordered product collection. `index` maps id to position in `products`
/// for O(1) lookup and is kept in sync on every insert and remove.
#[derive(Debug, Default)]
pub struct ProductStore {
    products: Vec<Product>,
    index: HashMap<String, usize>,
}

impl ProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The five fixed records every process starts with. Seed ids are plain
    /// numerals; records created at runtime get UUIDs.
    pub fn seeded() -> Self {
        let mut store = Self::new();
        let seed = [
            ("1", "Laptop", "High-performance laptop with 16GB RAM", 1200.0, "electronics", true),
            ("2", "Smartphone", "Latest model with 128GB storage", 800.0, "electronics", true),
            ("3", "Coffee Maker", "Programmable coffee maker with timer", 50.0, "kitchen", false),
            ("4", "Headphones", "Noise-canceling headphones", 200.0, "electronics", true),
            ("5", "Blender", "High-speed blender for smoothies", 100.0, "kitchen", true),
        ];

        for (id, name, description, price, category, in_stock) in seed {
            store.push(Product {
                id: id.to_string(),
                name: name.to_string(),
                description: description.to_string(),
                price,
                category: category.to_string(),
                in_stock,
            });
        }

        store
    }

    pub fn shared() -> SharedStore {
        Arc::new(Mutex::new(Self::seeded()))
    }

    fn push(&mut self, product: Product) {
        self.index.insert(product.id.clone(), self.products.len());
        self.products.push(product);
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Product> {
        self.index.get(id).map(|&pos| &self.products[pos])
    }

    /// Appends a new record with a freshly generated id and returns it.
    pub fn insert(&mut self, new: NewProduct) -> Product {
        let product = Product {
            id: Uuid::new_v4().to_string(),
            name: new.name,
            description: new.description,
            price: new.price,
            category: new.category,
            in_stock: new.in_stock,
        };

        self.push(product.clone());
        product
    }

    /// Merges a partial update: string fields replace only when non-empty,
    /// `price` only when non-zero, `in_stock` whenever present. The id is
    /// never touched.
    pub fn update(&mut self, id: &str, changes: UpdateProduct) -> Option<&Product> {
        let pos = *self.index.get(id)?;
        let product = &mut self.products[pos];

        if let Some(name) = changes.name.filter(|s| !s.is_empty()) {
            product.name = name;
        }
        if let Some(description) = changes.description.filter(|s| !s.is_empty()) {
            product.description = description;
        }
        if let Some(price) = changes.price.filter(|p| *p != 0.0) {
            product.price = price;
        }
        if let Some(category) = changes.category.filter(|s| !s.is_empty()) {
            product.category = category;
        }
        if let Some(in_stock) = changes.in_stock {
            product.in_stock = in_stock;
        }

        Some(&self.products[pos])
    }

    /// Removes a record, preserving the order of the rest. Positions after
    /// the removed record shift down, so the index is adjusted to match.
    pub fn remove(&mut self, id: &str) -> Option<Product> {
        let pos = self.index.remove(id)?;
        let removed = self.products.remove(pos);

        for slot in self.index.values_mut() {
            if *slot > pos {
                *slot -= 1;
            }
        }

        Some(removed)
    }

    /// Case-insensitive category filter plus slice pagination. Out-of-range
    /// pages yield an empty or partial slice, never an error. Returns the
    /// filtered total alongside the page contents.
    pub fn page(&self, category: Option<&str>, page: u64, limit: u64) -> (usize, Vec<Product>) {
        let filtered: Vec<&Product> = match category {
            Some(wanted) => {
                let wanted = wanted.to_lowercase();
                self.products
                    .iter()
                    .filter(|p| p.category.to_lowercase() == wanted)
                    .collect()
            }
            None => self.products.iter().collect(),
        };

        let total = filtered.len();
        let start = page.saturating_sub(1).saturating_mul(limit);
        let items = filtered
            .into_iter()
            .skip(start as usize)
            .take(limit as usize)
            .cloned()
            .collect();

        (total, items)
    }

    /// Case-insensitive substring match on the name, full collection,
    /// insertion order preserved.
    pub fn search(&self, needle: &str) -> Vec<Product> {
        let needle = needle.to_lowercase();
        self.products
            .iter()
            .filter(|p| p.name.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    /// Record count per category, keys as stored.
    pub fn stats(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for product in &self.products {
            *counts.entry(product.category.clone()).or_insert(0) += 1;
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_product(name: &str) -> NewProduct {
        NewProduct {
            name: name.to_string(),
            description: format!("{name} description"),
            price: 10.0,
            category: "misc".to_string(),
            in_stock: true,
        }
    }

    #[test]
    fn seeds_five_products_in_order() {
        let store = ProductStore::seeded();
        assert_eq!(store.len(), 5);
        assert_eq!(store.get("3").unwrap().name, "Coffee Maker");

        let (total, all) = store.page(None, 1, 100);
        assert_eq!(total, 5);
        let ids: Vec<&str> = all.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn insert_appends_with_fresh_id() {
        let mut store = ProductStore::seeded();
        let created = store.insert(new_product("Kettle"));

        assert_eq!(store.len(), 6);
        assert_ne!(created.id, "5");
        assert_eq!(store.get(&created.id).unwrap().name, "Kettle");

        let (_, all) = store.page(None, 1, 100);
        assert_eq!(all.last().unwrap().id, created.id);
    }

    #[test]
    fn remove_keeps_index_consistent() {
        let mut store = ProductStore::seeded();
        assert!(store.remove("2").is_some());
        assert!(store.remove("2").is_none());

        assert_eq!(store.len(), 4);
        // Positions after the hole shifted down; lookups must still land.
        assert_eq!(store.get("3").unwrap().name, "Coffee Maker");
        assert_eq!(store.get("5").unwrap().name, "Blender");
    }

    #[test]
    fn update_merges_only_truthy_fields() {
        let mut store = ProductStore::seeded();

        let updated = store
            .update(
                "1",
                UpdateProduct {
                    price: Some(150.0),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(updated.price, 150.0);
        assert_eq!(updated.name, "Laptop");
        assert!(updated.in_stock);

        // Empty string and zero price keep the current values.
        let updated = store
            .update(
                "1",
                UpdateProduct {
                    name: Some(String::new()),
                    price: Some(0.0),
                    in_stock: Some(false),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(updated.name, "Laptop");
        assert_eq!(updated.price, 150.0);
        assert!(!updated.in_stock);
    }

    #[test]
    fn update_missing_id_is_none() {
        let mut store = ProductStore::seeded();
        assert!(store.update("999", UpdateProduct::default()).is_none());
    }

    #[test]
    fn page_filters_case_insensitively_and_slices() {
        let store = ProductStore::seeded();

        let (total, items) = store.page(Some("KITCHEN"), 1, 10);
        assert_eq!(total, 2);
        let names: Vec<&str> = items.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Coffee Maker", "Blender"]);

        let (total, items) = store.page(None, 3, 2);
        assert_eq!(total, 5);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, "5");

        let (total, items) = store.page(None, 99, 2);
        assert_eq!(total, 5);
        assert!(items.is_empty());

        // page=0 clamps to the start rather than underflowing.
        let (_, items) = store.page(None, 0, 2);
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn search_matches_substrings_case_insensitively() {
        let store = ProductStore::seeded();
        let names: Vec<String> = store.search("phone").into_iter().map(|p| p.name).collect();
        assert_eq!(names, ["Smartphone", "Headphones"]);

        assert!(store.search("zzz").is_empty());
    }

    #[test]
    fn stats_counts_per_category() {
        let store = ProductStore::seeded();
        let stats = store.stats();
        assert_eq!(stats.get("electronics"), Some(&3));
        assert_eq!(stats.get("kitchen"), Some(&2));
        assert_eq!(stats.len(), 2);
    }
}
