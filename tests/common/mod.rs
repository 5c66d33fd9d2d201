//! In-memory port implementations and fixtures shared by the
//! integration tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use storefront::domain::cart::Cart;
use storefront::domain::foundation::{
    DomainError, ErrorCode, Price, ProductId, Rating, UserId,
};
use storefront::domain::product::{Category, Product, ProductFilter};
use storefront::domain::user::User;
use storefront::ports::{CartStore, ProductCatalog, UserStore};

pub struct MemoryCartStore {
    carts: Mutex<HashMap<String, Cart>>,
}

impl MemoryCartStore {
    pub fn new() -> Self {
        Self {
            carts: Mutex::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl CartStore for MemoryCartStore {
    async fn find_by_user(&self, user_id: &UserId) -> Result<Option<Cart>, DomainError> {
        Ok(self.carts.lock().unwrap().get(user_id.as_str()).cloned())
    }

    async fn create(&self, cart: &Cart) -> Result<(), DomainError> {
        let mut carts = self.carts.lock().unwrap();
        if carts.contains_key(cart.user_id().as_str()) {
            return Err(DomainError::new(
                ErrorCode::CartConflict,
                "cart already exists",
            ));
        }
        carts.insert(cart.user_id().to_string(), cart.clone());
        Ok(())
    }

    async fn save(&self, cart: &Cart) -> Result<(), DomainError> {
        let mut carts = self.carts.lock().unwrap();
        let stored = carts
            .get(cart.user_id().as_str())
            .ok_or_else(|| DomainError::new(ErrorCode::CartNotFound, "cart row gone"))?;
        if stored.version() != cart.version() {
            return Err(DomainError::new(ErrorCode::CartConflict, "version mismatch"));
        }
        let bumped = Cart::reconstitute(
            *cart.id(),
            cart.user_id().clone(),
            cart.items().to_vec(),
            cart.total_items(),
            cart.total_price(),
            cart.version() + 1,
            *cart.created_at(),
            *cart.updated_at(),
        );
        carts.insert(cart.user_id().to_string(), bumped);
        Ok(())
    }
}

pub struct MemoryCatalog {
    products: Mutex<HashMap<ProductId, Product>>,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self {
            products: Mutex::new(HashMap::new()),
        }
    }

    pub fn add(&self, product: Product) {
        self.products.lock().unwrap().insert(*product.id(), product);
    }

    pub fn remove(&self, id: &ProductId) {
        self.products.lock().unwrap().remove(id);
    }
}

#[async_trait]
impl ProductCatalog for MemoryCatalog {
    async fn find_by_id(&self, id: &ProductId) -> Result<Option<Product>, DomainError> {
        Ok(self.products.lock().unwrap().get(id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Product>, DomainError> {
        Ok(self
            .products
            .lock()
            .unwrap()
            .values()
            .find(|p| p.name().eq_ignore_ascii_case(name))
            .cloned())
    }

    async fn find_many(&self, ids: &[ProductId]) -> Result<Vec<Product>, DomainError> {
        let products = self.products.lock().unwrap();
        Ok(ids.iter().filter_map(|id| products.get(id).cloned()).collect())
    }

    async fn list(&self) -> Result<Vec<Product>, DomainError> {
        Ok(self.products.lock().unwrap().values().cloned().collect())
    }

    async fn search(&self, filter: &ProductFilter) -> Result<Vec<Product>, DomainError> {
        Ok(self
            .products
            .lock()
            .unwrap()
            .values()
            .filter(|p| filter.matches(p))
            .cloned()
            .collect())
    }

    async fn insert(&self, product: &Product) -> Result<(), DomainError> {
        self.products
            .lock()
            .unwrap()
            .insert(*product.id(), product.clone());
        Ok(())
    }

    async fn update(&self, product: &Product) -> Result<(), DomainError> {
        self.products
            .lock()
            .unwrap()
            .insert(*product.id(), product.clone());
        Ok(())
    }

    async fn delete(&self, id: &ProductId) -> Result<(), DomainError> {
        self.products.lock().unwrap().remove(id);
        Ok(())
    }
}

pub fn product(name: &str, cents: i64) -> Product {
    product_with_id(ProductId::new(), name, cents)
}

pub fn product_with_id(id: ProductId, name: &str, cents: i64) -> Product {
    Product::new(
        id,
        name.to_string(),
        format!("{name} description"),
        "https://img.example.com/p.png".to_string(),
        Category::Electronics,
        Price::from_cents(cents).unwrap(),
        Rating::try_from_u8(4).unwrap(),
        false,
    )
    .unwrap()
}

pub fn user() -> UserId {
    UserId::new("shopper-42").unwrap()
}

pub struct MemoryUserStore {
    users: Mutex<HashMap<String, User>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self {
            users: Mutex::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        Ok(self.users.lock().unwrap().get(id.as_str()).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .values()
            .find(|u| u.email().eq_ignore_ascii_case(email))
            .cloned())
    }

    async fn list(&self) -> Result<Vec<User>, DomainError> {
        Ok(self.users.lock().unwrap().values().cloned().collect())
    }

    async fn insert(&self, user: &User) -> Result<(), DomainError> {
        let mut users = self.users.lock().unwrap();
        if users
            .values()
            .any(|u| u.email().eq_ignore_ascii_case(user.email()))
        {
            return Err(DomainError::new(ErrorCode::DuplicateEmail, user.email()));
        }
        users.insert(user.id().to_string(), user.clone());
        Ok(())
    }

    async fn update(&self, user: &User) -> Result<(), DomainError> {
        let mut users = self.users.lock().unwrap();
        if !users.contains_key(user.id().as_str()) {
            return Err(DomainError::new(ErrorCode::UserNotFound, "user not found"));
        }
        users.insert(user.id().to_string(), user.clone());
        Ok(())
    }

    async fn delete(&self, id: &UserId) -> Result<(), DomainError> {
        if self.users.lock().unwrap().remove(id.as_str()).is_none() {
            return Err(DomainError::new(ErrorCode::UserNotFound, "user not found"));
        }
        Ok(())
    }
}
