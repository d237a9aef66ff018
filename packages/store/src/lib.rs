pub mod cart;
pub mod config;
pub mod kv;
pub mod models;
pub mod tokens;

mod memory;
pub use memory::MemoryStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStore;

pub use cart::{Cart, CartItem, CartManager, OrderLine};
pub use config::{ClientConfig, ConfigError};
pub use kv::{KeyValueStore, ACCESS_TOKEN_KEY, CART_KEY, REFRESH_TOKEN_KEY};
pub use models::{Notice, NoticeLevel};
pub use tokens::{TokenPair, Tokens};
