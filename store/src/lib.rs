pub mod session;
pub mod table;

mod memory;
pub use memory::MemorySessionStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalSessionStore;

pub use session::{Session, SessionStore};
pub use table::{SortDirection, TableQuery, TableState, PAGE_SIZE};
