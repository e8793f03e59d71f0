//! QR Menu Ordering - cart store, menu flow and ordering session.
//!
//! # Architecture
//!
//! - [`store`] - `CartStore`, the only write surface for cart and language
//! - [`flow`] - Screen state machine as a pure `transition` function
//! - [`session`] - `MenuSession`, the per-visit owner of store, flow and history
//! - [`catalog`] - Menu decoding, validation and house-menu fallback
//! - [`storage`] - Key-value storage shared with the admin surface
//! - [`order`] - Order records and session history
//! - [`view`] - Render-ready screen snapshots
//!
//! Everything here is synchronous and single-threaded: a session is driven by
//! one caller, one event at a time.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod flow;
pub mod order;
pub mod session;
pub mod storage;
pub mod store;
pub mod view;

pub use catalog::{CatalogError, LoadedMenu, MenuDecodeError, MenuOrigin};
pub use flow::{Effect, Event, FlowState, Screen, Transition, TransitionContext, transition};
pub use order::{Clock, OrderHistory, OrderRecord, SystemClock};
pub use session::{MenuSession, SessionOptions};
pub use storage::{FileStore, KeyValueStore, MemoryStore, StorageError};
pub use store::CartStore;
pub use view::ScreenView;
