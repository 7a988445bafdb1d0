//! Shared test utilities for the domain crates
//!
//! - `TestMongo`: MongoDB container with automatic cleanup
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::TestMongo;
//!
//! #[tokio::test]
//! async fn my_mongo_test() {
//!     let mongo = TestMongo::new().await;
//!     let repo = MongoProductRepository::new(&mongo.database());
//! }
//! ```
//!
//! Tests built on these helpers need a Docker daemon; they are `#[ignore]`d
//! in the domain crates and run with `cargo test -- --ignored`.

mod mongo;

pub use mongo::TestMongo;
