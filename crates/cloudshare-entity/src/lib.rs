//! # cloudshare-entity
//!
//! Domain entity models for CloudShare. Every struct in this crate
//! represents a database table row, a domain value object, or the
//! canonical form of an API resource. All entities derive `Debug`,
//! `Clone`, `Serialize`, `Deserialize`, and database entities
//! additionally derive `sqlx::FromRow`.

pub mod share;
pub mod token;
