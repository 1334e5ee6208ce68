//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Password hashing (Argon2id, memory-hard, salted per call)
//! - Bearer token header extraction
//! - Small cryptographic utilities (random bytes, Base64)

pub mod bearer;
pub mod crypto;
pub mod password;
