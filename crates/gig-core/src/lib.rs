//! # gig-core
//!
//! Core types, identities, and error types for Gigboard.
//!
//! This crate provides the foundational types shared across all Gigboard crates:
//! - Entity structs for the four stored records (talents, clients, jobs, feedback)
//! - Job lifecycle and role enums with state machine transitions
//! - Caller identity (`Principal`) and ID prefix constants
//! - The closed `MarketError` taxonomy returned by every operation
//! - Request payloads and derived read-only "info" views

pub mod entities;
pub mod enums;
pub mod errors;
pub mod identity;
pub mod ids;
pub mod payloads;
pub mod views;
