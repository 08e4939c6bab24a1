//! # campus-core: Foundational Types for the Campus Directory
//!
//! This crate is the leaf of the workspace dependency DAG. It defines the
//! records the rest of the directory passes around and the two pieces of
//! pure logic everything else leans on.
//!
//! ## Contents
//!
//! 1. **Records.** `Campus` and `Student` as plain data, plus the
//!    `NewCampus` / `NewStudent` payloads accepted on the write path.
//!    Identifiers are newtypes (`CampusId`, `StudentId`) so a student id
//!    cannot be passed where a campus id is expected.
//!
//! 2. **Validation predicates.** Pure functions in [`validate`] that run
//!    without a live store. Every failure is a [`ValidationError`] naming
//!    the offending field.
//!
//! 3. **Group partitioner.** [`group::partition`] splits an ordered slice
//!    into contiguous groups of a fixed size, borrowing elements rather
//!    than cloning them.
//!
//! 4. **Repository interface.** [`CampusRepository`] is the seam between
//!    handlers and storage. [`MemoryRepository`] is the in-process
//!    implementation; the Postgres implementation lives in `campus-api`.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `campus-*` crates.
//! - No `unsafe` code.
//! - No `.unwrap()` outside tests.

pub mod error;
pub mod group;
pub mod model;
pub mod repository;
pub mod validate;

pub use error::{PartitionError, RepositoryError, ValidationError};
pub use group::{partition, partition_by, partition_owned, GroupSize};
pub use model::{Campus, CampusId, NewCampus, NewStudent, Phase, Student, StudentId};
pub use repository::{seed_sample, CampusRepository, MemoryRepository};
