//! # Progeny Core
//!
//! The breeding engine for Progeny - a creature-breeding game.
//!
//! This crate contains the deterministic breeding logic, including:
//! - Random roster generation with per-stat ranges
//! - Pairing selection (the 0-2 candidates chosen as parents)
//! - Trait crossover and mutation jitter
//! - Per-pair offspring bookkeeping
//! - The session object that owns a whole breeding phase
//!
//! ## Architecture
//!
//! The engine is single-threaded and synchronous. Every effectful
//! operation takes its random source as a `&mut impl Rng`, so a seeded
//! [`rand_chacha::ChaCha8Rng`] reproduces a session draw for draw.
//! Rejected operations (incompatible pair, exhausted fertility, same-sex
//! selection) are silent no-ops rather than errors: nothing in this crate
//! fails loudly.
//!
//! ## Example
//!
//! ```
//! use progeny_core::lifecycle;
//! use progeny_core::session::BreedingSession;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//! let roster = lifecycle::generate_with_rng(10, &mut rng);
//! let mut session = BreedingSession::new(roster);
//!
//! // Click the first two candidates and try for a child.
//! let ids: Vec<_> = session.roster().map(|(id, _)| id).collect();
//! session.select(ids[0]);
//! session.select(ids[1]);
//! if session.can_breed() {
//!     let child = session.breed_with_rng(&mut rng);
//!     assert!(child.is_some());
//! }
//! ```

/// Breeding candidates, the compatibility predicate and the breed operation
pub mod breeding;
/// Configuration management for session parameters
pub mod config;
/// Trait crossover and the mutation jitter
pub mod genetics;
/// Offspring bookkeeping keyed by parent pair
pub mod ledger;
/// Roster creation (random creature generation)
pub mod lifecycle;
/// Pairing selection state machine
pub mod selection;
/// The breeding session owning roster, selection and ledger
pub mod session;
