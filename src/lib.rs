//! Word Chain
//!
//! A word-ladder solver: get from one word to another by changing, adding or
//! removing a single letter per step, with every intermediate a dictionary
//! word. Chains are found with a best-first search guided by an edit-distance
//! heuristic, and the same engine drives an interactive puzzle game.
//!
//! # Quick Start
//!
//! ```rust
//! use wordchain::lexicon::Lexicon;
//! use wordchain::solver::solve;
//!
//! let lexicon = Lexicon::from_words(["bat", "bad", "cad", "cat", "scad"]);
//! let chain = solve(&lexicon, "bat", "scad");
//!
//! assert!(chain.is_solved());
//! assert_eq!(chain.num_steps(), 3);
//! println!("{chain}");
//! ```

// Core domain types
pub mod core;

// Word sets and adjacency
pub mod lexicon;

// Search algorithms
pub mod solver;

// Game sessions and hints
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
