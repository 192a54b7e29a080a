//! # PlayerGraph - Graph data set generator for multi-agent simulations
//!
//! This library turns a description of a networked multi-agent simulation
//! (a fixed number of players arranged on a topology, each carrying a small
//! state record) into a graph data set of nodes and edges, ready to be
//! rendered into a graph-interchange file by an external template.
//!
//! ## Overview
//!
//! A build does two things with real logic in them:
//!
//! - **Settings resolution**: assigns one player state to every player index
//!   from an ordered list of `(target range, state)` settings plus a default,
//!   reporting corrected targets, conflicts and out-of-range players
//! - **Connection generation**: derives the undirected edge list from a named
//!   topology (toroidal Moore or von Neumann lattice, or a ring)
//!
//! ## Architecture
//!
//! - `config`: Configuration structures and validation
//! - `config_loader`: Configuration file loading and CLI overrides
//! - `settings`: Target range parsing and per-player settings resolution
//! - `topology`: Topology variants and connection generation
//! - `graph`: Node and edge model, fixed-width player identifiers
//! - `diagnostics`: Informational and alert messages produced by a build
//! - `orchestrator`: The build pipeline
//! - `export`: Writing the graph document for the template step
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use playergraph::{config_loader, export, orchestrator};
//! use std::path::Path;
//!
//! let config = config_loader::load_config(Path::new("players.yaml"))?;
//! let report = orchestrator::build_graph(&orchestrator::BuildInput::from(&config))?;
//!
//! for diagnostic in report.diagnostics.iter() {
//!     println!("{}", diagnostic);
//! }
//!
//! let document = export::ExportDocument {
//!     environment: &config.environment,
//!     graph: &report.model,
//! };
//! export::write_document(Path::new("state.json"), &document)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Target Ranges
//!
//! Setting targets are comma separated indices and ranges. Ranges are
//! half-open: `"0-4, 9"` selects players 0, 1, 2, 3 and 9. Malformed tokens
//! are dropped with an informational message.
//!
//! ## Error Handling
//!
//! Library errors are typed (`ValidationError`, `TopologyError`,
//! `BuildError`); file loading and export return `color_eyre` results with
//! context.

pub mod config;
pub mod config_loader;
pub mod diagnostics;
pub mod export;
pub mod graph;
pub mod orchestrator;
pub mod settings;
pub mod topology;
