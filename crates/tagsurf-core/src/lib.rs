#![warn(missing_docs)]
//! Tagsurf Core - Headless Tag and Bracket Pair Engine
//!
//! # Overview
//!
//! `tagsurf-core` locates, matches and restructures paired delimiters in text: markup tags
//! (`<div>...</div>`, `<img />`) and bracket characters (`()[]{}<>`). It is a lexical scanner,
//! not a parser. Nesting, quoted literals, comments and multi-line tags are respected without
//! building a syntax tree, and every scan is local and bounded by a line window.
//!
//! The crate never renders and never talks to an editor directly. Scanners read through the
//! [`Document`] trait and return positions, ranges or [`EditPlan`]s; the optional
//! [`CommandExecutor`] applies those plans to a bundled [`TextDocument`].
//!
//! # Core Features
//!
//! - **Bracket matching**: nesting-aware, skips quoted literals when scanning forward
//! - **Tag scanning**: enclosing tag, partner tag, surrounding element, all tags in a range
//! - **Class attribute focus**: `class="..."`, `className="..."` and `className={cn(...)}`
//! - **Deletion planning**: per-line plans that drop lines left blank by a deletion
//! - **Tag wrapping**: inline and block forms with configurable indentation
//!
//! # Architecture Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  Command Interface (CommandExecutor)        │  ← Public API
//! ├─────────────────────────────────────────────┤
//! │  Planning (RangeSet, LineDeletion, wrap)    │  ← Edit Construction
//! ├─────────────────────────────────────────────┤
//! │  Scanners (TagScanner, bracket)             │  ← Pair Discovery
//! ├─────────────────────────────────────────────┤
//! │  Document trait + EditPlan                  │  ← Text Access
//! ├─────────────────────────────────────────────┤
//! │  TextDocument (Rope storage)                │  ← Text Storage
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ## Scanning
//!
//! ```rust
//! use tagsurf_core::{Position, Range, TagKind, TagScanner, TextDocument};
//!
//! let doc = TextDocument::new("<div>Hello</div>");
//! let scanner = TagScanner::new();
//!
//! let open = scanner.find_enclosing(&doc, Position::new(0, 5)).unwrap();
//! assert_eq!(open.name, "div");
//! assert_eq!(open.kind, TagKind::Opening);
//!
//! let close = scanner.find_partner(&doc, &open).unwrap();
//! assert_eq!(close.range, Range::from_coords(0, 10, 0, 16));
//! ```
//!
//! ## Using Command Interface
//!
//! ```rust
//! use tagsurf_core::{Command, CommandExecutor, Position, Selection};
//! use tagsurf_lang::MarkupDialect;
//!
//! let mut executor = CommandExecutor::new("Hello", MarkupDialect::Html);
//! executor.set_selections(vec![Selection::new(Position::new(0, 0), Position::new(0, 5))]);
//!
//! executor
//!     .execute(Command::SurroundWithTag { tag_name: None })
//!     .unwrap();
//! assert_eq!(executor.document().get_text(), "<div>\n  Hello\n</div>");
//! ```
//!
//! # Module Description
//!
//! - [`position`] - Positions and ranges
//! - [`document`] - The `Document` trait and the rope-backed `TextDocument`
//! - [`bracket`] - Bracket classification and matching
//! - [`tag`] - Tag scanning and pairing
//! - [`class_name`] - Class attribute location
//! - [`selection`] - Selections and their classification
//! - [`range_set`] - Ordered sets of merged ranges
//! - [`deletion`] - Line-oriented deletion planning
//! - [`wrap`] - Wrapping content in tags
//! - [`edit`] - Atomic edit plans
//! - [`commands`] - Unified command interface
//!
//! # Logging
//!
//! Diagnostics go through [`tracing`]. The crate never installs a subscriber.

pub mod bracket;
pub mod class_name;
pub mod commands;
pub mod config;
pub mod deletion;
pub mod document;
pub mod edit;
pub mod error;
pub mod line_ending;
pub mod position;
pub mod range_set;
pub mod selection;
pub mod tag;
pub mod wrap;

pub use bracket::{Bracket, BracketKind, BracketLoc};
pub use class_name::{ClassNameKind, ClassNamePosition};
pub use commands::{Command, CommandExecutor, CommandResult, NotFound};
pub use config::{ScanLimits, TagConfig};
pub use deletion::{LineDeletion, delete_ranges_from_line, line_deletion_edits, plan_line_deletions};
pub use document::{Document, TextDocument};
pub use edit::{Bias, EditPlan, ResolvedEdit, TextEdit, map_offset};
pub use error::{CommandError, ConfigError, EditError};
pub use line_ending::LineEnding;
pub use position::{Position, Range};
pub use range_set::RangeSet;
pub use selection::{Selection, SelectionDirection, SelectionKind};
pub use tag::{Tag, TagKind, TagScanner, parse_tag};
pub use wrap::{IndentUnit, indent_content, leading_indentation, wrap_content};
