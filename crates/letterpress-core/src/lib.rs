//! letterpress-core - Markdown subset parsing and email-safe markup
//!
//! This crate provides the document-level building blocks used by the
//! `letterpress` newsletter renderer: a small Markdown AST and parser, an
//! HTML node tree with ordered inline styles, and the conversion from one to
//! the other.
//!
//! # Architecture
//!
//! ```text
//!                   parse_markdown          to_markup
//! Markdown String ───────────────▶ Block ─────────────▶ Node ──▶ HTML String
//!                                            ▲
//!                                       TextStyle
//! ```
//!
//! # Example
//!
//! ```rust
//! use letterpress_core::{markdown_to_markup, TextStyle};
//!
//! let node = markdown_to_markup("# Hello\n**bold** text", &TextStyle::default());
//! let html = node.to_string();
//!
//! assert!(html.contains("<h1 style="));
//! assert!(html.contains("<strong>bold</strong>"));
//! ```

mod ast;
mod css;
mod markup;
mod node;
mod options;
mod parse;

pub use ast::{Block, Inline, ListItem};
pub use css::Declarations;
pub use markup::{block_declarations, markdown_to_markup, to_markup};
pub use node::{escape_html, escape_html_attr, Element, Node};
pub use options::{Alignment, TextStyle};
pub use parse::{parse_inlines, parse_markdown};

/// Error type for markup operations
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Markup write error: {0}")]
    Write(#[from] std::fmt::Error),
}

pub type Result<T> = std::result::Result<T, CoreError>;
