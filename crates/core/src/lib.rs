//! Core library for uigen
//!
//! This crate implements the **Functional Core** of uigen, following the
//! Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! - **`uigen_core`** (this crate): pure transformation functions with zero network I/O
//! - **`uigen`**: chat-completion calls, prompts, settings and file writes (the Imperative Shell)
//!
//! Everything here can be tested with fixture strings. The model reply is
//! just text, and every function that reads it degrades to a fallback value
//! instead of failing.
//!
//! # Module Organization
//!
//! - [`prompt`]: chat requests sent to the model, and reading its reply
//! - [`response`]: turning a reply into a component name and code
//! - [`scaffold`]: barrel, mock-data and story files derived from the code
//! - [`placement`]: choosing the output folder and the files to write
//! - [`protocol`]: JSON messages exchanged with a front-end panel
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use uigen_core::response::parse_response;
//! use uigen_core::scaffold::{generate_scaffold, ScaffoldOptions};
//!
//! let raw = "COMPONENT_NAME: Card\n```tsx\nexport interface CardProps { title: string }\n```";
//! let result = parse_response(raw, "create a card component");
//! assert_eq!(result.component_name, "Card");
//!
//! let files = generate_scaffold(
//!     &result.component_name,
//!     &result.component_code,
//!     ScaffoldOptions { storybook: true, mock_data: true },
//! );
//! assert!(files.mock_data.unwrap().contains("defaultCardProps"));
//! ```

pub mod placement;
pub mod prompt;
pub mod protocol;
pub mod response;
pub mod scaffold;
