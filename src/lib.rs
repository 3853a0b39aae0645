//! Grotto - a git-native password manager that keeps every secret's
//! history on its own branch.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── init          # Connect a repository and key file
//! │   ├── insert        # Store a new secret
//! │   ├── show          # Decrypt and display a secret
//! │   ├── list          # Namespace tree of stored secrets
//! │   ├── rm            # Soft-delete (branch becomes a tag)
//! │   ├── mv / cp       # Move or copy a secret with its history
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── config        # ~/.config/grotto/config.toml management
//!     ├── cipher/       # Encryption backends
//!     │   ├── mod       # Cipher trait
//!     │   └── age       # age encryption implementation
//!     ├── keyring       # Passphrase-protected key session
//!     ├── envelope      # Plaintext/ciphertext state machine
//!     ├── repo          # git2 facade (branches, tags, commits)
//!     ├── path          # Validated secret names
//!     ├── tree          # Namespace tree for listing
//!     └── vault         # Secret lifecycle engine
//! ```
//!
//! # Features
//!
//! - One orphan branch per secret: isolated, complete edit history
//! - Soft delete: removal freezes the history behind a tag; inserting
//!   at the same path restores it
//! - Age-based armored encryption with a passphrase-protected key file
//! - Move/copy carry the full history to the new name

pub mod cli;
pub mod core;
pub mod error;
