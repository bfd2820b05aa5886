//! Command implementations, one module per subcommand.

pub mod add;
pub mod completions;
pub mod copy;
pub mod delete;
pub mod fingerprint;
pub mod generate;
pub mod init;
pub mod list;
pub mod profiles;
pub mod regen;
pub mod show;
