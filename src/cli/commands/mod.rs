//! One module per subcommand, dispatched from `main.rs`.

pub mod add;
pub mod completions;
pub mod copy;
pub mod delete;
pub mod edit;
pub mod export;
pub mod generate_cmd;
pub mod import_cmd;
pub mod init;
pub mod list;
pub mod path_cmd;
pub mod rotate;
pub mod show;
pub mod tags_cmd;
