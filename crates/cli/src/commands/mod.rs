mod add;
mod create;
mod list;
mod scale;

pub use add::add_command;
pub use create::{create_command, CreateArgs};
pub use list::list_command;
pub use scale::scale_command;
