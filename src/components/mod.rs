//! UI Components

mod action_item;
mod action_items_column;
mod add_item_input;
mod auth_template;
mod delete_column_item;
mod edit_column_item;
mod header;
mod link;
mod retro_subheader;
mod thought_item;
mod thoughts_column;

pub use action_item::{dispatch_action, ActionItem};
pub use action_items_column::ActionItemsColumn;
pub use add_item_input::AddItemInput;
pub use auth_template::{AuthForm, AuthTemplate, InputField};
pub use delete_column_item::DeleteColumnItem;
pub use edit_column_item::EditColumnItem;
pub use header::Header;
pub use link::Link;
pub use retro_subheader::RetroSubheader;
pub use thought_item::{dispatch_thought, ThoughtItem};
pub use thoughts_column::ThoughtsColumn;
