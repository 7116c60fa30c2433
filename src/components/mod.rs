//! UI Components
//!
//! Reusable Leptos components and the section pages built from them.

mod delete_confirm_button;
mod priority_selector;
mod stat_card;
mod file_drop_zone;
mod group_picker;
mod group_tree_row;
mod message_row;
mod contact_lookup;
mod toast_host;
mod sidebar;
mod dashboard;
mod upload_groups;
mod upload_contacts;
mod view_hierarchy;
mod send_messages;
mod view_messages;

pub use delete_confirm_button::DeleteConfirmButton;
pub use priority_selector::PrioritySelector;
pub use stat_card::StatCard;
pub use file_drop_zone::FileDropZone;
pub use group_picker::GroupPicker;
pub use group_tree_row::GroupTreeRow;
pub use message_row::MessageRow;
pub use contact_lookup::ContactLookup;
pub use toast_host::ToastHost;
pub use sidebar::Sidebar;
pub use dashboard::Dashboard;
pub use upload_groups::UploadGroups;
pub use upload_contacts::UploadContacts;
pub use view_hierarchy::ViewHierarchy;
pub use send_messages::SendMessages;
pub use view_messages::ViewMessages;
