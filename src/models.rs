//! Frontend Models
//!
//! Domain types come from the core crate; this module adds what only the
//! UI cares about.

pub use group_admin_core::{
    FlatGroup, GroupId, GroupNode, MessageId, MessageRecord, Priority, Stats, TreeRow,
};

/// Top-level dashboard section, switched in memory by the sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    Dashboard,
    UploadGroups,
    UploadContacts,
    ViewHierarchy,
    SendMessages,
    ViewMessages,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Dashboard,
        Section::UploadGroups,
        Section::UploadContacts,
        Section::ViewHierarchy,
        Section::SendMessages,
        Section::ViewMessages,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Section::Dashboard => "dashboard",
            Section::UploadGroups => "upload-groups",
            Section::UploadContacts => "upload-contacts",
            Section::ViewHierarchy => "view-hierarchy",
            Section::SendMessages => "send-messages",
            Section::ViewMessages => "view-messages",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Section::Dashboard => "Dashboard",
            Section::UploadGroups => "Upload Groups",
            Section::UploadContacts => "Upload Contacts",
            Section::ViewHierarchy => "View Hierarchy",
            Section::SendMessages => "Send Messages",
            Section::ViewMessages => "View Messages",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Section::Dashboard => "🏠",
            Section::UploadGroups => "⬆",
            Section::UploadContacts => "👥",
            Section::ViewHierarchy => "🌲",
            Section::SendMessages => "💬",
            Section::ViewMessages => "🕘",
        }
    }

    /// Subtitle of the quick-action tile on the dashboard
    pub fn blurb(&self) -> &'static str {
        match self {
            Section::Dashboard => "Overview",
            Section::UploadGroups => "Add new group structure",
            Section::UploadContacts => "Add contacts to groups",
            Section::ViewHierarchy => "Browse group structure",
            Section::SendMessages => "Communicate with groups",
            Section::ViewMessages => "Message history & management",
        }
    }
}
