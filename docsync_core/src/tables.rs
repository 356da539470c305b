//! Static generator tables: shared interfaces, enums and type overrides.
//!
//! These are fixed at compile time. Derived lookups are built once on first use
//! and are read-only afterwards.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Owner key of overrides that apply to a field name on every type.
pub const GLOBAL: &str = "__GLOBAL__";

/// Interface that every reply markup alternative collapses to.
pub const MARKUP_INTERFACE: &str = "Markup";

/// Interface that every input media alternative collapses to.
pub const INPUT_MEDIA_INTERFACE: &str = "InputMedia";

/// An interface and the extracted types that implement it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterfaceGroup {
    pub name: &'static str,
    pub members: &'static [&'static str],
}

/// A string-backed enum and its constants in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnumDefinition {
    pub name: &'static str,
    /// `(constant name, wire value)` pairs
    pub constants: &'static [(&'static str, &'static str)],
}

/// Forces the resolved type of `field` on `owner` (or on every type when `owner`
/// is [`GLOBAL`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CustomTypeOverride {
    pub owner: &'static str,
    /// camelCase field name
    pub field: &'static str,
    pub type_name: &'static str,
}

pub static INTERFACES: &[InterfaceGroup] = &[
    InterfaceGroup {
        name: MARKUP_INTERFACE,
        members: &[
            "InlineKeyboardMarkup",
            "ReplyKeyboardMarkup",
            "ReplyKeyboardRemove",
            "ForceReply",
        ],
    },
    InterfaceGroup {
        name: INPUT_MEDIA_INTERFACE,
        members: &[
            "InputMediaAnimation",
            "InputMediaDocument",
            "InputMediaAudio",
            "InputMediaPhoto",
            "InputMediaVideo",
        ],
    },
];

pub static ENUMS: &[EnumDefinition] = &[
    EnumDefinition {
        name: "ChatType",
        constants: &[
            ("PRIVATE", "private"),
            ("GROUP", "group"),
            ("SUPERGROUP", "supergroup"),
            ("CHANNEL", "channel"),
        ],
    },
    EnumDefinition {
        name: "ParseMode",
        constants: &[
            ("MARKDOWN_V2", "MarkdownV2"),
            ("MARKDOWN", "Markdown"),
            ("HTML", "HTML"),
        ],
    },
    EnumDefinition {
        name: "ChatAction",
        constants: &[
            ("TYPING", "typing"),
            ("UPLOAD_PHOTO", "upload_photo"),
            ("UPLOAD_AUDIO", "upload_audio"),
            ("UPLOAD_DOCUMENT", "upload_document"),
            ("FIND_LOCATION", "find_location"),
            ("RECORD_VIDEO_NOTE", "record_video_note"),
            ("UPLOAD_VIDEO_NOTE", "upload_video_note"),
        ],
    },
];

pub static CUSTOM_TYPES: &[CustomTypeOverride] = &[
    CustomTypeOverride {
        owner: "Chat",
        field: "type",
        type_name: "ChatType",
    },
    CustomTypeOverride {
        owner: "SendChatActionRequest",
        field: "action",
        type_name: "ChatAction",
    },
    CustomTypeOverride {
        owner: GLOBAL,
        field: "parseMode",
        type_name: "ParseMode",
    },
];

/// Subtype → interface lookup derived from an interface table.
#[derive(Debug, Clone)]
pub struct InterfaceIndex {
    groups: &'static [InterfaceGroup],
    supertypes: HashMap<&'static str, &'static str>,
}

impl InterfaceIndex {
    pub fn new(groups: &'static [InterfaceGroup]) -> Self {
        let mut supertypes = HashMap::new();
        for group in groups {
            for member in group.members {
                // First listing wins; a type implements a single interface.
                supertypes.entry(*member).or_insert(group.name);
            }
        }
        Self { groups, supertypes }
    }

    /// The index over [`INTERFACES`].
    pub fn standard() -> &'static InterfaceIndex {
        &STANDARD_INTERFACE_INDEX
    }

    pub fn groups(&self) -> &'static [InterfaceGroup] {
        self.groups
    }

    pub fn supertype_of(&self, type_name: &str) -> Option<&'static str> {
        self.supertypes.get(type_name).copied()
    }

    pub fn is_interface(&self, type_name: &str) -> bool {
        self.groups.iter().any(|group| group.name == type_name)
    }
}

static STANDARD_INTERFACE_INDEX: Lazy<InterfaceIndex> = Lazy::new(|| InterfaceIndex::new(INTERFACES));

/// `(owner, field)` → type name lookup over an override table.
#[derive(Debug, Clone)]
pub struct OverrideIndex {
    entries: HashMap<&'static str, HashMap<&'static str, &'static str>>,
}

impl OverrideIndex {
    pub fn new(overrides: &'static [CustomTypeOverride]) -> Self {
        let mut entries: HashMap<_, HashMap<_, _>> = HashMap::new();
        for o in overrides {
            entries.entry(o.owner).or_default().insert(o.field, o.type_name);
        }
        Self { entries }
    }

    /// The index over [`CUSTOM_TYPES`].
    pub fn standard() -> &'static OverrideIndex {
        &STANDARD_OVERRIDE_INDEX
    }

    /// Override registered for exactly this owner and field.
    pub fn for_type(&self, owner: &str, field: &str) -> Option<&'static str> {
        self.entries.get(owner)?.get(field).copied()
    }

    /// Override registered for this field name on every type.
    pub fn global(&self, field: &str) -> Option<&'static str> {
        self.for_type(GLOBAL, field)
    }
}

static STANDARD_OVERRIDE_INDEX: Lazy<OverrideIndex> = Lazy::new(|| OverrideIndex::new(CUSTOM_TYPES));
