use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use time::OffsetDateTime;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Only the exact `dark` marker selects the dark theme.
    pub fn from_marker(marker: &str) -> Self {
        if marker == "dark" {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }

    pub fn marker(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, ThemeMode::Dark)
    }
}

/// Error returned when a select value does not name a known variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: {value}")]
pub struct UnknownVariant {
    kind: &'static str,
    value: String,
}

macro_rules! string_enum {
    ($name:ident, $kind:literal, { $($variant:ident => $wire:literal, $label:literal),+ $(,)? }) => {
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "lowercase")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $wire),+
                }
            }

            /// Human-facing label shown in tabs and select boxes.
            pub fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = UnknownVariant;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                match value {
                    $($wire => Ok($name::$variant),)+
                    _ => Err(UnknownVariant {
                        kind: $kind,
                        value: value.to_string(),
                    }),
                }
            }
        }
    };
}

string_enum!(RecordKind, "record type", {
    Message => "message", "留言",
    Bug => "bug", "Bug反馈",
    Chat => "chat", "创建聊天",
});

string_enum!(BugType, "bug type", {
    Gameplay => "gameplay", "游戏玩法",
    Technical => "technical", "技术问题",
    Plugin => "plugin", "插件问题",
    Other => "other", "其他",
});

string_enum!(Priority, "priority", {
    Low => "low", "低",
    Medium => "medium", "中",
    High => "high", "高",
});

string_enum!(ChatType, "chat type", {
    General => "general", "综合讨论",
    Help => "help", "求助",
    Suggestion => "suggestion", "建议",
    Trade => "trade", "交易",
});

impl Default for RecordKind {
    fn default() -> Self {
        RecordKind::Message
    }
}

impl Default for BugType {
    fn default() -> Self {
        BugType::Gameplay
    }
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Low
    }
}

impl Default for ChatType {
    fn default() -> Self {
        ChatType::General
    }
}

/// The part of a record whose shape depends on its `type`.
///
/// Serialized flattened into the surrounding payload, so `Bug` contributes
/// `"type": "bug", "bug_type": .., "priority": ..` and `Message` only the tag.
/// Stored rows whose sub-type column is null or unrecognized keep their kind
/// with `None` here; the form always fills it in.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum RecordDetails {
    Message,
    Bug {
        bug_type: Option<BugType>,
        priority: Priority,
    },
    Chat {
        chat_type: Option<ChatType>,
    },
}

impl RecordDetails {
    pub fn kind(&self) -> RecordKind {
        match self {
            RecordDetails::Message => RecordKind::Message,
            RecordDetails::Bug { .. } => RecordKind::Bug,
            RecordDetails::Chat { .. } => RecordKind::Chat,
        }
    }
}

/// A stored message board entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record {
    pub id: i64,
    pub created_at: OffsetDateTime,
    pub name: String,
    pub email: Option<String>,
    pub content: String,
    pub details: RecordDetails,
}

impl Record {
    pub fn kind(&self) -> RecordKind {
        self.details.kind()
    }
}

/// Payload sent to the store when creating a record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewRecord {
    pub name: String,
    pub email: Option<String>,
    pub content: String,
    #[serde(flatten)]
    pub details: RecordDetails,
}

impl NewRecord {
    pub fn kind(&self) -> RecordKind {
        self.details.kind()
    }
}

/// Flat row as returned by the table: every column, nullable extras.
#[derive(Clone, Debug, Deserialize)]
pub struct RecordRow {
    pub id: i64,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(rename = "type")]
    pub kind: RecordKind,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    pub content: String,
    #[serde(default)]
    pub bug_type: Option<String>,
    #[serde(default)]
    pub priority: Option<String>,
    #[serde(default)]
    pub chat_type: Option<String>,
}

/// Parse an optional select column, logging values outside the known set.
fn known_value<T>(id: i64, value: Option<String>) -> Option<T>
where
    T: FromStr<Err = UnknownVariant>,
{
    match value?.parse() {
        Ok(parsed) => Some(parsed),
        Err(err) => {
            tracing::warn!(id, error = %err, "ignoring unrecognized record column");
            None
        }
    }
}

impl From<RecordRow> for Record {
    fn from(row: RecordRow) -> Self {
        let id = row.id;
        let details = match row.kind {
            RecordKind::Message => RecordDetails::Message,
            RecordKind::Bug => RecordDetails::Bug {
                bug_type: known_value(id, row.bug_type),
                // Older rows may lack a priority; they render as low.
                priority: known_value(id, row.priority).unwrap_or_default(),
            },
            RecordKind::Chat => RecordDetails::Chat {
                chat_type: known_value(id, row.chat_type),
            },
        };
        Record {
            id,
            created_at: row.created_at,
            name: row.name,
            email: row.email.filter(|email| !email.is_empty()),
            content: row.content,
            details,
        }
    }
}
