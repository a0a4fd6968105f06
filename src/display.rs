use crate::types::{Priority, Record, RecordDetails};
use time::{OffsetDateTime, UtcOffset};

/// Avatar initials: first letter of up to two words, uppercased.
pub fn initials(name: &str) -> String {
    name.split(' ')
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

/// Long local timestamp in the site's Chinese style, e.g. `2024年3月5日 14:05`.
pub fn format_timestamp(timestamp: OffsetDateTime) -> String {
    match UtcOffset::current_local_offset() {
        Ok(offset) => format_in_offset(timestamp, offset),
        Err(_) => format_long(timestamp),
    }
}

/// Long timestamp as seen by a reader at `offset`.
pub fn format_in_offset(timestamp: OffsetDateTime, offset: UtcOffset) -> String {
    format_long(timestamp.to_offset(offset))
}

fn format_long(datetime: OffsetDateTime) -> String {
    format!(
        "{}年{}月{}日 {:02}:{:02}",
        datetime.year(),
        u8::from(datetime.month()),
        datetime.day(),
        datetime.hour(),
        datetime.minute()
    )
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LabelTone {
    Red,
    Orange,
    Green,
    Neutral,
}

impl LabelTone {
    /// Background color for toned labels; neutral tags use the theme instead.
    pub fn color(self) -> Option<&'static str> {
        match self {
            LabelTone::Red => Some("#ff3b30"),
            LabelTone::Orange => Some("#ff9500"),
            LabelTone::Green => Some("#34c759"),
            LabelTone::Neutral => None,
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            LabelTone::Neutral => "record-label neutral",
            _ => "record-label toned",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordLabel {
    pub text: &'static str,
    pub tone: LabelTone,
}

pub fn record_label(record: &Record) -> Option<RecordLabel> {
    match record.details {
        RecordDetails::Message => None,
        RecordDetails::Bug {
            bug_type: Some(bug_type),
            priority,
        } => Some(RecordLabel {
            text: bug_type.as_str(),
            tone: match priority {
                Priority::High => LabelTone::Red,
                Priority::Medium => LabelTone::Orange,
                Priority::Low => LabelTone::Green,
            },
        }),
        RecordDetails::Chat {
            chat_type: Some(chat_type),
        } => Some(RecordLabel {
            text: chat_type.as_str(),
            tone: LabelTone::Neutral,
        }),
        RecordDetails::Bug { bug_type: None, .. } | RecordDetails::Chat { chat_type: None } => {
            None
        }
    }
}
