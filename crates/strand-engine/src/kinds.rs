//! Per-kind draft builders.
//!
//! Each builder maps typed input to an unsigned `(kind, tags, content)`
//! draft; the engine's build pipeline does the rest. Option sets are
//! explicit structs with named optional fields, not free-form bags.
//!
//! Out of scope here: encrypted direct messages (symmetric encryption is an
//! external collaborator), emoji-set validation for reactions, and geohash
//! *encoding* — calendar builders accept a precomputed geohash string.

use rand::Rng;
use serde::Serialize;

use strand_core::{EventDraft, Tag};

use crate::engine::now_unix;
use crate::error::{EngineError, Result};

/// Profile metadata. Kind 0.
pub const KIND_METADATA: i64 = 0;
/// Plain text note. Kind 1.
pub const KIND_TEXT_NOTE: i64 = 1;
/// Relay recommendation. Kind 2.
pub const KIND_RECOMMEND_RELAY: i64 = 2;
/// Contact list. Kind 3.
pub const KIND_CONTACT_LIST: i64 = 3;
/// Event deletion request. Kind 5.
pub const KIND_DELETION: i64 = 5;
/// Reaction to another event. Kind 7.
pub const KIND_REACTION: i64 = 7;
/// Public channel message. Kind 42.
pub const KIND_CHANNEL_MESSAGE: i64 = 42;
/// Zap poll (NIP-69). Kind 6969.
pub const KIND_ZAP_POLL: i64 = 6969;
/// Date-based calendar event (NIP-52). Kind 31922.
pub const KIND_DATE_CALENDAR: i64 = 31_922;
/// Time-based calendar event (NIP-52). Kind 31923.
pub const KIND_TIME_CALENDAR: i64 = 31_923;

/// Profile metadata fields (NIP-01 / NIP-24). All optional; absent fields
/// are omitted from the serialized content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Metadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub about: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nip05: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lud16: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

/// Build a kind-0 metadata draft; the content is the JSON of the present
/// fields.
pub fn metadata(pubkey: &str, metadata: &Metadata) -> EventDraft {
    let content =
        serde_json::to_string(metadata).expect("metadata serialization failed");
    EventDraft::new(pubkey, now_unix(), KIND_METADATA, vec![], content)
}

/// Build a kind-1 text note draft.
pub fn text_note(pubkey: &str, text: &str) -> EventDraft {
    EventDraft::new(pubkey, now_unix(), KIND_TEXT_NOTE, vec![], text)
}

/// Build a kind-42 channel message draft referencing the channel's event id.
pub fn channel_message(pubkey: &str, text: &str, channel_id: &str) -> EventDraft {
    EventDraft::new(
        pubkey,
        now_unix(),
        KIND_CHANNEL_MESSAGE,
        vec![Tag::new(["e", channel_id])],
        text,
    )
}

/// Build a kind-2 relay recommendation draft.
///
/// The relay URL must be a websocket URL (`ws://` or `wss://`).
pub fn recommend_relay(pubkey: &str, relay_url: &str) -> Result<EventDraft> {
    if !relay_url.starts_with("wss://") && !relay_url.starts_with("ws://") {
        return Err(EngineError::InvalidArgument(format!(
            "relay url must start with ws:// or wss://, got {:?}",
            relay_url
        )));
    }
    Ok(EventDraft::new(
        pubkey,
        now_unix(),
        KIND_RECOMMEND_RELAY,
        vec![],
        relay_url,
    ))
}

/// One entry of a contact list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Contact {
    /// The contact's public key, 64 lowercase hex characters.
    pub pubkey: String,
    /// Preferred relay URL for this contact.
    pub relay: Option<String>,
    /// Local petname for this contact.
    pub petname: Option<String>,
}

impl Contact {
    /// A contact with just a pubkey.
    pub fn new(pubkey: impl Into<String>) -> Self {
        Self {
            pubkey: pubkey.into(),
            relay: None,
            petname: None,
        }
    }

    fn to_tag(&self) -> Tag {
        let mut parts = vec!["p".to_string(), self.pubkey.clone()];
        // Petname is positional, so an absent relay still occupies a slot.
        match (&self.relay, &self.petname) {
            (Some(relay), Some(petname)) => {
                parts.push(relay.clone());
                parts.push(petname.clone());
            }
            (Some(relay), None) => parts.push(relay.clone()),
            (None, Some(petname)) => {
                parts.push(String::new());
                parts.push(petname.clone());
            }
            (None, None) => {}
        }
        Tag(parts)
    }
}

/// Build a kind-3 contact list draft, one `p` tag per contact, in order.
pub fn contact_list(pubkey: &str, contacts: &[Contact]) -> EventDraft {
    let tags = contacts.iter().map(Contact::to_tag).collect();
    EventDraft::new(pubkey, now_unix(), KIND_CONTACT_LIST, tags, "")
}

/// Build a kind-5 deletion draft, one `e` tag per deleted event id.
pub fn deletion(pubkey: &str, event_ids: &[String], reason: &str) -> EventDraft {
    let tags = event_ids.iter().map(|id| Tag::new(["e", id])).collect();
    EventDraft::new(pubkey, now_unix(), KIND_DELETION, tags, reason)
}

/// Build a kind-7 reaction draft referencing the reacted-to event and its
/// author.
///
/// `reaction` is typically `"+"`, `"-"`, or an emoji; any non-empty string
/// is accepted (emoji-set validation is an external concern).
pub fn reaction(pubkey: &str, reaction: &str, event_id: &str, author: &str) -> Result<EventDraft> {
    if reaction.is_empty() {
        return Err(EngineError::InvalidArgument(
            "reaction must not be empty".to_string(),
        ));
    }
    if !is_hex_id(event_id) {
        return Err(EngineError::InvalidArgument(
            "reacted-to event id must be 64 hex characters".to_string(),
        ));
    }
    if !is_hex_id(author) {
        return Err(EngineError::InvalidArgument(
            "reacted-to author must be 64 hex characters".to_string(),
        ));
    }

    Ok(EventDraft::new(
        pubkey,
        now_unix(),
        KIND_REACTION,
        vec![Tag::new(["e", event_id]), Tag::new(["p", author])],
        reaction,
    ))
}

/// Optional zap poll settings (NIP-69).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PollConfig {
    /// Minimum satoshi amount per vote.
    pub value_minimum: Option<u64>,
    /// Maximum satoshi amount per vote.
    pub value_maximum: Option<u64>,
    /// Unix seconds after which the poll is closed.
    pub closed_at: Option<i64>,
    /// Parent note event id to link to.
    pub reference: Option<String>,
}

/// Build a kind-6969 zap poll draft with one `poll_option` tag per option.
///
/// Requires at least two options.
pub fn poll(
    pubkey: &str,
    content: &str,
    options: &[String],
    config: &PollConfig,
) -> Result<EventDraft> {
    if options.len() < 2 {
        return Err(EngineError::InvalidArgument(
            "a poll needs at least two options".to_string(),
        ));
    }

    let mut tags: Vec<Tag> = options
        .iter()
        .enumerate()
        .map(|(index, option)| Tag::new(["poll_option".to_string(), index.to_string(), option.clone()]))
        .collect();

    if let Some(min) = config.value_minimum {
        tags.push(Tag::new(["value_minimum".to_string(), min.to_string()]));
    }
    if let Some(max) = config.value_maximum {
        tags.push(Tag::new(["value_maximum".to_string(), max.to_string()]));
    }
    if let Some(closed_at) = config.closed_at {
        tags.push(Tag::new(["closed_at".to_string(), closed_at.to_string()]));
    }
    if let Some(reference) = &config.reference {
        tags.push(Tag::new(["e", reference]));
    }

    Ok(EventDraft::new(
        pubkey,
        now_unix(),
        KIND_ZAP_POLL,
        tags,
        content,
    ))
}

/// Shared optional details for calendar events (NIP-52).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CalendarDetails {
    /// Address, meeting room, or call link.
    pub location: Option<String>,
    /// Precomputed geohash of the venue.
    pub geohash: Option<String>,
    /// Participant pubkeys (64 hex characters each).
    pub participants: Vec<String>,
    /// Hashtags categorizing the event.
    pub hashtags: Vec<String>,
    /// Links to web pages, documents, recordings, etc.
    pub references: Vec<String>,
}

impl CalendarDetails {
    fn push_tags(&self, tags: &mut Vec<Tag>) {
        if let Some(location) = &self.location {
            tags.push(Tag::new(["location", location]));
        }
        if let Some(geohash) = &self.geohash {
            tags.push(Tag::new(["g", geohash]));
        }
        for participant in &self.participants {
            tags.push(Tag::new(["p", participant]));
        }
        for hashtag in &self.hashtags {
            tags.push(Tag::new(["t", hashtag]));
        }
        for reference in &self.references {
            tags.push(Tag::new(["r", reference]));
        }
    }
}

/// The time span of a time-based calendar event. Timestamps are Unix
/// seconds; time zone identifiers come from the IANA Time Zone Database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeWindow {
    /// Inclusive start.
    pub start: i64,
    /// Exclusive end.
    pub end: Option<i64>,
    /// Time zone of the start timestamp.
    pub start_tzid: Option<String>,
    /// Time zone of the end timestamp; defaults to `start_tzid`.
    pub end_tzid: Option<String>,
}

impl TimeWindow {
    /// A window starting at `start` with no end.
    pub fn starting_at(start: i64) -> Self {
        Self {
            start,
            end: None,
            start_tzid: None,
            end_tzid: None,
        }
    }
}

/// Build a kind-31923 time-based calendar event draft.
pub fn time_calendar(
    pubkey: &str,
    name: &str,
    content: &str,
    window: &TimeWindow,
    details: &CalendarDetails,
) -> Result<EventDraft> {
    if name.is_empty() {
        return Err(EngineError::InvalidArgument(
            "calendar event name must not be empty".to_string(),
        ));
    }

    let mut tags = vec![
        Tag::new(["d".to_string(), random_identifier()]),
        Tag::new(["name", name]),
        Tag::new(["start".to_string(), window.start.to_string()]),
    ];
    if let Some(tzid) = &window.start_tzid {
        tags.push(Tag::new(["start_tzid", tzid]));
    }
    if let Some(end) = window.end {
        tags.push(Tag::new(["end".to_string(), end.to_string()]));
        if let Some(tzid) = window.end_tzid.as_ref().or(window.start_tzid.as_ref()) {
            tags.push(Tag::new(["end_tzid", tzid]));
        }
    }
    details.push_tags(&mut tags);

    Ok(EventDraft::new(
        pubkey,
        now_unix(),
        KIND_TIME_CALENDAR,
        tags,
        content,
    ))
}

/// The date span of a date-based calendar event, ISO 8601 `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRange {
    /// Inclusive start date.
    pub start: String,
    /// Exclusive end date.
    pub end: Option<String>,
}

/// Build a kind-31922 date-based calendar event draft, for all-day or
/// multi-day events where time and time zone hold no significance.
pub fn date_calendar(
    pubkey: &str,
    name: &str,
    content: &str,
    dates: &DateRange,
    details: &CalendarDetails,
) -> Result<EventDraft> {
    if name.is_empty() {
        return Err(EngineError::InvalidArgument(
            "calendar event name must not be empty".to_string(),
        ));
    }
    if dates.start.is_empty() {
        return Err(EngineError::InvalidArgument(
            "calendar event start date must not be empty".to_string(),
        ));
    }

    let mut tags = vec![
        Tag::new(["d".to_string(), random_identifier()]),
        Tag::new(["name", name]),
        Tag::new(["start", dates.start.as_str()]),
    ];
    if let Some(end) = &dates.end {
        tags.push(Tag::new(["end", end]));
    }
    details.push_tags(&mut tags);

    Ok(EventDraft::new(
        pubkey,
        now_unix(),
        KIND_DATE_CALENDAR,
        tags,
        content,
    ))
}

fn is_hex_id(s: &str) -> bool {
    s.len() == 64 && s.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Random 32-hex-character `d`-tag identifier.
fn random_identifier() -> String {
    hex::encode(rand::thread_rng().gen::<[u8; 16]>())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pubkey() -> String {
        "ab".repeat(32)
    }

    #[test]
    fn test_metadata_content_omits_absent_fields() {
        let draft = metadata(
            &pubkey(),
            &Metadata {
                name: Some("alice".to_string()),
                about: Some("hi".to_string()),
                ..Metadata::default()
            },
        );

        assert_eq!(draft.kind, KIND_METADATA);
        let value: serde_json::Value = serde_json::from_str(&draft.content).unwrap();
        assert_eq!(value["name"], "alice");
        assert!(value.get("picture").is_none());
    }

    #[test]
    fn test_text_note_and_channel_message() {
        let note = text_note(&pubkey(), "hi");
        assert_eq!(note.kind, KIND_TEXT_NOTE);
        assert!(note.tags.is_empty());

        let channel = "cd".repeat(32);
        let msg = channel_message(&pubkey(), "hi", &channel);
        assert_eq!(msg.kind, KIND_CHANNEL_MESSAGE);
        assert_eq!(msg.tags[0], Tag::new(["e".to_string(), channel]));
    }

    #[test]
    fn test_recommend_relay_requires_websocket_url() {
        assert!(recommend_relay(&pubkey(), "wss://relay.example").is_ok());
        assert!(recommend_relay(&pubkey(), "ws://relay.example").is_ok());
        assert!(recommend_relay(&pubkey(), "https://relay.example").is_err());
    }

    #[test]
    fn test_contact_list_tags() {
        let contacts = vec![
            Contact::new("aa".repeat(32)),
            Contact {
                pubkey: "bb".repeat(32),
                relay: Some("wss://relay.example".to_string()),
                petname: Some("bob".to_string()),
            },
            Contact {
                pubkey: "cc".repeat(32),
                relay: None,
                petname: Some("carol".to_string()),
            },
        ];

        let draft = contact_list(&pubkey(), &contacts);
        assert_eq!(draft.kind, KIND_CONTACT_LIST);
        assert_eq!(draft.content, "");
        assert_eq!(draft.tags[0].len(), 2);
        assert_eq!(draft.tags[1].get(3), Some("bob"));
        // Relay slot stays positional when absent.
        assert_eq!(draft.tags[2].get(2), Some(""));
        assert_eq!(draft.tags[2].get(3), Some("carol"));
    }

    #[test]
    fn test_deletion_tags() {
        let ids = vec!["aa".repeat(32), "bb".repeat(32)];
        let draft = deletion(&pubkey(), &ids, "mistake");
        assert_eq!(draft.kind, KIND_DELETION);
        assert_eq!(draft.content, "mistake");
        assert_eq!(draft.tags.len(), 2);
        assert_eq!(draft.tags[1], Tag::new(["e".to_string(), "bb".repeat(32)]));
    }

    #[test]
    fn test_reaction_validates_references() {
        let event_id = "aa".repeat(32);
        let author = "bb".repeat(32);

        let draft = reaction(&pubkey(), "+", &event_id, &author).unwrap();
        assert_eq!(draft.kind, KIND_REACTION);
        assert_eq!(draft.content, "+");
        assert_eq!(draft.tags.len(), 2);

        assert!(reaction(&pubkey(), "", &event_id, &author).is_err());
        assert!(reaction(&pubkey(), "+", "short", &author).is_err());
        assert!(reaction(&pubkey(), "+", &event_id, "short").is_err());
    }

    #[test]
    fn test_poll_requires_two_options() {
        let one = vec!["yes".to_string()];
        assert!(poll(&pubkey(), "ok?", &one, &PollConfig::default()).is_err());
    }

    #[test]
    fn test_poll_tags() {
        let options = vec!["yes".to_string(), "no".to_string()];
        let config = PollConfig {
            value_minimum: Some(10),
            value_maximum: Some(100),
            closed_at: Some(1_800_000_000),
            reference: Some("aa".repeat(32)),
        };

        let draft = poll(&pubkey(), "ok?", &options, &config).unwrap();
        assert_eq!(draft.kind, KIND_ZAP_POLL);
        assert_eq!(
            draft.tags[0],
            Tag::new(["poll_option", "0", "yes"])
        );
        assert_eq!(
            draft.tags[1],
            Tag::new(["poll_option", "1", "no"])
        );
        assert_eq!(draft.tags[2], Tag::new(["value_minimum", "10"]));
        assert_eq!(draft.tags[3], Tag::new(["value_maximum", "100"]));
        assert_eq!(draft.tags[4], Tag::new(["closed_at", "1800000000"]));
        assert_eq!(draft.tags[5].name(), Some("e"));
    }

    #[test]
    fn test_time_calendar_tags() {
        let window = TimeWindow {
            start: 1_700_000_000,
            end: Some(1_700_003_600),
            start_tzid: Some("Europe/Paris".to_string()),
            end_tzid: None,
        };
        let details = CalendarDetails {
            location: Some("Room 2".to_string()),
            geohash: Some("u09tvw".to_string()),
            participants: vec!["aa".repeat(32)],
            hashtags: vec!["meetup".to_string()],
            references: vec!["https://example.org".to_string()],
        };

        let draft =
            time_calendar(&pubkey(), "sync", "weekly sync", &window, &details).unwrap();
        assert_eq!(draft.kind, KIND_TIME_CALENDAR);

        let names: Vec<_> = draft.tags.iter().filter_map(Tag::name).collect();
        assert_eq!(
            names,
            [
                "d", "name", "start", "start_tzid", "end", "end_tzid", "location", "g",
                "p", "t", "r"
            ]
        );
        // end_tzid falls back to start_tzid.
        let end_tzid = draft.tags.iter().find(|t| t.name() == Some("end_tzid"));
        assert_eq!(end_tzid.unwrap().get(1), Some("Europe/Paris"));
    }

    #[test]
    fn test_time_calendar_requires_name() {
        let window = TimeWindow::starting_at(1_700_000_000);
        assert!(
            time_calendar(&pubkey(), "", "x", &window, &CalendarDetails::default()).is_err()
        );
    }

    #[test]
    fn test_date_calendar_tags() {
        let dates = DateRange {
            start: "2026-09-01".to_string(),
            end: Some("2026-09-03".to_string()),
        };

        let draft = date_calendar(
            &pubkey(),
            "offsite",
            "team offsite",
            &dates,
            &CalendarDetails::default(),
        )
        .unwrap();

        assert_eq!(draft.kind, KIND_DATE_CALENDAR);
        let start = draft.tags.iter().find(|t| t.name() == Some("start")).unwrap();
        assert_eq!(start.get(1), Some("2026-09-01"));
        let end = draft.tags.iter().find(|t| t.name() == Some("end")).unwrap();
        assert_eq!(end.get(1), Some("2026-09-03"));
        // Fresh d-tag identifier per draft.
        let d = draft.tags[0].get(1).unwrap();
        assert_eq!(d.len(), 32);
    }

    #[test]
    fn test_date_calendar_requires_start() {
        let dates = DateRange {
            start: String::new(),
            end: None,
        };
        assert!(date_calendar(&pubkey(), "x", "x", &dates, &CalendarDetails::default()).is_err());
    }
}
