//! Share models: the persisted file-share record, the unified raw share,
//! and the formatted review entry.

use serde::{Deserialize, Serialize};

/// Kind of share, carried on the wire as its numeric type code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub enum ShareType {
    /// Direct share with another user.
    User,
    /// Share with a group.
    Group,
    /// Public link, addressed by token.
    Link,
    /// Share by e-mail address.
    Email,
    /// Federated share with a remote server user.
    Remote,
    /// Share with a circle (team).
    Circle,
    /// Share with a guest account.
    Guest,
    /// Federated share with a remote group.
    RemoteGroup,
    /// Share into a chat room.
    Room,
    /// Share onto a deck board.
    Board,
    /// Any code not known here, carried through unchanged.
    Other(i32),
}

/// Which external name resolver handles a share type's identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResolverKind {
    /// User accounts.
    User,
    /// Groups.
    Group,
    /// Chat rooms.
    Room,
    /// Deck boards.
    Board,
    /// Circles.
    Circle,
}

impl ShareType {
    /// Numeric type code as it appears in the review feed.
    pub fn code(self) -> i32 {
        match self {
            Self::User => 0,
            Self::Group => 1,
            Self::Link => 3,
            Self::Email => 4,
            Self::Remote => 6,
            Self::Circle => 7,
            Self::Guest => 8,
            Self::RemoteGroup => 9,
            Self::Room => 10,
            Self::Board => 12,
            Self::Other(code) => code,
        }
    }

    /// The resolver responsible for this type's identifiers.
    ///
    /// `None` means the identifier is already the display value (e-mail)
    /// or there is nothing better to show than the raw identifier.
    pub fn resolver(self) -> Option<ResolverKind> {
        match self {
            Self::User | Self::Guest => Some(ResolverKind::User),
            Self::Group => Some(ResolverKind::Group),
            Self::Room => Some(ResolverKind::Room),
            Self::Board => Some(ResolverKind::Board),
            Self::Circle => Some(ResolverKind::Circle),
            Self::Email | Self::Link | Self::Remote | Self::RemoteGroup | Self::Other(_) => None,
        }
    }

    /// Prefix of the full file-share id (`<prefix>:<id>`) for this type.
    pub fn file_action_prefix(self) -> &'static str {
        match self {
            Self::Email => "ocMailShare",
            Self::Remote | Self::RemoteGroup => "ocFederatedSharing",
            Self::Room => "ocRoomShare",
            Self::Circle => "ocCircleShare",
            Self::Board => "deck",
            Self::User | Self::Group | Self::Link | Self::Guest | Self::Other(_) => "ocinternal",
        }
    }
}

impl From<i32> for ShareType {
    fn from(code: i32) -> Self {
        match code {
            0 => Self::User,
            1 => Self::Group,
            3 => Self::Link,
            4 => Self::Email,
            6 => Self::Remote,
            7 => Self::Circle,
            8 => Self::Guest,
            9 => Self::RemoteGroup,
            10 => Self::Room,
            12 => Self::Board,
            other => Self::Other(other),
        }
    }
}

impl From<ShareType> for i32 {
    fn from(share_type: ShareType) -> i32 {
        share_type.code()
    }
}

/// A file share as persisted by the file-share backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileShareRecord {
    /// Backend share identifier (numeric in most stores).
    pub id: String,
    /// Type of share.
    pub share_type: ShareType,
    /// User who created the share; owns the folder the file lives in.
    pub initiator: String,
    /// Share target (user, group, address, room...). Empty for links.
    #[serde(default)]
    pub share_with: Option<String>,
    /// Access token for link shares.
    #[serde(default)]
    pub token: Option<String>,
    /// Identifier of the shared file or folder.
    pub file_id: String,
    /// Permission bitmask.
    pub permissions: u32,
    /// Whether the share is password protected.
    #[serde(default)]
    pub has_password: bool,
    /// Expiration as unix timestamp.
    #[serde(default)]
    pub expiration: Option<i64>,
    /// Creation time as unix timestamp.
    pub time: i64,
}

impl FileShareRecord {
    /// Full id understood by the backend, e.g. `ocMailShare:42`.
    pub fn full_id(&self) -> String {
        format!("{}:{}", self.share_type.file_action_prefix(), self.id)
    }

    /// The recipient shown in the feed: the token for links, the target otherwise.
    pub fn recipient(&self) -> String {
        let recipient = match self.share_type {
            ShareType::Link => self.token.as_deref(),
            _ => self.share_with.as_deref(),
        };
        recipient.unwrap_or_default().to_string()
    }
}

/// A share from any provider, unified into one shape.
///
/// `app` and `action` together address the share for deletion. Sources may
/// leave both empty; the aggregator tags them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawShare {
    /// Identifier, unique within `app`.
    pub id: String,
    /// Owning app namespace.
    #[serde(default)]
    pub app: String,
    /// Type-specific action used to build the composite token.
    #[serde(default)]
    pub action: String,
    /// Type of share.
    pub share_type: ShareType,
    /// Human-readable object description (path, board title...).
    #[serde(default)]
    pub object: String,
    /// Initiator identifier.
    pub initiator: String,
    /// Recipient identifier (token for links).
    #[serde(default)]
    pub recipient: String,
    /// Permission bitmask.
    #[serde(default)]
    pub permissions: u32,
    /// Whether the share is password protected.
    #[serde(default)]
    pub has_password: bool,
    /// Expiration as unix timestamp.
    #[serde(default)]
    pub expiration: Option<i64>,
    /// Creation time as unix timestamp.
    pub time: i64,
}

/// One entry of the review feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedShare {
    /// App display name.
    pub app: String,
    /// Object description.
    pub object: String,
    /// Initiator display name.
    pub initiator: String,
    /// `<type-code>;<recipient-display-name>`.
    #[serde(rename = "type")]
    pub share_type: String,
    /// `<perm>;<password-or-empty>;<expiration-or-empty>`.
    pub permissions: String,
    /// Creation time, ISO-8601.
    pub time: String,
    /// Composite action token, `<app>_<url-encoded action>`.
    pub action: String,
}

/// A filesystem node matched by id inside an owner's folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRef {
    /// Path relative to the owner's root folder.
    pub path: String,
}
