//! Fitting records and their coded enums.
//!
//! The upstream inventory encodes kind, status, and permission as small
//! integers; the JSON field names follow that source (`fittingId`,
//! `isfavorite`, ...). Decoding rejects codes outside the known tables
//! instead of guessing a fallback.

use serde::{Deserialize, Serialize};

use crate::door::DoorKind;

/// Error for a numeric code outside the known table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("unknown {field} code {code}")]
pub struct InvalidCode {
    /// Which coded field the value came from.
    pub field: &'static str,
    /// The rejected code.
    pub code: u8,
}

/// Kind of motorized fitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum FittingKind {
    /// Roller shutter.
    Shutter,
    /// Door with automatic locking.
    DoorAutoLock,
    /// Door without automatic locking.
    DoorManualLock,
}

impl FittingKind {
    /// Display label, from the upstream label table.
    pub fn label(self) -> &'static str {
        match self {
            FittingKind::Shutter => "シャッター",
            FittingKind::DoorAutoLock => "ドア(自動施錠あり)",
            FittingKind::DoorManualLock => "ドア(自動施錠なし)",
        }
    }

    /// Which operation panel this fitting gets.
    pub fn door_kind(self) -> DoorKind {
        match self {
            FittingKind::Shutter => DoorKind::Shutter,
            FittingKind::DoorAutoLock | FittingKind::DoorManualLock => DoorKind::Door,
        }
    }

    pub fn code(self) -> u8 {
        self.into()
    }
}

impl TryFrom<u8> for FittingKind {
    type Error = InvalidCode;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(FittingKind::Shutter),
            1 => Ok(FittingKind::DoorAutoLock),
            2 => Ok(FittingKind::DoorManualLock),
            _ => Err(InvalidCode {
                field: "fittingType",
                code,
            }),
        }
    }
}

impl From<FittingKind> for u8 {
    fn from(kind: FittingKind) -> u8 {
        match kind {
            FittingKind::Shutter => 0,
            FittingKind::DoorAutoLock => 1,
            FittingKind::DoorManualLock => 2,
        }
    }
}

/// Open/closed/locked state of a fitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum FittingStatus {
    FullyOpen,
    FullyClosed,
    Intermediate,
    Unlocked,
    Locked,
}

impl FittingStatus {
    /// Display label, from the upstream label table.
    pub fn label(self) -> &'static str {
        match self {
            FittingStatus::FullyOpen => "全開",
            FittingStatus::FullyClosed => "全閉",
            FittingStatus::Intermediate => "中間",
            FittingStatus::Unlocked => "開錠",
            FittingStatus::Locked => "施錠",
        }
    }

    pub fn code(self) -> u8 {
        self.into()
    }
}

impl TryFrom<u8> for FittingStatus {
    type Error = InvalidCode;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(FittingStatus::FullyOpen),
            1 => Ok(FittingStatus::FullyClosed),
            2 => Ok(FittingStatus::Intermediate),
            3 => Ok(FittingStatus::Unlocked),
            4 => Ok(FittingStatus::Locked),
            _ => Err(InvalidCode {
                field: "status",
                code,
            }),
        }
    }
}

impl From<FittingStatus> for u8 {
    fn from(status: FittingStatus) -> u8 {
        match status {
            FittingStatus::FullyOpen => 0,
            FittingStatus::FullyClosed => 1,
            FittingStatus::Intermediate => 2,
            FittingStatus::Unlocked => 3,
            FittingStatus::Locked => 4,
        }
    }
}

/// What the signed-in operator may do with a fitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Permission {
    FullControl,
    GrantPermission,
    OpenCloseOnly,
}

impl Permission {
    /// Display label, from the upstream label table.
    pub fn label(self) -> &'static str {
        match self {
            Permission::FullControl => "フルコントロール",
            Permission::GrantPermission => "権限付与",
            Permission::OpenCloseOnly => "開閉のみ",
        }
    }

    pub fn code(self) -> u8 {
        self.into()
    }
}

impl TryFrom<u8> for Permission {
    type Error = InvalidCode;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Permission::FullControl),
            1 => Ok(Permission::GrantPermission),
            2 => Ok(Permission::OpenCloseOnly),
            _ => Err(InvalidCode {
                field: "fittingPermissionName",
                code,
            }),
        }
    }
}

impl From<Permission> for u8 {
    fn from(permission: Permission) -> u8 {
        match permission {
            Permission::FullControl => 0,
            Permission::GrantPermission => 1,
            Permission::OpenCloseOnly => 2,
        }
    }
}

/// One motorized door or shutter in the station inventory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fitting {
    pub fitting_id: u32,
    pub device_id: String,
    pub fitting_name: String,
    pub area: String,
    pub detail_location: String,
    pub station_building_name: String,
    #[serde(rename = "fittingType")]
    pub kind: FittingKind,
    pub status: FittingStatus,
    #[serde(rename = "fittingPermissionName")]
    pub permission: Permission,
    #[serde(rename = "isfavorite", with = "int_bool")]
    pub favorite: bool,
}

/// The source marks favorites with 0/1 integers rather than booleans.
mod int_bool {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(u8::from(*value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        Ok(u8::deserialize(deserializer)? != 0)
    }
}
