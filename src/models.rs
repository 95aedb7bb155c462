// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::StoreError;

/// Aggregate root. Deleting a trip cascades to its places, expenses and
/// voice notes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trip {
    pub id: i64,
    pub name: String,
    pub destination: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub notes: Option<String>,
}

/// Itinerary stop, scheduled on a zero-based day of its trip. Times are
/// optional; a place without both start and end never takes part in the
/// overlap check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Place {
    pub id: i64,
    pub trip_id: i64,
    pub name: String,
    pub day_index: i64,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub latitude: f64,
    pub longitude: f64,
    pub notes: Option<String>,
}

/// Monetary record, always stored in Thai baht. When the amount was entered
/// in another currency the original amount/currency and the rate used are
/// kept alongside.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    pub id: i64,
    pub trip_id: i64,
    pub amount_thb: Decimal,
    pub category: String,
    pub note: Option<String>,
    pub created_at: NaiveDateTime,
    pub original_amount: Option<Decimal>,
    pub original_currency: Option<String>,
    pub fx_rate_used: Option<Decimal>,
    pub attachment_path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoiceNote {
    pub id: i64,
    pub trip_id: i64,
    pub place_id: Option<i64>,
    pub audio_path: String,
    pub transcript: Option<String>,
    pub language: String,
    pub created_at: NaiveDateTime,
    pub status: VoiceNoteStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoiceNoteStatus {
    Recorded,
    Transcribed,
}

impl VoiceNoteStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            VoiceNoteStatus::Recorded => "recorded",
            VoiceNoteStatus::Transcribed => "transcribed",
        }
    }
}

impl FromStr for VoiceNoteStatus {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "recorded" => Ok(VoiceNoteStatus::Recorded),
            "transcribed" => Ok(VoiceNoteStatus::Transcribed),
            other => Err(StoreError::BadColumn {
                column: "status",
                value: other.to_string(),
            }),
        }
    }
}

/// Installed offline bundle; metadata only, the payload lives at file_path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataPack {
    pub id: i64,
    pub name: String,
    pub version: String,
    pub r#type: PackType,
    pub file_path: String,
    pub installed_at: NaiveDateTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackType {
    Poi,
    Map,
    Asr,
    Fx,
}

impl PackType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PackType::Poi => "poi",
            PackType::Map => "map",
            PackType::Asr => "asr",
            PackType::Fx => "fx",
        }
    }
}

impl FromStr for PackType {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "poi" => Ok(PackType::Poi),
            "map" => Ok(PackType::Map),
            "asr" => Ok(PackType::Asr),
            "fx" => Ok(PackType::Fx),
            other => Err(StoreError::BadColumn {
                column: "type",
                value: other.to_string(),
            }),
        }
    }
}
