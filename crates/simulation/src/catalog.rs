//! Rate catalog: the immutable table of event streams.
//!
//! The catalog is parsed once at startup from embedded JSON and inserted as a
//! [`RateCatalog`] resource. Order matters: the orbital layout places items in
//! catalog order, so the heaviest streams land on the innermost ring.

use std::fmt;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::SECONDS_PER_DAY;

const BUILTIN_CATALOG_JSON: &str = include_str!("../data/causes.json");

// ---------------------------------------------------------------------------
// Color tags
// ---------------------------------------------------------------------------

/// Color family of an event stream, used by rendering to pick border and glow
/// colors from a lookup table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorTag {
    Red,
    Blue,
    Purple,
    Green,
    Orange,
    Pink,
    Cyan,
    Amber,
    Teal,
    Lime,
    Gray,
    Zinc,
    Rose,
    Black,
}

impl ColorTag {
    pub const COUNT: usize = 14;

    /// All tags in declaration order; `ALL[tag.index()] == tag`.
    pub const ALL: [ColorTag; Self::COUNT] = [
        Self::Red,
        Self::Blue,
        Self::Purple,
        Self::Green,
        Self::Orange,
        Self::Pink,
        Self::Cyan,
        Self::Amber,
        Self::Teal,
        Self::Lime,
        Self::Gray,
        Self::Zinc,
        Self::Rose,
        Self::Black,
    ];

    /// Dense index for table lookups.
    pub fn index(self) -> usize {
        self as usize
    }
}

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// Raw catalog row as stored in the JSON data file.
#[derive(Debug, Clone, Deserialize)]
struct CatalogRecord {
    id: String,
    label: String,
    icon: String,
    color: ColorTag,
    #[serde(default)]
    description: String,
    daily_rate: f64,
}

/// One named cause with a fixed occurrence rate.
#[derive(Debug, Clone, PartialEq)]
pub struct EventStream {
    pub id: String,
    pub label: String,
    pub icon: String,
    pub color_tag: ColorTag,
    pub description: String,
    pub daily_rate: f64,
    pub rate_per_second: f64,
}

impl EventStream {
    fn from_record(record: CatalogRecord) -> Self {
        Self {
            rate_per_second: record.daily_rate / SECONDS_PER_DAY,
            id: record.id,
            label: record.label,
            icon: record.icon,
            color_tag: record.color,
            description: record.description,
            daily_rate: record.daily_rate,
        }
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors produced while building a catalog from data.
#[derive(Debug)]
pub enum CatalogError {
    /// The data could not be parsed as a list of catalog records.
    Parse(String),
    /// The catalog contains no streams.
    Empty,
    /// Two streams share the same id.
    DuplicateId(String),
    /// A daily rate is negative or not finite.
    InvalidRate { id: String, rate: f64 },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Parse(msg) => write!(f, "Catalog parse error: {msg}"),
            CatalogError::Empty => write!(f, "Catalog contains no event streams"),
            CatalogError::DuplicateId(id) => write!(f, "Duplicate event stream id: {id}"),
            CatalogError::InvalidRate { id, rate } => {
                write!(f, "Invalid daily rate {rate} for event stream {id}")
            }
        }
    }
}

impl std::error::Error for CatalogError {}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        CatalogError::Parse(e.to_string())
    }
}

// ---------------------------------------------------------------------------
// Resource
// ---------------------------------------------------------------------------

/// Ordered, immutable list of event streams plus rates derived once at load.
#[derive(Resource, Debug, Clone, Default)]
pub struct RateCatalog {
    streams: Vec<EventStream>,
    aggregate_rate_per_second: f64,
    min_daily_rate: f64,
    max_daily_rate: f64,
}

impl RateCatalog {
    /// Parse and validate a catalog from a JSON array of records.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let records: Vec<CatalogRecord> = serde_json::from_str(json)?;
        if records.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut streams: Vec<EventStream> = Vec::with_capacity(records.len());
        for record in records {
            if !record.daily_rate.is_finite() || record.daily_rate < 0.0 {
                return Err(CatalogError::InvalidRate {
                    id: record.id,
                    rate: record.daily_rate,
                });
            }
            if streams.iter().any(|s| s.id == record.id) {
                return Err(CatalogError::DuplicateId(record.id));
            }
            streams.push(EventStream::from_record(record));
        }

        Ok(Self::from_streams(streams))
    }

    /// The catalog bundled with the binary.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json_str(BUILTIN_CATALOG_JSON)
    }

    fn from_streams(streams: Vec<EventStream>) -> Self {
        let aggregate_rate_per_second = streams.iter().map(|s| s.rate_per_second).sum();
        let min_daily_rate = streams
            .iter()
            .map(|s| s.daily_rate)
            .fold(f64::INFINITY, f64::min);
        let max_daily_rate = streams
            .iter()
            .map(|s| s.daily_rate)
            .fold(f64::NEG_INFINITY, f64::max);
        Self {
            streams,
            aggregate_rate_per_second,
            min_daily_rate,
            max_daily_rate,
        }
    }

    pub fn streams(&self) -> &[EventStream] {
        &self.streams
    }

    pub fn get(&self, index: usize) -> Option<&EventStream> {
        self.streams.get(index)
    }

    pub fn len(&self) -> usize {
        self.streams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.streams.is_empty()
    }

    /// Sum of every stream's per-second rate, computed once at load.
    pub fn aggregate_rate_per_second(&self) -> f64 {
        self.aggregate_rate_per_second
    }

    /// `(min, max)` daily rate across the catalog, used for item sizing.
    pub fn daily_rate_range(&self) -> (f64, f64) {
        if self.streams.is_empty() {
            (0.0, 0.0)
        } else {
            (self.min_daily_rate, self.max_daily_rate)
        }
    }
}
