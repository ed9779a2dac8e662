//! Collaborator-boundary decoding for upstream fragrance payloads.
//!
//! The upstream catalogue API is loosely shaped: the result envelope may be
//! a bare array, an object keyed `"fragrances"` or `"data"`, or a single
//! record; field names vary between PascalCase (`"Name"`, `"Main Accords"`)
//! and snake_case; accord entries are bare strings or objects carrying
//! their own strength. This crate decodes all of those variants into the
//! canonical [`FragranceRecord`] once, at the boundary, so the core never
//! branches on field spellings.
//!
//! Malformed individual values degrade to defaults rather than aborting a
//! batch; only an unparseable or unrecognisable payload is an error.
//!
//! # Examples
//! ```
//! use sillage_data::decode_records;
//!
//! let payload = r#"{"data": [{"Name": "Cedar Walk", "Main Accords": ["Woody"]}]}"#;
//! let records = decode_records(payload).unwrap();
//! assert_eq!(records.first().map(|r| r.name.as_str()), Some("Cedar Walk"));
//! ```

#![forbid(unsafe_code)]

use std::collections::HashMap;

use log::{debug, warn};
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use sillage_core::{AccordStrength, FragranceRecord};


/// Errors raised while decoding an upstream payload.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The payload was not valid JSON at all.
    #[error("upstream payload is not valid JSON")]
    InvalidJson {
        /// Parse error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// The payload parsed as JSON but matched no known envelope shape.
    #[error("upstream payload shape is not recognised")]
    UnrecognisedShape {
        /// Deserialization error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
}

/// Result envelope variants observed from the upstream API.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Envelope {
    /// A bare array of records.
    List(Vec<RawRecord>),
    /// Records nested under a `"fragrances"` key.
    Fragrances { fragrances: Vec<RawRecord> },
    /// Records nested under a `"data"` key.
    Data { data: Vec<RawRecord> },
    /// A single record object, wrapped into a one-element batch.
    Single(Box<RawRecord>),
}

impl Envelope {
    fn into_raw_records(self) -> Vec<RawRecord> {
        match self {
            Self::List(records) => {
                debug!("decoded bare-array envelope");
                records
            }
            Self::Fragrances { fragrances } => {
                debug!("decoded 'fragrances' envelope");
                fragrances
            }
            Self::Data { data } => {
                debug!("decoded 'data' envelope");
                data
            }
            Self::Single(record) => {
                debug!("decoded single-record envelope");
                vec![*record]
            }
        }
    }
}

/// One record as the upstream spells it, before normalisation.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawRecord {
    #[serde(alias = "Name")]
    name: Option<String>,
    #[serde(alias = "Brand", alias = "Manufacturer")]
    brand: Option<String>,
    #[serde(
        rename = "main_accords",
        alias = "Main Accords",
        alias = "MainAccords"
    )]
    main_accords: Vec<RawAccord>,
    #[serde(
        rename = "main_accords_percentage",
        alias = "Main Accords Percentage",
        alias = "MainAccordsPercentage"
    )]
    accord_strengths: HashMap<String, String>,
}

/// Accord entries appear as bare names or as objects with a strength.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawAccord {
    Bare(String),
    Detailed {
        #[serde(alias = "Name")]
        name: String,
        #[serde(default, alias = "Strength")]
        strength: Option<String>,
    },
}

impl RawRecord {
    fn into_record(self) -> FragranceRecord {
        let mut record = FragranceRecord::new(
            self.name.unwrap_or_default(),
            self.brand.unwrap_or_default(),
        );
        // Sidecar descriptors first; a descriptor paired directly with an
        // accord entry takes precedence.
        for (accord, descriptor) in self.accord_strengths {
            insert_strength(&mut record, accord, &descriptor);
        }
        for accord in self.main_accords {
            match accord {
                RawAccord::Bare(name) => record.main_accords.push(name),
                RawAccord::Detailed { name, strength } => {
                    if let Some(descriptor) = strength {
                        insert_strength(&mut record, name.clone(), &descriptor);
                    }
                    record.main_accords.push(name);
                }
            }
        }
        record
    }
}

fn insert_strength(record: &mut FragranceRecord, accord: String, descriptor: &str) {
    match descriptor.parse::<AccordStrength>() {
        Ok(strength) => {
            record.accord_strengths.insert(accord, strength);
        }
        Err(_) => {
            // Vectorization falls back to the unspecified-strength weight.
            warn!("dropping unknown strength descriptor '{descriptor}' for accord '{accord}'");
        }
    }
}

/// Decode an upstream JSON payload into canonical records.
///
/// # Errors
/// Returns [`DecodeError::InvalidJson`] when the payload is not JSON, and
/// [`DecodeError::UnrecognisedShape`] when it matches no known envelope.
pub fn decode_records(payload: &str) -> Result<Vec<FragranceRecord>, DecodeError> {
    let value: Value =
        serde_json::from_str(payload).map_err(|source| DecodeError::InvalidJson { source })?;
    decode_value(value)
}

/// Decode an already-parsed JSON value into canonical records.
///
/// # Errors
/// Returns [`DecodeError::UnrecognisedShape`] when the value matches no
/// known envelope.
pub fn decode_value(value: Value) -> Result<Vec<FragranceRecord>, DecodeError> {
    let envelope: Envelope = serde_json::from_value(value)
        .map_err(|source| DecodeError::UnrecognisedShape { source })?;
    Ok(envelope
        .into_raw_records()
        .into_iter()
        .map(RawRecord::into_record)
        .collect())
}
