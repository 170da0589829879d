// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! This module contains the definition of the barcode ID data type.

use serde::{Deserialize, Serialize, de::Deserializer, ser::Serializer};
use snafu::prelude::*;

/// Number of digits in a UPC-A barcode.
const UPC_A_LENGTH: usize = 12;

/// Number of digits in an EAN-13 barcode.
const EAN_13_LENGTH: usize = 13;

/// Describes an error occured during parsing a barcode.
#[derive(Debug, Eq, PartialEq, Snafu)]
pub enum ParseBarcodeError {
    /// The barcode did not consist of digits only.
    #[snafu(display("The barcode `{string}` contains characters other than digits"))]
    Digit { string: String },

    /// Length of the barcode was neither 12 nor 13.
    #[snafu(display("The barcode `{string}` has wrong length (expected 12 or 13 digits)"))]
    Length { string: String },
}

impl ParseBarcodeError {
    pub fn digit(string: String) -> Self {
        Self::Digit { string }
    }

    pub fn length(string: String) -> Self {
        Self::Length { string }
    }
}

/// Distinguishes the two accepted barcode formats.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum BarcodeKind {
    /// 12-digit UPC-A.
    UpcA,

    /// 13-digit EAN-13.
    Ean13,
}

/// Represents a validated UPC-A or EAN-13 barcode.
///
/// The digits are kept as a string because leading zeros are significant.
#[derive(Debug, Clone, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct Barcode(String);

impl Barcode {
    /// Strips whitespace and hyphens from raw barcode input.
    #[must_use]
    pub fn normalize(input: &str) -> String {
        input.chars().filter(|c| !c.is_whitespace() && *c != '-').collect()
    }

    /// Checks if the passed string is exactly 12 or 13 decimal digits after normalization.
    #[must_use]
    pub fn is_valid_format(input: &str) -> bool {
        let normalized = Self::normalize(input);
        matches!(normalized.len(), UPC_A_LENGTH | EAN_13_LENGTH)
            && normalized.bytes().all(|b| b.is_ascii_digit())
    }

    /// Returns the digits as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    #[must_use]
    pub fn kind(&self) -> BarcodeKind {
        if self.0.len() == UPC_A_LENGTH { BarcodeKind::UpcA } else { BarcodeKind::Ean13 }
    }

    /// Verifies the mod-10 weighted check digit.
    ///
    /// Digits are weighted alternately 1 and 3 starting from the first digit and the check
    /// digit must equal `(10 - sum % 10) % 10`. This is a data-quality check only: barcodes
    /// failing it are still accepted by the scanning flow.
    #[must_use]
    pub fn checksum_valid(&self) -> bool {
        let digits: Vec<u32> = self.0.chars().filter_map(|c| c.to_digit(10)).collect();
        let Some((check, body)) = digits.split_last() else {
            return false;
        };
        let sum: u32 =
            body.iter().enumerate().map(|(i, d)| if i % 2 == 0 { *d } else { 3 * d }).sum();
        (10 - sum % 10) % 10 == *check
    }
}

impl std::fmt::Display for Barcode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<&str> for Barcode {
    type Error = ParseBarcodeError;

    fn try_from(string: &str) -> Result<Self, Self::Error> {
        let normalized = Self::normalize(string);
        if !normalized.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseBarcodeError::digit(normalized));
        }
        if !matches!(normalized.len(), UPC_A_LENGTH | EAN_13_LENGTH) {
            return Err(ParseBarcodeError::length(normalized));
        }
        Ok(Self(normalized))
    }
}

impl TryFrom<&String> for Barcode {
    type Error = ParseBarcodeError;

    fn try_from(string: &String) -> Result<Self, Self::Error> {
        Self::try_from(string.as_str())
    }
}

impl Serialize for Barcode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Barcode {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let s = String::deserialize(d)?;
        Self::try_from(s.as_str()).map_err(serde::de::Error::custom)
    }
}
