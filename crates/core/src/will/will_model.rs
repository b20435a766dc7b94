//! Will document models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::catalog::AssetCategory;

/// When the will may be shared with the people it names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ShareTiming {
    Anytime,
    Sickness,
    Death,
}

impl ShareTiming {
    /// Numeric code used by the will document.
    pub fn code(self) -> u8 {
        match self {
            ShareTiming::Anytime => 0,
            ShareTiming::Sickness => 1,
            ShareTiming::Death => 2,
        }
    }
}

/// One inheritor's share as written into the will.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ancestor {
    pub name: String,
    pub relation: String,
    pub ratio: Decimal,
}

/// An allocated asset and who inherits it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WillInheritance {
    #[serde(rename = "type")]
    pub category: AssetCategory,
    pub sub_type: String,
    /// Institution holding a finance asset
    pub financial_institution: Option<String>,
    /// Human-readable asset name or address
    pub asset: Option<String>,
    pub amount: Decimal,
    pub ancestors: Vec<Ancestor>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutorSummary {
    pub name: String,
    pub relation: String,
    pub priority: u32,
}

/// A last message addressed to someone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinalMessage {
    pub name: String,
    pub relation: String,
    pub message: String,
}

/// The finished will, ready for the submission layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WillDocument {
    pub inheritances: Vec<WillInheritance>,
    pub executors: Vec<ExecutorSummary>,
    pub final_messages: Vec<FinalMessage>,
    /// `ShareTiming::code`, or None when the user has not chosen
    pub share_at: Option<u8>,
    pub created_at: DateTime<Utc>,
}
