use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;

/// An integer field that may be "not a number".
///
/// Kept distinct from `Option<i64>` so a counter that could not be read is
/// never confused with zero or with the nullable page-level fields. JSON has
/// no NaN literal, so `NotANumber` is written as `null`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Numeric {
    Value(i64),
    #[default]
    NotANumber,
}

impl Numeric {
    pub fn is_nan(self) -> bool {
        matches!(self, Numeric::NotANumber)
    }
}

impl From<Option<i64>> for Numeric {
    fn from(value: Option<i64>) -> Self {
        value.map_or(Numeric::NotANumber, Numeric::Value)
    }
}

impl Serialize for Numeric {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Numeric::Value(v) => serializer.serialize_i64(*v),
            Numeric::NotANumber => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for Numeric {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Option::<i64>::deserialize(deserializer)?.into())
    }
}

/// The hotel's reply to a review. All three fields are present or none are.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseDetails {
    #[serde(rename = "ResponderName")]
    pub responder_name: Option<String>,

    #[serde(rename = "ResponseDate")]
    pub response_date: Option<String>,

    #[serde(rename = "ResponseText")]
    pub response_text: Option<String>,
}

impl ResponseDetails {
    pub fn is_empty(&self) -> bool {
        self.responder_name.is_none()
            && self.response_date.is_none()
            && self.response_text.is_none()
    }
}

/// One review, flattened with the page-level hotel fields it was found under.
///
/// Field order here is the key order on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewRecord {
    /// Source URL (live mode) or file name (cached mode)
    pub link: String,

    #[serde(rename = "HotelName")]
    pub hotel_name: Option<String>,

    #[serde(rename = "HotelAddress")]
    pub hotel_address: Option<String>,

    #[serde(rename = "CountReviews")]
    pub review_count: Option<i64>,

    #[serde(rename = "ReviewerName")]
    pub reviewer_name: String,

    #[serde(rename = "ReviewerProfile")]
    pub reviewer_profile_url: String,

    #[serde(rename = "ReviewID")]
    pub review_id: Numeric,

    #[serde(rename = "ReviewDate")]
    pub review_date: String,

    #[serde(rename = "ReviewerLocation")]
    pub reviewer_location: String,

    #[serde(rename = "ReviewerContribution")]
    pub reviewer_contributions: Numeric,

    #[serde(rename = "ReviewHelpfulVotes")]
    pub helpful_votes: Numeric,

    #[serde(rename = "ReviewStar")]
    pub star_rating: Numeric,

    #[serde(rename = "ReviewText")]
    pub review_text: Option<String>,

    #[serde(rename = "DateOfStay")]
    pub date_of_stay: Option<String>,

    #[serde(rename = "TripType")]
    pub trip_type: Option<String>,

    /// Category label plus `Score` mapped to the decoded star value
    #[serde(rename = "RatingsDetail")]
    pub ratings_detail: BTreeMap<String, Numeric>,

    #[serde(rename = "ResponseDetails")]
    pub response_details: ResponseDetails,
}

/// Counts reported at the end of a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    /// Items taken from the input list
    pub items: usize,
    /// Items that could not be fetched and were skipped
    pub skipped: usize,
    /// Lines written to the output (records, or URLs in paginate mode)
    pub emitted: usize,
}
