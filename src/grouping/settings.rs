use serde::{Deserialize, Serialize};
use tracing::debug;

/// Album attribute used to bucket albums into nested groups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupField {
    Artist,
    Genre,
    Label,
    Year,
    Month,
    Week,
    AddedAt,
}

impl GroupField {
    pub const ALL: [GroupField; 7] = [
        GroupField::Artist,
        GroupField::Genre,
        GroupField::Label,
        GroupField::Year,
        GroupField::Month,
        GroupField::Week,
        GroupField::AddedAt,
    ];

    pub fn code(self) -> i64 {
        self as i64
    }

    pub fn from_code(code: i64) -> Option<Self> {
        usize::try_from(code)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
    }

    pub fn label(self) -> &'static str {
        match self {
            GroupField::Artist => "Artist",
            GroupField::Genre => "Genre",
            GroupField::Label => "Label",
            GroupField::Year => "Year",
            GroupField::Month => "Month",
            GroupField::Week => "Week",
            GroupField::AddedAt => "Added",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortField {
    OriginalDate,
    ReleaseDate,
    AddedAt,
    Artist,
    Album,
    TrackCount,
    Label,
}

impl SortField {
    pub const ALL: [SortField; 7] = [
        SortField::OriginalDate,
        SortField::ReleaseDate,
        SortField::AddedAt,
        SortField::Artist,
        SortField::Album,
        SortField::TrackCount,
        SortField::Label,
    ];

    pub fn code(self) -> i64 {
        self as i64
    }

    pub fn from_code(code: i64) -> Option<Self> {
        usize::try_from(code)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
    }

    pub fn label(self) -> &'static str {
        match self {
            SortField::OriginalDate => "Original Date",
            SortField::ReleaseDate => "Release Date",
            SortField::AddedAt => "Date Added",
            SortField::Artist => "Artist",
            SortField::Album => "Album",
            SortField::TrackCount => "Tracks",
            SortField::Label => "Label",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn code(self) -> i64 {
        self as i64
    }

    /// Anything that isn't 1 reads as ascending
    pub fn from_code(code: i64) -> Self {
        if code == 1 {
            SortOrder::Descending
        } else {
            SortOrder::Ascending
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            SortOrder::Ascending => "↑",
            SortOrder::Descending => "↓",
        }
    }
}

/// Which date feeds Year/Month/Week grouping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateFieldType {
    /// Original date if present, release date otherwise
    #[default]
    Best,
    Original,
    Release,
    Added,
}

impl DateFieldType {
    pub const ALL: [DateFieldType; 4] = [
        DateFieldType::Best,
        DateFieldType::Original,
        DateFieldType::Release,
        DateFieldType::Added,
    ];

    pub fn code(self) -> i64 {
        self as i64
    }

    pub fn from_code(code: i64) -> Self {
        usize::try_from(code)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
            .unwrap_or_default()
    }

    pub fn next(self) -> Self {
        Self::from_code((self.code() + 1) % Self::ALL.len() as i64)
    }

    pub fn label(self) -> &'static str {
        match self {
            DateFieldType::Best => "Best Date",
            DateFieldType::Original => "Original Date",
            DateFieldType::Release => "Release Date",
            DateFieldType::Added => "Date Added",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortCriterion {
    pub field: SortField,
    pub order: SortOrder,
}

impl SortCriterion {
    pub fn new(field: SortField, order: SortOrder) -> Self {
        Self { field, order }
    }
}

/// Grouping + sorting configuration for the album view 🗂️
///
/// Duplicate fields are tolerated: each occurrence is just another level or key.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Settings {
    /// Preset name, when these settings came from one
    pub name: Option<String>,
    pub group_fields: Vec<GroupField>,
    pub group_sort_order: SortOrder,
    pub group_date_field: DateFieldType,
    pub sort_criteria: Vec<SortCriterion>,
}

// On-disk shapes. Enums travel as integers.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct StoredSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    group_fields: Vec<i64>,
    group_sort_order: i64,
    group_date_field: i64,
    sort_criteria: Vec<StoredCriterion>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct StoredCriterion {
    field: i64,
    order: i64,
}

fn decode_group_fields(codes: &[i64]) -> Vec<GroupField> {
    codes
        .iter()
        .filter_map(|&c| {
            let field = GroupField::from_code(c);
            if field.is_none() {
                debug!("Dropping unknown group field code {}", c);
            }
            field
        })
        .collect()
}

fn decode_criteria(stored: &[StoredCriterion]) -> Vec<SortCriterion> {
    stored
        .iter()
        .filter_map(|c| {
            SortField::from_code(c.field)
                .map(|field| SortCriterion::new(field, SortOrder::from_code(c.order)))
        })
        .collect()
}

fn encode_criteria(criteria: &[SortCriterion]) -> Vec<StoredCriterion> {
    criteria
        .iter()
        .map(|c| StoredCriterion {
            field: c.field.code(),
            order: c.order.code(),
        })
        .collect()
}

impl Settings {
    pub fn new(group_fields: Vec<GroupField>, sort_criteria: Vec<SortCriterion>) -> Self {
        Self {
            group_fields,
            sort_criteria,
            ..Default::default()
        }
    }

    pub fn named(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn with_group_order(mut self, order: SortOrder) -> Self {
        self.group_sort_order = order;
        self
    }

    pub fn with_date_field(mut self, field: DateFieldType) -> Self {
        self.group_date_field = field;
        self
    }

    /// Combined JSON form (current format)
    pub fn to_json(&self) -> String {
        let stored = StoredSettings {
            name: self.name.clone(),
            group_fields: self.group_fields.iter().map(|f| f.code()).collect(),
            group_sort_order: self.group_sort_order.code(),
            group_date_field: self.group_date_field.code(),
            sort_criteria: encode_criteria(&self.sort_criteria),
        };
        serde_json::to_string(&stored).unwrap_or_default()
    }

    /// Bare sort-criteria array, as the old format kept it in its own column
    pub fn sort_criteria_json(&self) -> String {
        serde_json::to_string(&encode_criteria(&self.sort_criteria)).unwrap_or_default()
    }

    /// Both stored columns: (group column, sort column)
    pub fn encode(&self) -> (String, String) {
        (self.to_json(), self.sort_criteria_json())
    }

    /// Decode from the two stored columns. Never fails.
    ///
    /// `group_column` holds either the combined settings object or, in the
    /// old format, a bare array of group field codes with the criteria in
    /// `sort_column`. The combined object is only trusted when it carries
    /// sort criteria; otherwise both columns are read the old way.
    pub fn decode(group_column: &str, sort_column: &str) -> Self {
        match serde_json::from_str::<StoredSettings>(group_column) {
            Ok(stored) if !stored.sort_criteria.is_empty() => {
                return Self {
                    name: stored.name,
                    group_fields: decode_group_fields(&stored.group_fields),
                    group_sort_order: SortOrder::from_code(stored.group_sort_order),
                    group_date_field: DateFieldType::from_code(stored.group_date_field),
                    sort_criteria: decode_criteria(&stored.sort_criteria),
                };
            }
            Ok(_) => debug!("Settings object has no sort criteria, reading legacy columns"),
            Err(e) => debug!("Settings are not in combined format: {}", e),
        }

        let group_codes: Vec<i64> = serde_json::from_str(group_column).unwrap_or_default();
        let criteria: Vec<StoredCriterion> = serde_json::from_str(sort_column).unwrap_or_default();

        Self {
            group_fields: decode_group_fields(&group_codes),
            sort_criteria: decode_criteria(&criteria),
            ..Default::default()
        }
    }

    pub fn from_json(json: &str) -> Self {
        Self::decode(json, "")
    }

    /// "Genre › Year" style summary for headers and toasts
    pub fn describe(&self) -> String {
        if self.group_fields.is_empty() {
            "No grouping".to_string()
        } else {
            self.group_fields
                .iter()
                .map(|f| f.label())
                .collect::<Vec<_>>()
                .join(" › ")
        }
    }
}
