use crate::grouping::{DateFieldType, GroupField, Settings, SortCriterion, SortField, SortOrder};

pub const DEFAULT_PRESET: &str = "Recently Added";

fn asc(field: SortField) -> SortCriterion {
    SortCriterion::new(field, SortOrder::Ascending)
}

fn desc(field: SortField) -> SortCriterion {
    SortCriterion::new(field, SortOrder::Descending)
}

/// Built-in grouping presets, cycled with Tab
pub fn get_default_presets() -> Vec<Settings> {
    vec![
        Settings::new(
            vec![GroupField::AddedAt],
            vec![desc(SortField::AddedAt), asc(SortField::Artist)],
        )
        .named(DEFAULT_PRESET),
        Settings::new(
            vec![GroupField::Artist],
            vec![asc(SortField::Artist), asc(SortField::OriginalDate)],
        )
        .named("By Artist"),
        Settings::new(
            vec![GroupField::Year],
            vec![desc(SortField::OriginalDate), asc(SortField::Artist)],
        )
        .named("By Year")
        .with_group_order(SortOrder::Descending),
        Settings::new(
            vec![GroupField::Genre, GroupField::Year],
            vec![desc(SortField::OriginalDate), asc(SortField::Album)],
        )
        .named("Genre › Year"),
        Settings::new(
            vec![GroupField::Week],
            vec![desc(SortField::AddedAt)],
        )
        .named("By Week")
        .with_group_order(SortOrder::Descending)
        .with_date_field(DateFieldType::Added),
        Settings::new(
            vec![GroupField::Label, GroupField::Artist],
            vec![asc(SortField::Label), asc(SortField::ReleaseDate)],
        )
        .named("By Label"),
    ]
}
