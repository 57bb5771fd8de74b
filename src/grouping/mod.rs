//! Album grouping engine: sort, bucket into nested groups, flatten to rows.

use crate::library::{Album, AlbumSource, LibraryError};
use chrono::NaiveDateTime;
use std::rc::Rc;
use tracing::debug;

pub mod flatten;
pub mod keys;
pub mod settings;
pub mod sort;
pub mod tree;

pub use flatten::{flatten, FlatItem};
pub use keys::{group_key_and_header, KeyContext};
pub use settings::{DateFieldType, GroupField, Settings, SortCriterion, SortField, SortOrder};
pub use sort::{compare_albums, sort_albums};
pub use tree::{group_albums, sort_group_keys, GroupSpec, NestedGroup};

/// Result of one grouping pass. Rebuilt wholesale on every refresh.
#[derive(Debug, Clone, Default)]
pub struct GroupedView {
    pub groups: Vec<NestedGroup>,
    pub items: Vec<FlatItem>,
}

impl GroupedView {
    /// Sort first, then group, so every bucket inherits the sort order
    pub fn build(albums: Vec<Album>, settings: &Settings, now: NaiveDateTime) -> Self {
        let mut albums: Vec<Rc<Album>> = albums.into_iter().map(Rc::new).collect();
        sort_albums(&mut albums, &settings.sort_criteria);

        let spec = GroupSpec {
            fields: &settings.group_fields,
            order: settings.group_sort_order,
            ctx: KeyContext {
                date_field: settings.group_date_field,
                now,
            },
        };
        let groups = group_albums(&albums, &spec);
        let items = flatten(&groups);

        debug!(
            "Grouped {} albums by [{}] into {} rows",
            albums.len(),
            settings.describe(),
            items.len()
        );

        Self { groups, items }
    }

    /// Pull albums from `source` and regroup. Source errors abort the pass.
    pub fn refresh(
        source: &dyn AlbumSource,
        settings: &Settings,
        now: NaiveDateTime,
    ) -> Result<Self, LibraryError> {
        let albums = source.all_albums()?;
        Ok(Self::build(albums, settings, now))
    }

    pub fn album_count(&self) -> usize {
        self.items.iter().filter(|i| !i.is_header()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::MemoryLibrary;
    use std::path::PathBuf;
    use chrono::NaiveDate;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 12, 18).unwrap().and_hms_opt(9, 0, 0).unwrap()
    }

    fn album(name: &str, genre: &str, original: &str) -> Album {
        Album {
            genre: genre.to_string(),
            original_date: original.to_string(),
            ..Album::new("Artist", name)
        }
    }

    fn rows(view: &GroupedView) -> Vec<String> {
        view.items
            .iter()
            .map(|item| match item {
                FlatItem::Header { header, level } => format!("#{} {}", level, header),
                FlatItem::Album(a) => a.name.clone(),
            })
            .collect()
    }

    #[test]
    fn test_genre_year_descending() {
        let settings = Settings::new(vec![GroupField::Genre, GroupField::Year], Vec::new())
            .with_group_order(SortOrder::Descending);
        let albums = vec![album("B", "Rock", "2019"), album("A", "Rock", "2020")];

        let view = GroupedView::build(albums, &settings, now());
        assert_eq!(rows(&view), vec!["#0 Rock", "#1 2020", "A", "#1 2019", "B"]);
    }

    #[test]
    fn test_sorting_carries_into_buckets() {
        let settings = Settings::new(
            vec![GroupField::Genre],
            vec![SortCriterion::new(SortField::Album, SortOrder::Descending)],
        );
        let albums = vec![
            album("Alpha", "Jazz", ""),
            album("Gamma", "Jazz", ""),
            album("Beta", "Jazz", ""),
        ];
        let view = GroupedView::build(albums, &settings, now());
        assert_eq!(rows(&view), vec!["#0 Jazz", "Gamma", "Beta", "Alpha"]);
    }

    #[test]
    fn test_every_album_appears_once_with_empty_metadata() {
        let albums = vec![Album::default(), Album::default(), album("Named", "", "garbage")];
        for fields in [
            vec![GroupField::Artist, GroupField::Genre, GroupField::Label],
            vec![GroupField::Year, GroupField::Month, GroupField::Week],
            vec![GroupField::AddedAt],
            Vec::new(),
        ] {
            let settings = Settings::new(fields, vec![SortCriterion::new(SortField::ReleaseDate, SortOrder::Ascending)]);
            let view = GroupedView::build(albums.clone(), &settings, now());
            assert_eq!(view.album_count(), 3);
        }
    }

    #[test]
    fn test_unknown_year_last_in_both_orders() {
        for order in [SortOrder::Ascending, SortOrder::Descending] {
            let settings = Settings::new(vec![GroupField::Year], Vec::new()).with_group_order(order);
            let albums = vec![album("Undated", "", ""), album("Old", "", "1960"), album("New", "", "2020")];
            let view = GroupedView::build(albums, &settings, now());
            assert_eq!(view.groups.last().unwrap().key, keys::UNKNOWN_KEY);
        }
    }

    struct Unreadable;

    impl AlbumSource for Unreadable {
        fn all_albums(&self) -> Result<Vec<Album>, LibraryError> {
            Err(LibraryError::Io {
                path: PathBuf::from("/missing/library.json"),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
            })
        }
    }

    #[test]
    fn test_refresh_propagates_source_error() {
        let settings = Settings::new(vec![GroupField::Genre], Vec::new());
        let result = GroupedView::refresh(&Unreadable, &settings, now());
        assert!(matches!(result, Err(LibraryError::Io { .. })));
    }

    #[test]
    fn test_refresh_groups_source_albums() {
        let source = MemoryLibrary::new(vec![album("One", "Ambient", "1982")]);
        let view = GroupedView::refresh(&source, &Settings::new(vec![GroupField::Genre], Vec::new()), now()).unwrap();
        assert_eq!(rows(&view), vec!["#0 Ambient", "One"]);
    }
}
