use super::settings::{SortCriterion, SortField, SortOrder};
use crate::library::dates::parse_date;
use crate::library::Album;
use std::cmp::Ordering;

/// Natural (ascending) order of two albums on a single field
pub fn compare_field(a: &Album, b: &Album, field: SortField) -> Ordering {
    match field {
        SortField::OriginalDate => compare_dates(&a.original_date, &b.original_date),
        SortField::ReleaseDate => compare_dates(&a.release_date, &b.release_date),
        SortField::AddedAt => a.added_at.cmp(&b.added_at),
        SortField::Artist => compare_text(&a.artist, &b.artist),
        SortField::Album => compare_text(&a.name, &b.name),
        SortField::TrackCount => a.track_count.cmp(&b.track_count),
        SortField::Label => compare_text(&a.label, &b.label),
    }
}

fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

// Unparseable dates sort before every real date
fn compare_dates(a: &str, b: &str) -> Ordering {
    parse_date(a).ok().cmp(&parse_date(b).ok())
}

/// Multi-key comparison: first criterion decides, later ones break ties
pub fn compare_albums(a: &Album, b: &Album, criteria: &[SortCriterion]) -> Ordering {
    for criterion in criteria {
        let ord = compare_field(a, b, criterion.field);
        if ord != Ordering::Equal {
            return match criterion.order {
                SortOrder::Ascending => ord,
                SortOrder::Descending => ord.reverse(),
            };
        }
    }
    Ordering::Equal
}

/// Stable in-place sort. No criteria means no reordering.
pub fn sort_albums<T: AsRef<Album>>(albums: &mut [T], criteria: &[SortCriterion]) {
    if criteria.is_empty() {
        return;
    }
    albums.sort_by(|a, b| compare_albums(a.as_ref(), b.as_ref(), criteria));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn album(artist: &str, name: &str, original: &str, tracks: u32) -> Album {
        Album {
            original_date: original.to_string(),
            track_count: tracks,
            ..Album::new(artist, name)
        }
    }

    fn names(albums: &[Album]) -> Vec<&str> {
        albums.iter().map(|a| a.name.as_str()).collect()
    }

    #[test]
    fn test_primary_then_tiebreak() {
        let mut albums = vec![
            album("b", "Second", "2001", 10),
            album("A", "First", "2001", 12),
            album("c", "Oldest", "1999-05-01", 8),
        ];
        let criteria = [
            SortCriterion::new(SortField::OriginalDate, SortOrder::Descending),
            SortCriterion::new(SortField::Artist, SortOrder::Ascending),
        ];
        sort_albums(&mut albums, &criteria);
        assert_eq!(names(&albums), vec!["First", "Second", "Oldest"]);
    }

    #[test]
    fn test_text_is_case_insensitive() {
        let a = album("the cure", "x", "", 0);
        let b = album("The Cure", "y", "", 0);
        assert_eq!(compare_field(&a, &b, SortField::Artist), Ordering::Equal);
    }

    #[test]
    fn test_track_count_is_numeric() {
        let mut albums = vec![album("", "Nine", "", 9), album("", "Ten", "", 10), album("", "Two", "", 2)];
        sort_albums(&mut albums, &[SortCriterion::new(SortField::TrackCount, SortOrder::Ascending)]);
        assert_eq!(names(&albums), vec!["Two", "Nine", "Ten"]);
    }

    #[test]
    fn test_empty_criteria_keeps_input_order() {
        let mut albums = vec![album("z", "Z", "", 1), album("a", "A", "", 2)];
        sort_albums(&mut albums, &[]);
        assert_eq!(names(&albums), vec!["Z", "A"]);
    }

    #[test]
    fn test_sort_is_stable_and_repeatable() {
        let base = vec![
            album("Same", "One", "2010", 1),
            album("Same", "Two", "2010", 1),
            album("Same", "Three", "2010", 1),
            album("Other", "Four", "2011", 1),
        ];
        let criteria = [SortCriterion::new(SortField::Artist, SortOrder::Descending)];

        let mut first = base.clone();
        sort_albums(&mut first, &criteria);
        let mut second = first.clone();
        sort_albums(&mut second, &criteria);

        assert_eq!(names(&first), vec!["One", "Two", "Three", "Four"]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_unknown_dates_sort_first_ascending() {
        let mut albums = vec![album("", "Dated", "2000", 0), album("", "Undated", "", 0)];
        sort_albums(&mut albums, &[SortCriterion::new(SortField::OriginalDate, SortOrder::Ascending)]);
        assert_eq!(names(&albums), vec!["Undated", "Dated"]);
    }
}
