use super::keys::{group_key_and_header, is_unknown_key, KeyContext, OLDER_PREFIX};
use super::settings::{GroupField, SortOrder};
use crate::library::Album;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::rc::Rc;

/// One node of the grouping hierarchy. Leaves (the deepest level) hold
/// albums; every other level holds sub-groups.
#[derive(Debug, Clone, PartialEq)]
pub struct NestedGroup {
    pub key: String,
    pub header: String,
    pub level: usize,
    pub albums: Vec<Rc<Album>>,
    pub sub_groups: Vec<NestedGroup>,
}

impl NestedGroup {
    /// Total albums under this node
    pub fn album_count(&self) -> usize {
        self.albums.len() + self.sub_groups.iter().map(|g| g.album_count()).sum::<usize>()
    }
}

/// Grouping inputs that stay fixed for a whole pass
pub struct GroupSpec<'a> {
    pub fields: &'a [GroupField],
    pub order: SortOrder,
    pub ctx: KeyContext,
}

/// Build the group tree from albums that are already sorted.
///
/// Without grouping fields everything lands in one headerless group.
pub fn group_albums(albums: &[Rc<Album>], spec: &GroupSpec) -> Vec<NestedGroup> {
    if spec.fields.is_empty() {
        return vec![NestedGroup {
            key: String::new(),
            header: String::new(),
            level: 0,
            albums: albums.to_vec(),
            sub_groups: Vec::new(),
        }];
    }
    group_by_field(albums, 0, spec)
}

struct Bucket {
    key: String,
    header: String,
    albums: Vec<Rc<Album>>,
}

fn group_by_field(albums: &[Rc<Album>], level: usize, spec: &GroupSpec) -> Vec<NestedGroup> {
    let Some(&field) = spec.fields.get(level) else {
        return Vec::new();
    };
    if albums.is_empty() {
        return Vec::new();
    }

    // Buckets in first-seen order; album order inside each is preserved
    let mut buckets: Vec<Bucket> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    for album in albums {
        let (key, header) = group_key_and_header(album, field, &spec.ctx);
        match index.get(&key) {
            Some(&i) => buckets[i].albums.push(Rc::clone(album)),
            None => {
                index.insert(key.clone(), buckets.len());
                buckets.push(Bucket {
                    key,
                    header,
                    albums: vec![Rc::clone(album)],
                });
            }
        }
    }

    buckets.sort_by(|a, b| compare_group_keys(&a.key, &b.key, field, spec.order));

    let is_leaf = level + 1 == spec.fields.len();
    buckets
        .into_iter()
        .map(|bucket| {
            let (albums, sub_groups) = if is_leaf {
                (bucket.albums, Vec::new())
            } else {
                (Vec::new(), group_by_field(&bucket.albums, level + 1, spec))
            };
            NestedGroup {
                key: bucket.key,
                header: bucket.header,
                level,
                albums,
                sub_groups,
            }
        })
        .collect()
}

/// Order of sibling group keys.
///
/// "unknown" and the "Unknown {Field}" placeholders are always last. Added-at buckets ignore `order` and read newest
/// first. Everything else is a plain string comparison in `order`.
pub fn compare_group_keys(a: &str, b: &str, field: GroupField, order: SortOrder) -> Ordering {
    match (is_unknown_key(a), is_unknown_key(b)) {
        (true, true) => return Ordering::Equal,
        (true, false) => return Ordering::Greater,
        (false, true) => return Ordering::Less,
        (false, false) => {}
    }

    if field == GroupField::AddedAt {
        return match (a.strip_prefix(OLDER_PREFIX), b.strip_prefix(OLDER_PREFIX)) {
            (Some(ma), Some(mb)) => mb.cmp(ma),
            _ => a.cmp(b),
        };
    }

    match order {
        SortOrder::Ascending => a.cmp(b),
        SortOrder::Descending => b.cmp(a),
    }
}

/// Sort a list of sibling keys in place (stable)
pub fn sort_group_keys(keys: &mut [String], field: GroupField, order: SortOrder) {
    keys.sort_by(|a, b| compare_group_keys(a, b, field, order));
}
