use super::tree::NestedGroup;
use crate::library::Album;
use std::rc::Rc;

/// One row of the browser list
#[derive(Debug, Clone, PartialEq)]
pub enum FlatItem {
    Header { header: String, level: usize },
    Album(Rc<Album>),
}

impl FlatItem {
    pub fn is_header(&self) -> bool {
        matches!(self, FlatItem::Header { .. })
    }

    pub fn album(&self) -> Option<&Album> {
        match self {
            FlatItem::Album(album) => Some(album),
            FlatItem::Header { .. } => None,
        }
    }
}

/// Depth-first: a group's header, then its sub-groups, then its own albums
pub fn flatten(groups: &[NestedGroup]) -> Vec<FlatItem> {
    let mut items = Vec::new();
    for group in groups {
        push_group(group, &mut items);
    }
    items
}

fn push_group(group: &NestedGroup, items: &mut Vec<FlatItem>) {
    if !group.header.is_empty() {
        items.push(FlatItem::Header {
            header: group.header.clone(),
            level: group.level,
        });
    }
    for sub in &group.sub_groups {
        push_group(sub, items);
    }
    items.extend(group.albums.iter().map(|a| FlatItem::Album(Rc::clone(a))));
}
