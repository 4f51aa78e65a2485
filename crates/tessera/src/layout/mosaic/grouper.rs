//! Mosaic grouping and clique formation.
//!
//! The grouper consumes the image sequence strictly in order, cuts it into
//! randomly sized groups, and pairs contrasting aspect ratios within each
//! group into "cliques": shared columns where a low-aspect (tall) image
//! stacks with a high-aspect (wide) one. The randomness comes entirely from
//! the caller-supplied generator, so a seeded generator replays the exact
//! same grouping.

use std::cmp::Ordering;

use rand::Rng;
use rand::RngExt;

use tessera_core::item::ImageItem;

/// Maximum number of images in one clique sub-row.
pub(crate) const MAX_IN_ROW: usize = 2;

/// A contiguous run of images, ordered by ascending aspect ratio.
#[derive(Debug, Clone)]
pub(crate) struct Group {
    members: Vec<ImageItem>,
}

impl Group {
    /// Returns the members in ascending aspect-ratio order
    pub(crate) fn members(&self) -> &[ImageItem] {
        &self.members
    }
}

/// Which of the two sub-row arrangements a clique uses.
///
/// Both arrangements are valid; the choice only affects visual variety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CliqueVariant {
    /// Below-median aspects on top, above-median on the bottom.
    Sorted,
    /// Even-indexed members on top, odd-indexed on the bottom.
    Alternating,
}

/// Two sub-rows of images stacked vertically in one column.
#[derive(Debug, Clone)]
pub(crate) struct Clique {
    /// Members in ascending aspect-ratio order.
    members: Vec<ImageItem>,
    variant: CliqueVariant,
}

impl Clique {
    /// Splits the members into (top, bottom) sub-rows per the variant.
    ///
    /// Cliques hold at least two members, so neither sub-row is ever empty.
    pub(crate) fn sub_rows(&self) -> (Vec<ImageItem>, Vec<ImageItem>) {
        match self.variant {
            CliqueVariant::Sorted => {
                let (top, bottom) = self.members.split_at(self.members.len() / 2);
                (top.to_vec(), bottom.to_vec())
            }
            CliqueVariant::Alternating => {
                let top = self.members.iter().copied().step_by(2).collect();
                let bottom = self.members.iter().copied().skip(1).step_by(2).collect();
                (top, bottom)
            }
        }
    }

    pub(crate) fn members(&self) -> &[ImageItem] {
        &self.members
    }
}

/// One column of a group's layout: a stacked clique or a standalone image.
#[derive(Debug, Clone)]
pub(crate) enum Component {
    Single(ImageItem),
    Clique(Clique),
}

/// Draws random group sizes until the remainder fits in a single group.
///
/// Every size is drawn from `[min_per_group, max_per_group]`; once the
/// unassigned remainder is at most `max_per_group` it becomes the final
/// group, which may be smaller than `min_per_group`.
pub(crate) fn distribution<R: Rng>(
    count: usize,
    min_per_group: usize,
    max_per_group: usize,
    rng: &mut R,
) -> Vec<usize> {
    let mut sizes = Vec::new();
    let mut remaining = count;

    while remaining > max_per_group {
        let size = rng.random_range(min_per_group..=max_per_group);
        sizes.push(size);
        remaining -= size;
    }
    if remaining > 0 {
        sizes.push(remaining);
    }

    sizes
}

/// Cuts the items into groups and sorts each group by aspect ratio.
///
/// Items are consumed strictly in order with no reuse; the sort is stable,
/// so equal ratios keep their original relative order.
pub(crate) fn build_groups<R: Rng>(
    items: &[ImageItem],
    min_per_group: usize,
    max_per_group: usize,
    rng: &mut R,
) -> Vec<Group> {
    let sizes = distribution(items.len(), min_per_group, max_per_group, rng);

    let mut groups = Vec::with_capacity(sizes.len());
    let mut start = 0_usize;
    for size in sizes {
        let mut members = items[start..start + size].to_vec();
        start += size;

        members.sort_by(|a, b| {
            a.aspect_ratio()
                .partial_cmp(&b.aspect_ratio())
                .unwrap_or(Ordering::Equal)
        });
        groups.push(Group { members });
    }

    groups
}

/// Pairs a group's extremes into cliques, leaving at most one standalone.
///
/// While a full clique fits, `MAX_IN_ROW` members are popped from each end
/// of the aspect-sorted group. The tail is paired one-low-one-high into a
/// two-member clique; a last unpaired member (or a singleton group) becomes
/// a standalone column.
pub(crate) fn build_components<R: Rng>(group: &Group, rng: &mut R) -> Vec<Component> {
    let members = group.members();
    let mut components = Vec::new();
    let mut lo = 0_usize;
    let mut hi = members.len();

    while hi - lo >= 2 * MAX_IN_ROW {
        let mut clique_members = Vec::with_capacity(2 * MAX_IN_ROW);
        clique_members.extend_from_slice(&members[lo..lo + MAX_IN_ROW]);
        clique_members.extend_from_slice(&members[hi - MAX_IN_ROW..hi]);
        lo += MAX_IN_ROW;
        hi -= MAX_IN_ROW;

        components.push(Component::Clique(Clique {
            members: clique_members,
            variant: random_variant(rng),
        }));
    }

    while hi - lo >= 2 {
        let clique_members = vec![members[lo], members[hi - 1]];
        lo += 1;
        hi -= 1;

        components.push(Component::Clique(Clique {
            members: clique_members,
            variant: random_variant(rng),
        }));
    }

    if hi > lo {
        components.push(Component::Single(members[lo]));
    }

    components
}

fn random_variant<R: Rng>(rng: &mut R) -> CliqueVariant {
    if rng.random_bool(0.5) {
        CliqueVariant::Sorted
    } else {
        CliqueVariant::Alternating
    }
}
