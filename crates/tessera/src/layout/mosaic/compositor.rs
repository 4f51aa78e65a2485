//! Mosaic geometry: clique normalization and group composition.
//!
//! A clique's two sub-rows are first normalized internally (every member
//! scaled to the sub-row's shortest natural height), then against each other
//! (both sub-rows rescaled to the narrower one's width), which gives the
//! clique a single aspect ratio. Components then split the viewport in
//! proportion to their aspect ratios, so every component in a group comes
//! out at the same height up to float rounding.

use tessera_core::{geometry::Rect, item::ImageItem, layout::Layout};

use super::grouper::{Clique, Component};

/// One clique sub-row scaled to a shared member height.
struct SubRow {
    members: Vec<ImageItem>,
    /// Member widths at the shared height, in member order.
    widths: Vec<f32>,
    width: f32,
    height: f32,
}

/// A clique with both sub-rows normalized to a common width.
struct NormalizedClique {
    top: SubRow,
    bottom: SubRow,
    width: f32,
    height: f32,
}

impl NormalizedClique {
    fn aspect_ratio(&self) -> f32 {
        if self.height > 0.0 {
            self.width / self.height
        } else {
            0.0
        }
    }
}

/// A group component with its geometry resolved, ready for placement.
enum Prepared {
    Single(ImageItem),
    Clique(NormalizedClique),
}

impl Prepared {
    fn aspect_ratio(&self) -> f32 {
        match self {
            Self::Single(item) => item.aspect_ratio(),
            Self::Clique(clique) => clique.aspect_ratio(),
        }
    }
}

/// Scales every member to the sub-row's shortest natural height.
///
/// Widths scale proportionally, so each member keeps its own aspect ratio.
fn normalize_sub_row(members: Vec<ImageItem>) -> SubRow {
    let height = members
        .iter()
        .map(|member| member.natural_height())
        .fold(f32::INFINITY, f32::min);
    let widths: Vec<f32> = members
        .iter()
        .map(|member| member.aspect_ratio() * height)
        .collect();
    let width = widths.iter().sum();

    SubRow {
        members,
        widths,
        width,
        height,
    }
}

/// Rescales a sub-row to the target width, heights following proportionally.
fn rescale_sub_row(sub_row: &mut SubRow, target_width: f32) {
    if sub_row.width <= 0.0 {
        return;
    }
    let factor = target_width / sub_row.width;
    for width in &mut sub_row.widths {
        *width *= factor;
    }
    sub_row.height *= factor;
    sub_row.width = target_width;
}

/// Normalizes a clique: both sub-rows to the narrower sub-row's width.
fn normalize_clique(clique: &Clique) -> NormalizedClique {
    let (top_members, bottom_members) = clique.sub_rows();
    let mut top = normalize_sub_row(top_members);
    let mut bottom = normalize_sub_row(bottom_members);

    let common_width = top.width.min(bottom.width);
    rescale_sub_row(&mut top, common_width);
    rescale_sub_row(&mut bottom, common_width);

    NormalizedClique {
        width: common_width,
        height: top.height + bottom.height,
        top,
        bottom,
    }
}

/// Emits the rectangles for a scaled sub-row starting at `(x, y)`.
fn place_sub_row(sub_row: &SubRow, factor: f32, x: f32, y: f32, layout: &mut Layout) {
    let mut member_x = x;
    let height = sub_row.height * factor;
    for (member, &width) in sub_row.members.iter().zip(&sub_row.widths) {
        let scaled_width = width * factor;
        layout.insert(member.index(), Rect::new(member_x, y, scaled_width, height));
        member_x += scaled_width;
    }
}

/// Lays out one group's components left-to-right at the given y offset.
///
/// Every component gets a share of the gap-reduced viewport proportional to
/// its aspect ratio, which makes all component heights in the group equal up
/// to float rounding. Returns the group's height (its first component's
/// height); an empty or fully degenerate group contributes zero height.
pub(crate) fn layout_group(
    components: &[Component],
    viewport_width: f32,
    gap: f32,
    group_y: f32,
    layout: &mut Layout,
) -> f32 {
    if components.is_empty() {
        return 0.0;
    }

    let prepared: Vec<Prepared> = components
        .iter()
        .map(|component| match component {
            Component::Single(item) => Prepared::Single(*item),
            Component::Clique(clique) => Prepared::Clique(normalize_clique(clique)),
        })
        .collect();

    let summed_ratios: f32 = prepared.iter().map(Prepared::aspect_ratio).sum();
    let distributable = viewport_width - (components.len() - 1) as f32 * gap;

    if summed_ratios <= 0.0 || distributable <= 0.0 {
        // Pathological group: emit zero-size tiles instead of NaN geometry.
        for component in components {
            match component {
                Component::Single(item) => {
                    layout.insert(item.index(), Rect::new(0.0, group_y, 0.0, 0.0));
                }
                Component::Clique(clique) => {
                    for member in clique.members() {
                        layout.insert(member.index(), Rect::new(0.0, group_y, 0.0, 0.0));
                    }
                }
            }
        }
        return 0.0;
    }

    let mut x = 0.0_f32;
    let mut group_height = 0.0_f32;
    for (position, prepared) in prepared.iter().enumerate() {
        let ratio = prepared.aspect_ratio();
        let new_width = ratio / summed_ratios * distributable;
        let new_height = if ratio > 0.0 { new_width / ratio } else { 0.0 };
        if position == 0 {
            group_height = new_height;
        }

        match prepared {
            Prepared::Single(item) => {
                layout.insert(item.index(), Rect::new(x, group_y, new_width, new_height));
            }
            Prepared::Clique(clique) => {
                let factor = if clique.width > 0.0 {
                    new_width / clique.width
                } else {
                    0.0
                };
                place_sub_row(&clique.top, factor, x, group_y, layout);
                let bottom_y = group_y + clique.top.height * factor;
                place_sub_row(&clique.bottom, factor, x, bottom_y, layout);
            }
        }

        x += new_width + gap;
    }

    group_height
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use rand::{SeedableRng, rngs::StdRng};

    use tessera_core::item::{ImageSource, validate_sources};

    use super::super::grouper;
    use super::*;

    fn items_from_dimensions(dimensions: &[(f32, f32)]) -> Vec<ImageItem> {
        let sources: Vec<ImageSource> = dimensions
            .iter()
            .map(|&(w, h)| ImageSource::new(w, h))
            .collect();
        let (items, skipped) = validate_sources(&sources);
        assert!(skipped.is_empty());
        items
    }

    /// Builds the components of a single group covering all the items.
    fn components_for(items: &[ImageItem], seed: u64) -> Vec<Component> {
        let mut rng = StdRng::seed_from_u64(seed);
        let groups = grouper::build_groups(items, items.len(), items.len(), &mut rng);
        assert_eq!(groups.len(), 1);
        grouper::build_components(&groups[0], &mut rng)
    }

    #[test]
    fn test_pair_clique_normalization() {
        // Tall 400x800 (aspect 0.5) over wide 1600x800 (aspect 2.0): the
        // tall sub-row is narrower, so the wide one shrinks to width 400.
        let items = items_from_dimensions(&[(400.0, 800.0), (1600.0, 800.0)]);
        let components = components_for(&items, 1);
        assert_eq!(components.len(), 1);

        let mut layout = Layout::new();
        let height = layout_group(&components, 400.0, 0.0, 0.0, &mut layout);

        let top = layout.tile(0).expect("tall image tile");
        let bottom = layout.tile(1).expect("wide image tile");

        // Both span the full column width.
        assert_approx_eq!(f32, top.width(), 400.0, epsilon = 0.01);
        assert_approx_eq!(f32, bottom.width(), 400.0, epsilon = 0.01);

        // Heights keep each image's own aspect ratio.
        assert_approx_eq!(f32, top.height(), 800.0, epsilon = 0.01);
        assert_approx_eq!(f32, bottom.height(), 200.0, epsilon = 0.01);

        // Stacked: bottom starts where top ends; group height covers both.
        assert_approx_eq!(f32, bottom.y(), top.bottom(), epsilon = 0.01);
        assert_approx_eq!(f32, height, 1000.0, epsilon = 0.01);
    }

    #[test]
    fn test_sub_row_members_share_height() {
        let items = items_from_dimensions(&[
            (600.0, 400.0),
            (500.0, 1000.0),
            (800.0, 400.0),
            (300.0, 900.0),
        ]);
        let components = components_for(&items, 3);
        let mut layout = Layout::new();
        layout_group(&components, 1200.0, 0.0, 0.0, &mut layout);

        // Tiles sharing a y offset must share a height.
        let tiles: Vec<Rect> = layout.tiles().values().copied().collect();
        for a in &tiles {
            for b in &tiles {
                if a.y() == b.y() {
                    assert_approx_eq!(f32, a.height(), b.height(), epsilon = 0.01);
                }
            }
        }
    }

    #[test]
    fn test_component_widths_fill_viewport() {
        let items = items_from_dimensions(&[
            (400.0, 800.0),
            (1600.0, 800.0),
            (900.0, 600.0),
            (500.0, 500.0),
            (1200.0, 400.0),
        ]);
        let components = components_for(&items, 5);
        let component_count = components.len();

        let gap = 6.0;
        let viewport = 1280.0;
        let mut layout = Layout::new();
        layout_group(&components, viewport, gap, 0.0, &mut layout);

        // The rightmost tile edge lands on the viewport edge.
        let max_right = layout
            .tiles()
            .values()
            .map(|tile| tile.right())
            .fold(0.0_f32, f32::max);
        assert_approx_eq!(f32, max_right, viewport, epsilon = 0.5);

        // No tile overflows.
        assert!(
            layout
                .tiles()
                .values()
                .all(|tile| tile.right() <= viewport + 0.5)
        );
        assert!(component_count >= 2, "expected a multi-component group");
    }

    #[test]
    fn test_component_heights_agree_within_tolerance() {
        let items = items_from_dimensions(&[
            (640.0, 480.0),
            (480.0, 640.0),
            (1920.0, 1080.0),
            (1080.0, 1920.0),
            (1000.0, 1000.0),
        ]);
        let components = components_for(&items, 8);
        let mut layout = Layout::new();
        let group_height = layout_group(&components, 1440.0, 4.0, 0.0, &mut layout);

        // Every component's total column height matches the group height.
        // Components start at y == 0; their columns end at their bottom-most
        // tile edge.
        let max_bottom = layout
            .tiles()
            .values()
            .map(|tile| tile.bottom())
            .fold(0.0_f32, f32::max);
        assert!(
            (max_bottom - group_height).abs() <= 1.0,
            "column depth {max_bottom} vs group height {group_height}"
        );
    }

    #[test]
    fn test_empty_component_list_contributes_no_height() {
        let mut layout = Layout::new();
        assert_eq!(layout_group(&[], 1200.0, 4.0, 0.0, &mut layout), 0.0);
        assert!(layout.is_empty());
    }

    #[test]
    fn test_group_y_offsets_all_tiles() {
        let items = items_from_dimensions(&[(400.0, 800.0), (1600.0, 800.0)]);
        let components = components_for(&items, 1);

        let mut layout = Layout::new();
        layout_group(&components, 400.0, 0.0, 250.0, &mut layout);

        assert!(layout.tiles().values().all(|tile| tile.y() >= 250.0));
        let min_y = layout
            .tiles()
            .values()
            .map(|tile| tile.y())
            .fold(f32::INFINITY, f32::min);
        assert_approx_eq!(f32, min_y, 250.0);
    }
}
