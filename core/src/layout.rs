/// Rendered geometry of one gallery image, captured at the start of a pass.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ImageBox {
    pub top: f64,
    pub width: f64,
    pub height: f64,
    pub natural_height: f64,
}

impl ImageBox {
    pub fn is_rendered(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    pub fn has_natural_height(&self) -> bool {
        self.natural_height.is_finite() && self.natural_height > 0.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RowParams {
    pub tolerance: f64,
    pub height_factor: f64,
}

pub const ROW_TOLERANCE: f64 = 10.0;
pub const ROW_HEIGHT_FACTOR: f64 = 0.5;

impl Default for RowParams {
    fn default() -> Self {
        Self {
            tolerance: ROW_TOLERANCE,
            height_factor: ROW_HEIGHT_FACTOR,
        }
    }
}

/// Images sharing an approximate top offset. `members` index the snapshot
/// the row was built from, in collection order.
#[derive(Clone, Debug, PartialEq)]
pub struct Row {
    pub top: f64,
    pub members: Vec<usize>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeightAssignment {
    pub index: usize,
    pub height: f64,
}

/// Groups rendered images into rows by rounded top offset.
///
/// An image joins the first row, in creation order, whose top lies within
/// `tolerance` of its own rounded top. This is first-match rather than
/// best-match, so staggered tops near the tolerance edge can land in an
/// earlier row. Rows come back sorted by ascending top.
pub fn group_rows(images: &[ImageBox], tolerance: f64) -> Vec<Row> {
    let mut rows: Vec<Row> = Vec::new();
    for (index, image) in images.iter().enumerate() {
        if !image.is_rendered() {
            continue;
        }
        let top = image.top.round();
        match rows
            .iter_mut()
            .find(|row| (row.top - top).abs() <= tolerance)
        {
            Some(row) => row.members.push(index),
            None => rows.push(Row {
                top,
                members: vec![index],
            }),
        }
    }
    rows.sort_by(|a, b| a.top.total_cmp(&b.top));
    rows
}

/// Mean natural height of the row's members that report one, scaled by
/// `height_factor`. `None` when no member qualifies.
pub fn row_height(images: &[ImageBox], row: &Row, height_factor: f64) -> Option<f64> {
    let (sum, count) = row
        .members
        .iter()
        .filter_map(|index| images.get(*index))
        .filter(|image| image.has_natural_height())
        .fold((0.0, 0usize), |(sum, count), image| {
            (sum + image.natural_height, count + 1)
        });
    if count == 0 {
        return None;
    }
    Some(sum / count as f64 * height_factor)
}

/// Plans the display height of every image in one container snapshot.
///
/// Unrendered images and images without a natural height get no
/// assignment. Assignments are ordered by row, then by collection order
/// within the row.
pub fn plan_row_heights(images: &[ImageBox], params: RowParams) -> Vec<HeightAssignment> {
    let mut assignments = Vec::new();
    for row in group_rows(images, params.tolerance) {
        let Some(height) = row_height(images, &row, params.height_factor) else {
            continue;
        };
        for index in row.members {
            let qualifies = images
                .get(index)
                .map(ImageBox::has_natural_height)
                .unwrap_or(false);
            if qualifies {
                assignments.push(HeightAssignment { index, height });
            }
        }
    }
    assignments
}

/// CSS length for a planned height, e.g. `125px` or `112.5px`.
pub fn css_px(height: f64) -> String {
    format!("{height}px")
}
