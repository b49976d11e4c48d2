use galleria_core::layout::{css_px, row_height};
use galleria_core::{group_rows, plan_row_heights, HeightAssignment, ImageBox, RowParams};

fn image(top: f64, natural_height: f64) -> ImageBox {
    ImageBox {
        top,
        width: 120.0,
        height: 80.0,
        natural_height,
    }
}

fn tops(images: &[ImageBox], members: &[usize]) -> Vec<f64> {
    members.iter().map(|index| images[*index].top).collect()
}

#[test]
fn groups_rows_by_top_within_tolerance() {
    let images: Vec<ImageBox> = [100.0, 102.0, 108.0, 300.0, 305.0]
        .iter()
        .map(|top| image(*top, 400.0))
        .collect();
    let rows = group_rows(&images, 10.0);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].top, 100.0);
    assert_eq!(tops(&images, &rows[0].members), vec![100.0, 102.0, 108.0]);
    assert_eq!(rows[1].top, 300.0);
    assert_eq!(tops(&images, &rows[1].members), vec![300.0, 305.0]);
}

#[test]
fn rows_sorted_even_when_collected_out_of_order() {
    let images = vec![image(300.0, 10.0), image(100.4, 10.0), image(302.0, 10.0)];
    let rows = group_rows(&images, 10.0);
    assert_eq!(rows[0].top, 100.0);
    assert_eq!(rows[0].members, vec![1]);
    assert_eq!(rows[1].members, vec![0, 2]);
}

#[test]
fn first_matching_row_wins_over_closer_row() {
    // 112 and 96 both sit within tolerance of 104; the older row takes it.
    let images = vec![image(96.0, 10.0), image(112.0, 10.0), image(104.0, 10.0)];
    let rows = group_rows(&images, 10.0);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].members, vec![0, 2]);
    assert_eq!(rows[1].members, vec![1]);
}

#[test]
fn tolerance_boundary_is_inclusive() {
    let images = vec![image(100.0, 10.0), image(110.0, 10.0), image(111.0, 10.0)];
    let rows = group_rows(&images, 10.0);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].members, vec![0, 1]);
    assert_eq!(rows[1].members, vec![2]);
}

#[test]
fn row_height_is_scaled_mean_of_natural_heights() {
    let images = vec![image(0.0, 200.0), image(2.0, 300.0)];
    let planned = plan_row_heights(&images, RowParams::default());
    assert_eq!(
        planned,
        vec![
            HeightAssignment {
                index: 0,
                height: 125.0
            },
            HeightAssignment {
                index: 1,
                height: 125.0
            },
        ]
    );
}

#[test]
fn unrendered_images_get_no_row_and_no_height() {
    let mut hidden = image(0.0, 500.0);
    hidden.width = 0.0;
    let mut flat = image(0.0, 500.0);
    flat.height = 0.0;
    let images = vec![hidden, image(0.0, 200.0), flat];
    let rows = group_rows(&images, 10.0);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].members, vec![1]);
    let planned = plan_row_heights(&images, RowParams::default());
    assert_eq!(planned.len(), 1);
    assert_eq!(planned[0].index, 1);
    assert_eq!(planned[0].height, 100.0);
}

#[test]
fn images_without_natural_height_are_left_alone() {
    let images = vec![image(50.0, 0.0), image(52.0, 240.0), image(55.0, f64::NAN)];
    let planned = plan_row_heights(&images, RowParams::default());
    assert_eq!(
        planned,
        vec![HeightAssignment {
            index: 1,
            height: 120.0
        }]
    );
}

#[test]
fn row_without_usable_natural_height_is_skipped() {
    let images = vec![image(0.0, 0.0), image(3.0, 0.0), image(200.0, 100.0)];
    let rows = group_rows(&images, 10.0);
    assert_eq!(row_height(&images, &rows[0], 0.5), None);
    let planned = plan_row_heights(&images, RowParams::default());
    assert_eq!(planned.len(), 1);
    assert_eq!(planned[0].index, 2);
}

#[test]
fn each_row_uses_only_its_own_images() {
    let images = vec![
        image(0.0, 100.0),
        image(0.0, 300.0),
        image(400.0, 800.0),
    ];
    let planned = plan_row_heights(&images, RowParams::default());
    let heights: Vec<(usize, f64)> = planned.iter().map(|a| (a.index, a.height)).collect();
    assert_eq!(heights, vec![(0, 100.0), (1, 100.0), (2, 400.0)]);
}

#[test]
fn planning_is_stable_across_repeated_runs() {
    let images = vec![image(10.0, 640.0), image(12.0, 480.0), image(260.0, 720.0)];
    let first = plan_row_heights(&images, RowParams::default());
    let second = plan_row_heights(&images, RowParams::default());
    assert_eq!(first, second);
}

#[test]
fn empty_snapshot_plans_nothing() {
    assert!(group_rows(&[], 10.0).is_empty());
    assert!(plan_row_heights(&[], RowParams::default()).is_empty());
}

#[test]
fn css_px_formats_whole_and_fractional_heights() {
    assert_eq!(css_px(125.0), "125px");
    assert_eq!(css_px(112.5), "112.5px");
    assert_eq!(css_px(100.0 / 3.0), "33.333333333333336px");
}
