use nalgebra::Point3;
use skirmishkit_core::{BuildError, ConfigError, Error, Solid};
use skirmishkit_designer::series::{Edge, SeriesLayout, SlotId};
use skirmishkit_designer::{
    Feature, FlatRoof, FlatRoofParams, InteriorSpan, Operation, TileMode,
};

use crate::support::contains;

/// 60 x 60 x 10 slab with every feature switched on and one hatch kept
fn featured_roof(tile_mode: TileMode) -> FlatRoofParams {
    FlatRoofParams {
        length: 60.0,
        width: 60.0,
        height: 10.0,
        wall_width: 5.0,
        panel_length: 25.0,
        panel_padding: 2.0,
        render_tiles: true,
        tile_size: 10.0,
        tile_mode,
        render_hatches: true,
        render_hatch_cuts: true,
        hatch_panels: [SlotId::new(Edge::Front, 0)].into_iter().collect(),
        cut_holes: true,
        segments: 8,
        ..FlatRoofParams::default()
    }
}

#[test]
fn test_build_without_make_fails() {
    let mut roof = FlatRoof::default();
    match roof.build() {
        Err(Error::Build(BuildError::NotPrepared { part })) => assert_eq!(part, "FlatRoof"),
        other => panic!("expected NotPrepared, got {other:?}"),
    }
}

#[test]
fn test_tiles_taller_than_roof_are_rejected() {
    let mut roof = FlatRoof::new(FlatRoofParams {
        height: 2.0,
        render_tiles: true,
        tile_height: 5.0,
        tile_mode: TileMode::Recessed,
        ..FlatRoofParams::default()
    });
    match roof.make() {
        Err(Error::Config(ConfigError::FeatureTooLarge { feature, housing, .. })) => {
            assert_eq!(feature, "tile_height");
            assert_eq!(housing, "roof height");
        }
        other => panic!("expected FeatureTooLarge, got {other:?}"),
    }
    assert!(roof.cache().is_none());
}

#[test]
fn test_hatch_cuts_taller_than_roof_are_rejected() {
    let params = FlatRoofParams {
        height: 4.0,
        wall_width: 10.0,
        render_hatch_cuts: true,
        ..FlatRoofParams::default()
    };
    assert_eq!(params.hatch_cut_height(), 11.5);

    let mut roof = FlatRoof::new(params);
    match roof.make() {
        Err(Error::Config(ConfigError::FeatureTooLarge { feature, size, .. })) => {
            assert_eq!(feature, "hatch cut height");
            assert_eq!(size, 11.5);
        }
        other => panic!("expected FeatureTooLarge, got {other:?}"),
    }
}

#[test]
fn test_default_roof_tile_grid() {
    let params = FlatRoofParams::default();
    let grid = params.tile_grid();
    assert_eq!(params.tile_pitch(), 23.0);
    assert_eq!((grid.rows, grid.columns), (6, 6));
    assert_eq!(grid.total_copies(), 36);
}

#[test]
fn test_recessed_tiles_assembly_order() {
    let mut roof = FlatRoof::new(featured_roof(TileMode::Recessed));
    roof.make().unwrap();
    roof.build().unwrap();

    let plan = roof.plan().unwrap();
    assert_eq!(
        plan.steps(),
        &[
            (Operation::Base, Feature::Body),
            (Operation::Cut, Feature::Tiles),
            (Operation::Cut, Feature::HatchCuts),
            (Operation::Union, Feature::Hatches),
            (Operation::Cut, Feature::Holes),
        ]
    );
}

#[test]
fn test_hatch_cut_region_is_empty() {
    let params = featured_roof(TileMode::Recessed);
    let mut roof = FlatRoof::new(params.clone());
    roof.make().unwrap();

    let cache = roof.cache().unwrap();
    let cuts = cache.hatch_cuts.as_ref().unwrap();
    assert_eq!(cuts.len(), 1);
    assert_eq!(cache.hatches.as_ref().unwrap().len(), 1);
    let cut_center = cuts.solid().bounds().unwrap().center();

    let result = roof.build().unwrap().clone();

    // The cut runs from the slab bottom up through the wall top
    assert!((cut_center.z - (-5.0 + params.hatch_cut_height() / 2.0)).abs() < 1e-6);
    assert!(!contains(&result, cut_center));

    // Mirror position on the back edge was filtered out and stays solid
    let mirrored = Point3::new(-cut_center.x, -cut_center.y, cut_center.z);
    assert!(contains(&result, mirrored));
}

#[test]
fn test_recessed_tiles_remove_material() {
    let mut roof = FlatRoof::new(featured_roof(TileMode::Recessed));
    roof.make().unwrap();
    let result = roof.build().unwrap();

    // Inside the center tile, away from its diagonal slots
    assert!(!contains(result, Point3::new(3.0, -3.0, 4.5)));
    // Below the tile layer
    assert!(contains(result, Point3::new(3.0, -3.0, 2.0)));
}

#[test]
fn test_raised_tiles_add_material() {
    let mut roof = FlatRoof::new(featured_roof(TileMode::Raised));
    roof.make().unwrap();
    roof.build().unwrap();

    let plan = roof.plan().unwrap();
    assert_eq!(plan.operation(Feature::Tiles), Some(Operation::Union));
    assert!(contains(roof.result().unwrap(), Point3::new(3.0, -3.0, 5.5)));
}

#[test]
fn test_holes_are_cut_from_the_bottom() {
    let params = featured_roof(TileMode::Raised);
    let mut roof = FlatRoof::new(params.clone());
    roof.make().unwrap();
    let result = roof.build().unwrap();

    let x = params.hole_x_translate();
    let y = params.hole_y_translate();
    let z = params.hole_z_translate();
    assert_eq!((x, y), (27.5, 27.5));
    assert!(!contains(result, Point3::new(x, y, z)));
    assert!(!contains(result, Point3::new(-x, -y, z)));
    assert!(contains(result, Point3::new(x, y, z + 2.0)));
}

#[test]
fn test_hatches_sit_on_top() {
    let params = featured_roof(TileMode::Recessed);
    let mut roof = FlatRoof::new(params.clone());
    roof.make().unwrap();
    let hatches = roof.cache().unwrap().hatches.as_ref().unwrap();
    let bounds = hatches.solid().bounds().unwrap();
    assert!((bounds.min.z - 5.0).abs() < 1e-6);
    assert!((bounds.max.z - 11.0).abs() < 1e-6);
}

#[test]
fn test_rebuild_after_param_change_recomputes() {
    let mut roof = FlatRoof::new(FlatRoofParams {
        length: 40.0,
        width: 40.0,
        height: 5.0,
        ..FlatRoofParams::default()
    });
    roof.make().unwrap();
    roof.build().unwrap();

    roof.params_mut().length = 80.0;
    assert!(roof.build().unwrap_err().is_not_prepared());

    roof.make().unwrap();
    let size = roof.build().unwrap().bounds().unwrap().size();
    assert!((size.x - 80.0).abs() < 1e-6);
}

#[test]
fn test_interior_span_moves_hatches() {
    let params = FlatRoofParams {
        panel_length: 28.0,
        panel_padding: 4.0,
        interior: Some(InteriorSpan {
            length: 130.0,
            width: 120.0,
        }),
        ..FlatRoofParams::default()
    };
    let layout = SeriesLayout::new(params.hatch_series()).unwrap();
    // (130 - 11) / 32 and (120 - 11) / 32
    assert_eq!(layout.count(Edge::Front), 3);
    assert_eq!(layout.count(Edge::Left), 3);
    let front = layout
        .slots()
        .iter()
        .find(|slot| slot.id == SlotId::new(Edge::Front, 0))
        .unwrap();
    assert_eq!(front.placement.translation.y, -(60.0 - 12.5));
}
