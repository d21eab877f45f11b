use nalgebra::Point3;
use skirmishkit_designer::series::{Edge, SeriesLayout, SlotId};
use skirmishkit_designer::{Bunker, BunkerParams, Feature, FlatRoof, KeepList, Operation};

use crate::support::contains;

fn plain_bunker() -> BunkerParams {
    BunkerParams {
        render_cut_panels: false,
        render_panel_details: false,
        segments: 8,
        ..BunkerParams::default()
    }
}

fn front_zero() -> KeepList {
    [SlotId::new(Edge::Front, 0)].into_iter().collect()
}

#[test]
fn test_bunker_build_without_make_fails() {
    let mut bunker = Bunker::default();
    assert!(bunker.build().unwrap_err().is_not_prepared());
}

#[test]
fn test_bunker_is_hollow_above_the_floor() {
    let mut bunker = Bunker::new(plain_bunker());
    bunker.make().unwrap();
    let result = bunker.build().unwrap();

    // cavity
    assert!(!contains(result, Point3::new(0.0, 0.0, 0.0)));
    // floor slab
    assert!(contains(result, Point3::new(0.0, 0.0, -36.0)));
    // front wall near its base
    assert!(contains(result, Point3::new(0.0, -67.0, -30.0)));
}

#[test]
fn test_single_panel_cut_opens_one_bay() {
    let mut bunker = Bunker::new(BunkerParams {
        render_cut_panels: true,
        cut_panel_keep: front_zero(),
        ..plain_bunker()
    });
    bunker.make().unwrap();
    let cuts = bunker.cache().unwrap().panel_cuts.as_ref().unwrap();
    assert_eq!(cuts.len(), 1);

    let result = bunker.build().unwrap();
    let layout = SeriesLayout::new(BunkerParams::default().panel_series(&KeepList::all())).unwrap();
    let bay = |ordinal: usize| {
        layout
            .slots()
            .iter()
            .find(|slot| slot.id == SlotId::new(Edge::Front, ordinal))
            .unwrap()
            .placement
            .translation
            .x
    };
    assert_eq!(bay(0), -48.0);

    assert!(!contains(result, Point3::new(bay(0), -67.0, -30.0)));
    assert!(contains(result, Point3::new(bay(1), -67.0, -30.0)));
}

#[test]
fn test_panel_assembly_order() {
    let mut bunker = Bunker::new(BunkerParams {
        render_cut_panels: true,
        render_panel_details: true,
        cut_panel_keep: front_zero(),
        detail_panel_keep: front_zero(),
        ..plain_bunker()
    });
    bunker.make().unwrap();
    bunker.build().unwrap();
    assert_eq!(
        bunker.plan().unwrap().steps(),
        &[
            (Operation::Base, Feature::Body),
            (Operation::Cut, Feature::PanelCuts),
            (Operation::Union, Feature::Panels),
        ]
    );
}

#[test]
fn test_roof_follows_bunker_interior() {
    let bunker = Bunker::default();
    let span = bunker.interior_span();
    assert_eq!((span.length, span.width), (130.0, 120.0));

    let mut roof = FlatRoof::new(bunker.params().matching_roof());
    roof.params_mut().render_hatches = true;
    let layout = SeriesLayout::new(roof.params().hatch_series()).unwrap();
    assert_eq!(layout.slots().len(), 12);
    assert_eq!(roof.params().hatch_span(), (130.0, 120.0));
    assert_eq!(roof.dimensions(), (150.0, 140.0, 25.0));
}
