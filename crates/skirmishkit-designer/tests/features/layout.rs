use nalgebra::Point3;
use skirmishkit_core::geometry::cuboid;
use skirmishkit_core::Solid;
use skirmishkit_designer::series::{Edge, KeepList, SeriesLayout, SeriesParams, SlotId};

use crate::support::Marker;

fn front_back_params() -> SeriesParams {
    SeriesParams {
        outer_length: 60.0,
        outer_width: 60.0,
        component_length: 25.0,
        padding: 2.0,
        x_translate: 17.5,
        y_translate: 17.5,
        edges: vec![Edge::Front, Edge::Back],
        ..SeriesParams::default()
    }
}

#[test]
fn test_four_slot_layout() {
    let layout = SeriesLayout::new(front_back_params()).unwrap();
    assert_eq!(layout.slots().len(), 4);
    assert_eq!(layout.count(Edge::Front), 2);
    assert_eq!(layout.count(Edge::Back), 2);
    // 60 - (2 * 25 + 2) = 8 -> 4 each end
    assert_eq!(layout.end_margin(Edge::Front), Some(4.0));
}

#[test]
fn test_keep_front_two_of_four() {
    let all = SeriesLayout::new(front_back_params()).unwrap();
    let keep: KeepList = [SlotId::new(Edge::Front, 0), SlotId::new(Edge::Front, 1)]
        .into_iter()
        .collect();
    let filtered = SeriesLayout::new(SeriesParams {
        keep,
        ..front_back_params()
    })
    .unwrap();

    let template = cuboid(25.0, 5.0, 5.0).unwrap();
    let scene = filtered.scene(&template);
    assert_eq!(scene.len(), 2);
    assert!(scene
        .placements()
        .iter()
        .all(|slot| slot.id.edge == Edge::Front));

    for slot in scene.placements() {
        let original = all
            .slots()
            .iter()
            .find(|candidate| candidate.id == slot.id)
            .unwrap();
        assert_eq!(slot.placement, original.placement);
    }

    let bounds = scene.solid().bounds().unwrap();
    assert!(bounds.max.y < 0.0);
    assert!((bounds.min.x + 26.0).abs() < 1e-6);
    assert!((bounds.max.x - 26.0).abs() < 1e-6);
}

#[test]
fn test_unknown_keep_ids_are_ignored() {
    let keep: KeepList = [SlotId::new(Edge::Front, 0), SlotId::new(Edge::Left, 7)]
        .into_iter()
        .collect();
    let layout = SeriesLayout::new(SeriesParams {
        keep,
        ..front_back_params()
    })
    .unwrap();
    let scene = layout.scene(&Marker::at_origin());
    assert_eq!(scene.len(), 1);
    assert_eq!(scene.placements()[0].id, SlotId::new(Edge::Front, 0));
}

#[test]
fn test_keep_list_naming_nothing_real_gives_empty_scene() {
    let keep: KeepList = [SlotId::new(Edge::Right, 0)].into_iter().collect();
    let layout = SeriesLayout::new(SeriesParams {
        keep,
        ..front_back_params()
    })
    .unwrap();
    let scene = layout.scene(&cuboid(1.0, 1.0, 1.0).unwrap());
    assert!(scene.is_empty());
    assert!(scene.solid().is_empty());
}

#[test]
fn test_negative_span_yields_no_slots() {
    let layout = SeriesLayout::new(SeriesParams {
        outer_length: 10.0,
        outer_width: 10.0,
        length_offset: 30.0,
        ..SeriesParams::default()
    })
    .unwrap();
    assert!(layout.slots().is_empty());
}

#[test]
fn test_identical_inputs_give_identical_scenes() {
    let template = Marker(vec![Point3::new(1.0, 2.0, 3.0)]);
    let a = SeriesLayout::new(SeriesParams::default())
        .unwrap()
        .scene(&template);
    let b = SeriesLayout::new(SeriesParams::default())
        .unwrap()
        .scene(&template);
    assert_eq!(a.solid(), b.solid());
    assert_eq!(a.placements(), b.placements());
}

#[test]
fn test_ordinals_ascend_along_positive_axis() {
    let layout = SeriesLayout::new(SeriesParams::default()).unwrap();
    for edge in Edge::ALL {
        let along: Vec<f64> = layout
            .slots()
            .iter()
            .filter(|slot| slot.id.edge == edge)
            .map(|slot| {
                if edge.is_length_edge() {
                    slot.placement.translation.x
                } else {
                    slot.placement.translation.y
                }
            })
            .collect();
        assert!(along.windows(2).all(|w| w[0] < w[1]), "edge {edge}");
    }
}
