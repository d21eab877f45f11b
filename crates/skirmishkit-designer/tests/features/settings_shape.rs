use skirmishkit_designer::series::{Edge, SlotId};
use skirmishkit_designer::{BunkerParams, FlatRoofParams, KeepList, TileMode};

#[test]
fn test_partial_roof_json_uses_defaults() {
    let params: FlatRoofParams =
        serde_json::from_str(r#"{ "length": 120.0, "render_tiles": true }"#).unwrap();
    assert_eq!(params.length, 120.0);
    assert!(params.render_tiles);
    assert_eq!(params.width, 150.0);
    assert_eq!(params.tile_mode, TileMode::Auto);
    assert!(params.hatch_panels.is_empty());
}

#[test]
fn test_keep_list_json_shape() {
    let keep: KeepList = [SlotId::new(Edge::Back, 2), SlotId::new(Edge::Front, 0)]
        .into_iter()
        .collect();
    let json = serde_json::to_string(&keep).unwrap();
    assert_eq!(
        json,
        r#"[{"edge":"front","ordinal":0},{"edge":"back","ordinal":2}]"#
    );
    let back: KeepList = serde_json::from_str(&json).unwrap();
    assert_eq!(back, keep);
}

#[test]
fn test_tile_mode_names() {
    let params: FlatRoofParams = serde_json::from_str(r#"{ "tile_mode": "recessed" }"#).unwrap();
    assert!(params.cut_tiles());
    assert!(serde_json::from_str::<FlatRoofParams>(r#"{ "tile_mode": "sunken" }"#).is_err());
}

#[test]
fn test_bunker_keep_lists_deserialize() {
    let params: BunkerParams = serde_json::from_str(
        r#"{ "detail_panel_keep": [{ "edge": "left", "ordinal": 1 }] }"#,
    )
    .unwrap();
    assert!(params.cut_panel_keep.is_empty());
    assert!(params
        .detail_panel_keep
        .keeps(&SlotId::new(Edge::Left, 1)));
    assert!(!params
        .detail_panel_keep
        .keeps(&SlotId::new(Edge::Left, 0)));
}
