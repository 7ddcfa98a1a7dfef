use print_paginate::*;

#[test]
fn test_default_options() {
    let options = LayoutOptions::default();
    assert_eq!(options.layout_kind, LayoutKind::Standard);
    assert_eq!(options.paper_size, PaperSize::Letter);
    assert_eq!(options.orientation, Orientation::Portrait);
    assert_eq!(options.nup_rows, 1);
    assert_eq!(options.nup_columns, 1);
    assert_eq!(options.poster_tile_count, 1);
    assert!(options.booklet_bind_long_edge);
    assert!(!options.selection_only);
    assert!(options.page_range.is_none());
    assert!(options.validate().is_ok());
}

#[test]
fn test_validate_rejects_zero_grid() {
    let options = LayoutOptions {
        nup_columns: 0,
        ..LayoutOptions::default()
    };
    assert!(matches!(
        options.validate(),
        Err(PaginateError::Config(_))
    ));
}

#[test]
fn test_validate_rejects_zero_poster_tiles() {
    let options = LayoutOptions {
        poster_tile_count: 0,
        ..LayoutOptions::default()
    };
    assert!(options.validate().is_err());
}

#[test]
fn test_validate_rejects_bad_paper() {
    let options = LayoutOptions {
        paper_size: PaperSize::Custom {
            width_in: 0.0,
            height_in: 11.0,
        },
        ..LayoutOptions::default()
    };
    assert!(options.validate().is_err());
}

#[test]
fn test_validate_rejects_inverted_page_range() {
    let options = LayoutOptions {
        page_range: Some(PageRange::new(5, 2)),
        ..LayoutOptions::default()
    };
    assert!(options.validate().is_err());

    let options = LayoutOptions {
        page_range: Some(PageRange::new(0, 2)),
        ..LayoutOptions::default()
    };
    assert!(options.validate().is_err());
}

#[test]
fn test_paper_size_dimensions() {
    let (w, h) = PaperSize::Letter.dimensions_in();
    assert_eq!((w, h), (8.5, 11.0));
    let (w, h) = PaperSize::A4.dimensions_in();
    assert!((w - 8.27).abs() < 0.001);
    assert!((h - 11.69).abs() < 0.001);
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_options_save_and_load_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("layout.json");

    let options = LayoutOptions {
        paper_size: PaperSize::A4,
        orientation: Orientation::Landscape,
        layout_kind: LayoutKind::NUp,
        nup_rows: 2,
        nup_columns: 3,
        nup_order: NupOrder::TopToBottomRightToLeft,
        page_range: Some(PageRange::new(1, 10)),
        ..LayoutOptions::default()
    };

    options.save(&path).await.unwrap();
    let loaded = LayoutOptions::load(&path).await.unwrap();
    assert_eq!(loaded, options);
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_load_rejects_malformed_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("layout.json");
    tokio::fs::write(&path, b"{ not json").await.unwrap();

    let result = LayoutOptions::load(&path).await;
    assert!(matches!(result, Err(PaginateError::Config(_))));
}
