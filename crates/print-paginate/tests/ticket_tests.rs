use print_paginate::*;

#[test]
fn test_ticket_contains_exact_keys() {
    let entries = ticket_entries(&LayoutOptions::default());
    let expected = [
        "layout.kind",
        "layout.nup.rows",
        "layout.nup.columns",
        "layout.nup.order",
        "layout.booklet.bindLongEdge",
        "layout.poster.tileCount",
        "layout.poster.rows",
        "layout.poster.columns",
    ];
    for key in expected {
        assert!(entries.contains_key(key), "missing key {}", key);
    }
    assert_eq!(entries.len(), expected.len());
}

#[test]
fn test_ticket_values_reflect_options() {
    let options = LayoutOptions {
        layout_kind: LayoutKind::NUp,
        nup_rows: 2,
        nup_columns: 3,
        nup_order: NupOrder::RightToLeftTopToBottom,
        booklet_bind_long_edge: false,
        poster_tile_count: 6,
        ..LayoutOptions::default()
    };
    let entries = ticket_entries(&options);

    assert_eq!(entries["layout.kind"], "NUp");
    assert_eq!(entries["layout.nup.rows"], "2");
    assert_eq!(entries["layout.nup.columns"], "3");
    assert_eq!(entries["layout.nup.order"], "RightToLeftTopToBottom");
    assert_eq!(entries["layout.booklet.bindLongEdge"], "0");
    assert_eq!(entries["layout.poster.tileCount"], "6");
}

#[test]
fn test_ticket_poster_grid_consistent_with_composer() {
    let options = LayoutOptions {
        layout_kind: LayoutKind::Poster,
        poster_tile_count: 4,
        ..LayoutOptions::default()
    };
    let entries = ticket_entries(&options);
    let rows: usize = entries["layout.poster.rows"].parse().unwrap();
    let cols: usize = entries["layout.poster.columns"].parse().unwrap();
    assert!(rows * cols >= 4);

    let stats = calculate_statistics(1, &options).unwrap();
    assert_eq!(stats.poster_grid, Some((rows, cols)));
}
