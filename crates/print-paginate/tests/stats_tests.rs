use print_paginate::*;

#[test]
fn test_standard_stats() {
    let stats = calculate_statistics(7, &LayoutOptions::default()).unwrap();
    assert_eq!(stats.source_pages, 7);
    assert_eq!(stats.output_sheets, 7);
    assert_eq!(stats.blank_pages_added, 0);
    assert_eq!(stats.tiles_per_sheet, 1);
    assert!(stats.poster_grid.is_none());
}

#[test]
fn test_nup_stats_ceil_division() {
    let options = LayoutOptions {
        layout_kind: LayoutKind::NUp,
        nup_rows: 2,
        nup_columns: 2,
        ..LayoutOptions::default()
    };
    let stats = calculate_statistics(5, &options).unwrap();
    assert_eq!(stats.output_sheets, 2);
    assert_eq!(stats.tiles_per_sheet, 4);

    let stats = calculate_statistics(8, &options).unwrap();
    assert_eq!(stats.output_sheets, 2);
}

#[test]
fn test_booklet_padding_law() {
    let options = LayoutOptions {
        layout_kind: LayoutKind::Booklet,
        ..LayoutOptions::default()
    };
    for n in 1..=12usize {
        let stats = calculate_statistics(n, &options).unwrap();
        let padded = n + stats.blank_pages_added;
        assert_eq!(padded % 4, 0, "padded count {} for {} pages", padded, n);
        assert_eq!(stats.blank_pages_added, (4 - n % 4) % 4);
        assert_eq!(stats.output_sheets, padded / 2);
    }
}

#[test]
fn test_poster_stats_resolve_grid() {
    let options = LayoutOptions {
        layout_kind: LayoutKind::Poster,
        poster_tile_count: 4,
        ..LayoutOptions::default()
    };
    let stats = calculate_statistics(2, &options).unwrap();
    let (rows, cols) = stats.poster_grid.unwrap();
    assert!(rows * cols >= 4);
    assert_eq!(stats.output_sheets, 2 * (rows * cols).min(4));
}

#[test]
fn test_zero_pages_is_an_error() {
    assert!(matches!(
        calculate_statistics(0, &LayoutOptions::default()),
        Err(PaginateError::NoPages)
    ));
}
