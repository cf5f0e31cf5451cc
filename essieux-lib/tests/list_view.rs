//! End-to-end behavior of the list-view engine over loaded records.

use essieux_lib::PagePolicy;
use essieux_lib::TableConfig;
use essieux_lib::model::EntityKind;
use essieux_lib::model::Record;
use essieux_lib::table::Column;
use essieux_lib::table::Filter;
use essieux_lib::table::OrderBy;
use essieux_lib::table::Page;
use essieux_lib::table::TableView;
use essieux_lib::table::ViewEvent;
use essieux_lib::table::export_csv;

fn load(json: &str) -> Vec<Record> {
    serde_json::from_str(json).unwrap()
}

fn ids(rows: &[&Record]) -> Vec<String> {
    rows.iter().filter_map(|r| r.id()).collect()
}

fn two_essieux() -> Vec<Record> {
    load(
        r#"[
            {"id": "1", "situation": "EN EXPLOITATION", "serie": 9101},
            {"id": "2", "situation": null, "serie": 9102}
        ]"#,
    )
}

fn fleet(n: usize) -> Vec<Record> {
    (0..n)
        .map(|i| {
            Record::new("essieux")
                .set("id", format!("{}", i + 1))
                .set("serie", (9100 + (i % 7)) as i64)
                .set("marque", ["SKF", "Timken", "FAG"][i % 3])
                .set("wagon", format!("W-{}", 800 + i % 11))
                .set("situation", match i % 3 {
                    0 => Some("EN EXPLOITATION"),
                    1 => Some("DEMANDE"),
                    _ => None,
                })
        })
        .collect()
}

#[test]
fn test_null_situation_sorts_last_in_both_directions() {
    let records = two_essieux();
    let mut view = TableView::for_entity(EntityKind::Essieux, &records);

    view.dispatch(ViewEvent::SortBy("situation".into())).unwrap();
    assert_eq!(ids(view.derive().records()), ["1", "2"]);

    view.dispatch(ViewEvent::SortBy("situation".into())).unwrap();
    assert_eq!(ids(view.derive().records()), ["1", "2"]);
}

#[test]
fn test_null_filter_selects_missing_situation() {
    let records = two_essieux();
    let mut view = TableView::for_entity(EntityKind::Essieux, &records);
    view.dispatch(ViewEvent::Filter {
        name: "situation".into(),
        value: "null".into(),
    })
    .unwrap();
    assert_eq!(ids(&view.filtered()), ["2"]);
}

#[test]
fn test_45_records_make_three_pages() {
    let records = fleet(45);
    let rows: Vec<&Record> = records.iter().collect();

    let sizes: Vec<usize> = (1..=3).map(|p| Page::paginate(&rows, p, 20).len()).collect();
    assert_eq!(sizes, vec![20, 20, 5]);
    assert_eq!(Page::paginate(&rows, 1, 20).total_pages(), 3);
    assert_eq!(Page::paginate(&rows, 2, 20).records()[0].id().as_deref(), Some("21"));
}

#[test]
fn test_page_past_the_end_is_empty() {
    let records = fleet(45);
    let mut view = TableView::for_entity(EntityKind::Essieux, &records);
    view.dispatch(ViewEvent::GoToPage(10)).unwrap();

    let page = view.derive();
    assert!(page.is_empty());
    assert_eq!(page.total_pages(), 3);
}

#[test]
fn test_search_matches_brand_case_insensitively() {
    let records = load(r#"[{"id": "1", "marque": "SKF"}, {"id": "2", "marque": "FAG"}]"#);
    let mut view = TableView::for_entity(EntityKind::Essieux, &records);
    view.dispatch(ViewEvent::Search("skf".into())).unwrap();
    assert_eq!(ids(&view.filtered()), ["1"]);
}

#[test]
fn test_competences_export_joined_with_semicolons() {
    let records = load(
        r#"[{"id": "t1", "matricule": "T-001", "competences": ["Mécanique", "Soudure"]}]"#,
    );
    let view = TableView::for_entity(EntityKind::Travailleurs, &records);
    let export = view.export();

    assert_eq!(export.filename, "travailleurs.csv");
    assert!(export.content.contains("\"Mécanique; Soudure\""));
}

#[test]
fn test_derived_view_is_idempotent() {
    let records = fleet(60);
    let mut view = TableView::for_entity(EntityKind::Essieux, &records);
    view.dispatch(ViewEvent::Search("w-80".into())).unwrap();
    view.dispatch(ViewEvent::SortBy("marque".into())).unwrap();

    let first = view.derive();
    let second = view.derive();
    assert_eq!(first, second);
}

#[test]
fn test_adding_a_filter_never_grows_the_result() {
    let records = fleet(60);
    let base = Filter::search("skf");
    let narrowed = base.clone().and_also(Filter::eq("situation", "DEMANDE"));

    let wide = base.apply(&records);
    let narrow = narrowed.apply(&records);
    assert!(narrow.len() <= wide.len());
    assert!(narrow.iter().all(|r| wide.iter().any(|w| std::ptr::eq(*w, *r))));
}

#[test]
fn test_search_results_contain_the_term() {
    let records = fleet(60);
    for record in Filter::search("timken").apply(&records) {
        let found = record
            .fields()
            .values()
            .any(|v| !v.is_null() && v.to_string().to_lowercase().contains("timken"));
        assert!(found);
    }
}

#[test]
fn test_sort_is_stable() {
    let records = fleet(60);
    let rows: Vec<&Record> = records.iter().collect();
    let sorted = OrderBy::asc("marque").apply(rows);

    for pair in sorted.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if a.value("marque") == b.value("marque") {
            let ia: usize = a.id().unwrap().parse().unwrap();
            let ib: usize = b.id().unwrap().parse().unwrap();
            assert!(ia < ib);
        }
    }
}

#[test]
fn test_nulls_after_values_in_both_directions() {
    let records = fleet(30);
    for order in [OrderBy::asc("situation"), OrderBy::desc("situation")] {
        let rows: Vec<&Record> = records.iter().collect();
        let sorted = order.apply(rows);
        let first_null = sorted
            .iter()
            .position(|r| r.value("situation").is_null())
            .unwrap();
        assert!(sorted[first_null..].iter().all(|r| r.value("situation").is_null()));
    }
}

#[test]
fn test_pages_cover_the_ordered_rows_exactly_once() {
    let records = fleet(47);
    let mut view = TableView::for_entity(EntityKind::Essieux, &records)
        .with_config(TableConfig::new().with_page_size(10));
    view.dispatch(ViewEvent::SortBy("serie".into())).unwrap();

    let ordered = view.sorted();
    let rows: Vec<&Record> = (1..=view.total_pages())
        .flat_map(|p| Page::paginate(&ordered, p, 10).into_records())
        .collect();
    assert_eq!(ids(&rows), ids(&ordered));
}

#[test]
fn test_export_parses_back_to_stringified_values() {
    let records = load(
        r#"[
            {"id": "t1", "matricule": "T-001", "nom": "Dupont \"Jo\"", "note_moyenne": 4.5,
             "competences": ["Mécanique", "Soudure"], "niveau": null}
        ]"#,
    );
    let columns = vec![
        Column::new("matricule", "Matricule"),
        Column::new("nom", "Nom"),
        Column::new("note_moyenne", "Note"),
        Column::new("competences", "Compétences"),
        Column::new("niveau", "Niveau"),
    ];
    let rows: Vec<&Record> = records.iter().collect();
    let csv = export_csv(&columns, &rows);

    let mut reader = csv::ReaderBuilder::new().from_reader(csv.as_bytes());
    let header: Vec<String> = reader.headers().unwrap().iter().map(String::from).collect();
    assert_eq!(header, ["Matricule", "Nom", "Note", "Compétences", "Niveau"]);

    let row = reader.records().next().unwrap().unwrap();
    let cells: Vec<&str> = row.iter().collect();
    assert_eq!(cells, ["T-001", "Dupont \"Jo\"", "4.5", "Mécanique; Soudure", ""]);
}

#[test]
fn test_state_is_read_through_getters_after_events() {
    let records = fleet(45);
    let mut view = TableView::for_entity(EntityKind::Essieux, &records)
        .with_config(TableConfig::new().with_page_policy(PagePolicy::ResetOnChange));
    view.dispatch(ViewEvent::GoToPage(3)).unwrap();
    view.dispatch(ViewEvent::Search("skf".into())).unwrap();
    view.dispatch(ViewEvent::SortBy("serie".into())).unwrap();

    let state = view.state();
    assert_eq!(state.search(), "skf");
    assert_eq!(state.page(), 1);
    assert_eq!(state.order(), Some(&OrderBy::asc("serie")));
    assert!(state.filters().is_empty());
}

#[test]
fn test_numbers_keep_numeric_order_next_to_text() {
    let records = load(
        r#"[
            {"id": "a", "post": 10},
            {"id": "b", "post": 9},
            {"id": "c", "post": "x"},
            {"id": "d", "post": null}
        ]"#,
    );
    let rows: Vec<&Record> = records.iter().collect();

    assert_eq!(ids(&OrderBy::asc("post").apply(rows.clone())), ["b", "a", "c", "d"]);
    assert_eq!(ids(&OrderBy::desc("post").apply(rows)), ["c", "a", "b", "d"]);
}
