use super::*;
use crate::net::error::ApiError;

#[derive(Clone, Debug, PartialEq)]
struct Row {
    id: i64,
}

impl Keyed for Row {
    type Key = i64;

    fn key(&self) -> i64 {
        self.id
    }
}

#[test]
fn loading_shows_loading_placeholder() {
    let state = FetchState::<Vec<Row>>::Loading;
    assert_eq!(list_view(&state, "loading", "error"), ListView::Placeholder("loading"));
}

#[test]
fn any_error_shows_error_placeholder() {
    for err in [
        ApiError::Http { status: 401, reason: String::new() },
        ApiError::Http { status: 404, reason: String::new() },
        ApiError::Http { status: 500, reason: String::new() },
        ApiError::Network("down".to_owned()),
        ApiError::Validation("bad".to_owned()),
    ] {
        let state = FetchState::<Vec<Row>>::Error(err);
        assert_eq!(list_view(&state, "loading", "error"), ListView::Placeholder("error"));
    }
}

#[test]
fn loaded_rows_keep_response_order_and_keys() {
    let state = FetchState::Loaded(vec![Row { id: 1 }, Row { id: 2 }]);
    let ListView::Items(items) = list_view(&state, "loading", "error") else {
        panic!("expected items");
    };
    let keys: Vec<i64> = items.iter().map(Keyed::key).collect();
    assert_eq!(keys, [1, 2]);
}

#[test]
fn empty_payload_renders_no_rows() {
    let state = FetchState::<Vec<Row>>::Loaded(Vec::new());
    assert_eq!(list_view(&state, "loading", "error"), ListView::Items(Vec::new()));
}
