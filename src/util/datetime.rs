//! Conversions between the server's local date-times and `datetime-local` inputs.
//!
//! The server stores `YYYY-MM-DDTHH:MM:SS`; the browser input shows and
//! emits `YYYY-MM-DDTHH:MM`.

#[cfg(test)]
#[path = "datetime_test.rs"]
mod datetime_test;

const INPUT_LEN: usize = "YYYY-MM-DDTHH:MM".len();
const SERVER_LEN: usize = "YYYY-MM-DDTHH:MM:SS".len();

fn has_shape(raw: &str) -> bool {
    raw.char_indices().all(|(i, c)| match i {
        4 | 7 => c == '-',
        10 => c == 'T',
        13 | 16 => c == ':',
        _ => c.is_ascii_digit(),
    })
}

/// Server value for an input value, or `None` if it is not a date-time.
#[must_use]
pub fn input_to_server(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if !has_shape(raw) {
        return None;
    }
    match raw.len() {
        INPUT_LEN => Some(format!("{raw}:00")),
        SERVER_LEN => Some(raw.to_owned()),
        _ => None,
    }
}

/// Input value for a server date-time; seconds are dropped.
#[must_use]
pub fn server_to_input(stored: &str) -> String {
    stored.get(..INPUT_LEN).unwrap_or(stored).to_owned()
}
