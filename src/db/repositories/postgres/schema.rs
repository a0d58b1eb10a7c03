//! Diesel schema for the counter table.

diesel::table! {
    counter (id) {
        id -> Int8,
        count -> Int8,
    }
}
