//! End-to-end checks across `sift-common` and `sift-core`.

mod filtering {
    mod integration;
}

mod sources {
    mod integration;
}
