//! Browser-only capabilities. Nothing here is reachable from native tests.

pub mod download;
