//! Idempotent DDL applied by [`crate::ensure_schema`] at process start.
//!
//! The four entity tables are fully independent: no foreign keys, no
//! cross-references.

pub(crate) const SCHEMA_SQL: &str = "
CREATE TABLE IF NOT EXISTS categories (
    id          BIGSERIAL PRIMARY KEY,
    name        TEXT NOT NULL,
    description TEXT
);

CREATE TABLE IF NOT EXISTS places (
    id       BIGSERIAL PRIMARY KEY,
    name     TEXT NOT NULL,
    location TEXT
);

CREATE TABLE IF NOT EXISTS images (
    id       BIGSERIAL PRIMARY KEY,
    filename TEXT NOT NULL,
    url      TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS videos (
    id       BIGSERIAL PRIMARY KEY,
    filename TEXT NOT NULL,
    url      TEXT NOT NULL
);
";
