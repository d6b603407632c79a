//! Database-backed integration tests.
//!
//! The suite needs a real PostgreSQL instance and is skipped unless
//! `STAYHUB_TEST_DATABASE_URL` is set.

mod helpers;

mod booking_test;
