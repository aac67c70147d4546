
pub use test_app::TestApp;
