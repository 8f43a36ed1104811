mod csv_tests;
mod detect_tests;
mod json_tests;
