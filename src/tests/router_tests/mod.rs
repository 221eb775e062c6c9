mod detail_tests;
mod home_tests;
mod properties_tests;
