pub mod b001_page;
pub mod b002_navigation;
pub mod b003_flying_content;
pub mod b005_book;
