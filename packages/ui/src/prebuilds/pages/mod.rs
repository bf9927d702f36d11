//! Page-level prebuild components with data loading.

mod prebuilds_page;
mod repository_page;

pub use prebuilds_page::PrebuildsPage;
pub use repository_page::RepositoryPage;
